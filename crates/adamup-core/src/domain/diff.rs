//! Read-only diff documents.
//!
//! The webview opens diffs against URIs of the form
//! `claude-dev-diff:<name>?<base64 text>`; the document text travels in the
//! query so no temporary file is needed.

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use thiserror::Error;
use url::Url;

/// Scheme the diff content provider is registered for.
pub const DIFF_URI_SCHEME: &str = "claude-dev-diff";

/// Standard alphabet, padding optional, trailing bits ignored.
const FORGIVING_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Errors produced by the diff content provider.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DiffContentError {
    /// The URI could not be parsed.
    #[error("Invalid diff URI '{uri}': {reason}")]
    InvalidUri { uri: String, reason: String },

    /// The URI belongs to another scheme.
    #[error("Unsupported scheme '{0}', expected 'claude-dev-diff'")]
    WrongScheme(String),
}

/// Decode the text carried in a (percent-encoded) URI query.
///
/// Decoding never fails. URL-safe symbols (`-`, `_`) are accepted, anything
/// outside the base64 alphabet is skipped, decoding stops at the first `=`,
/// and invalid UTF-8 is replaced.
pub fn diff_content_from_query(query: &str) -> String {
    let raw = urlencoding::decode_binary(query.as_bytes());
    let mut symbols: Vec<u8> = raw
        .iter()
        .take_while(|&&b| b != b'=')
        .filter_map(|&b| match b {
            b'-' => Some(b'+'),
            b'_' => Some(b'/'),
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'+' | b'/' => Some(b),
            _ => None,
        })
        .collect();

    // A lone trailing symbol carries less than one byte.
    if symbols.len() % 4 == 1 {
        symbols.pop();
    }

    FORGIVING_BASE64.decode(&symbols).map_or_else(
        |_| String::new(),
        |bytes| String::from_utf8_lossy(&bytes).into_owned(),
    )
}

/// Provide the document text for a `claude-dev-diff:` URI.
///
/// A URI without a query is an empty document.
pub fn provide_diff_content(uri: &str) -> Result<String, DiffContentError> {
    let url = Url::parse(uri).map_err(|e| DiffContentError::InvalidUri {
        uri: uri.to_string(),
        reason: e.to_string(),
    })?;

    if url.scheme() != DIFF_URI_SCHEME {
        return Err(DiffContentError::WrongScheme(url.scheme().to_string()));
    }

    Ok(url.query().map_or_else(String::new, diff_content_from_query))
}
