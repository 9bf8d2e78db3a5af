//! Custom URI scheme callbacks.
//!
//! The host hands the extension URIs such as
//! `vscode://adamai.adam-vscode/openrouter?code=abc` after an external
//! sign-in. Only the path and the query matter here.

use thiserror::Error;
use url::Url;

/// Path of the OpenRouter sign-in callback.
pub const OPENROUTER_CALLBACK_PATH: &str = "/openrouter";

/// Errors produced while parsing a callback URI.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UriError {
    /// The string is not an absolute URI.
    #[error("Invalid callback URI '{uri}': {reason}")]
    Invalid { uri: String, reason: String },
}

/// Where a callback URI should go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UriRoute {
    /// OpenRouter returned an authorization code.
    OpenRouter { code: String },
    /// Nothing handles this URI.
    Ignored,
}

/// A callback URI reduced to `{ path, query }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackUri {
    /// Path component, always starting with `/` for hierarchical URIs.
    pub path: String,
    /// Decoded query pairs in the order they appeared.
    pub query: Vec<(String, String)>,
}

impl CallbackUri {
    /// Parse a raw URI string.
    ///
    /// Query values are percent-decoded, but a literal `+` stays a `+`:
    /// authorization codes may contain it and must reach the provider intact.
    pub fn parse(raw: &str) -> Result<Self, UriError> {
        let url = Url::parse(raw).map_err(|e| UriError::Invalid {
            uri: raw.to_string(),
            reason: e.to_string(),
        })?;

        let query = url
            .query()
            .map(|q| {
                let preserved = q.replace('+', "%2B");
                url::form_urlencoded::parse(preserved.as_bytes())
                    .into_owned()
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            path: url.path().to_string(),
            query,
        })
    }

    /// First value for a query key.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Decide which handler owns this URI.
    ///
    /// An OpenRouter callback without a code, or with an empty one, is ignored.
    pub fn route(&self) -> UriRoute {
        match self.path.as_str() {
            OPENROUTER_CALLBACK_PATH => match self.query_param("code") {
                Some(code) if !code.is_empty() => UriRoute::OpenRouter {
                    code: code.to_string(),
                },
                _ => UriRoute::Ignored,
            },
            _ => UriRoute::Ignored,
        }
    }
}
