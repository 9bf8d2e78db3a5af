//! HTTP update source for adamup.
//!
//! Implements [`adamup_core::UpdateSourcePort`] over HTTPS with reqwest:
//! a plain GET for the version file and a streamed GET for the bundle.
//!
//! # Usage
//!
//! ```no_run
//! use adamup_http::{HttpSourceConfig, HttpUpdateSource};
//!
//! let config = HttpSourceConfig::new(
//!     "https://example.com/version.txt",
//!     "https://example.com/extension.vsix",
//! );
//! let source = HttpUpdateSource::new(config)?;
//! # Ok::<(), adamup_http::SourceError>(())
//! ```

mod config;
mod error;
mod source;

pub use config::HttpSourceConfig;
pub use error::{SourceError, SourceResult};
pub use source::{HttpUpdateSource, ProgressCallback};
