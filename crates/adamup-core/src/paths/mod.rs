//! Path utilities for extension storage and temporary bundles.
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - Temporary bundle names are unique per update run

mod error;
mod storage;
mod temp_bundle;

pub use error::PathError;
pub use storage::{default_storage_dir, ensure_storage_dir};
pub use temp_bundle::{BUNDLE_EXTENSION, TempBundle, bundle_file_name};
