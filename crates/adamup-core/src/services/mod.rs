//! Core services - the application's business logic layer.
//!
//! Services orchestrate between ports (trait interfaces) and domain logic.
//! They don't know about concrete implementations.

mod update_service;

pub use update_service::{ACTION_NO, ACTION_RELOAD, ACTION_YES, UpdateService, UpdateServiceDeps};
