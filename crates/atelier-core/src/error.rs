//! # Error Types
//!
//! Errors raised by the core crate. All errors use `thiserror` for
//! derive-based `Display` and `Error` implementations. Validation and
//! dispatch failures have their own types in the crates that own those
//! boundaries (`atelier-schema`, `atelier-bridge`).

use thiserror::Error;

/// Error during canonical wire-text production.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// JSON serialization of the source value failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}
