//! # atelier-schema — Wire Contract Validation
//!
//! Runtime JSON Schema validation for the Atelier Connector's structured
//! import payload.
//!
//! The [`validate`] module compiles the embedded Draft 2020-12 schema in
//! `schemas/import-notice.schema.json` and checks serialized payload text
//! against it. Key type:
//!
//! - [`NoticeValidator`] — compiled once, shared freely; `validate_text`
//!   performs the round-trip check used by the structured send path.
//!
//! ## Crate Policy
//!
//! - The schema document is embedded at compile time; nothing is read from
//!   disk at runtime.
//! - Schema validation is a trust boundary: nonconforming payloads are
//!   rejected with structured violations (instance path, schema path,
//!   message), never silently passed through.

pub mod validate;

pub use validate::{NoticeValidator, SchemaValidationError, ValidationViolations, Violation};
