//! # Schema Validation
//!
//! Runtime validation of serialized import notices against the JSON Schema
//! definition (Draft 2020-12) in `schemas/import-notice.schema.json`.
//!
//! ## Trust Boundary
//!
//! Schema validation gates the structured send path. The validator checks
//! the serialized text, not the in-memory record: the round trip through
//! the text form guarantees that what is checked is exactly what will be
//! transmitted, so a serialization-layer defect cannot put a malformed
//! payload on the wire.
//!
//! Payloads that fail validation are rejected with structured error
//! information including the instance path, the schema path, and a
//! human-readable message per violation.
//!
//! The schema document is embedded at compile time; a plugin running
//! inside a host application must not read schema files from disk.

use std::fmt;

use jsonschema::Validator;
use serde_json::Value;
use thiserror::Error;

/// The embedded schema document for the structured import payload.
static NOTICE_SCHEMA_TEXT: &str = include_str!("../schemas/import-notice.schema.json");

/// Error during schema validation.
#[derive(Error, Debug)]
pub enum SchemaValidationError {
    /// The payload did not conform to the schema.
    #[error("validation failed against the import-notice schema:\n{violations}")]
    ValidationFailed {
        /// Structured list of individual violations.
        violations: ValidationViolations,
    },

    /// The payload text is not parseable as JSON at all.
    #[error("payload is not valid JSON: {reason}")]
    InvalidJson {
        /// Reason the payload could not be parsed.
        reason: String,
    },

    /// The embedded schema could not be compiled into a validator.
    #[error("schema compile error: {reason}")]
    SchemaCompile {
        /// Reason the validator could not be built.
        reason: String,
    },
}

/// A single validation violation with structured context.
#[derive(Debug, Clone)]
pub struct Violation {
    /// JSON Pointer path to the violating field in the payload.
    pub instance_path: String,
    /// JSON Pointer path within the schema that triggered the error.
    pub schema_path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "  (root): {}", self.message)
        } else {
            write!(f, "  {}: {}", self.instance_path, self.message)
        }
    }
}

/// Collection of validation violations.
#[derive(Debug, Clone)]
pub struct ValidationViolations {
    violations: Vec<Violation>,
}

impl ValidationViolations {
    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// A compiled validator for the import-notice wire contract.
///
/// Compiles the embedded schema once at construction; validation itself
/// allocates nothing beyond the violation report.
///
/// ## Thread Safety
///
/// `NoticeValidator` is `Send + Sync` — a compiled validator can be shared
/// across threads.
#[derive(Debug)]
pub struct NoticeValidator {
    validator: Validator,
}

impl NoticeValidator {
    /// Compile the embedded import-notice schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaValidationError::SchemaCompile` if the embedded
    /// schema document is not itself valid JSON or does not compile.
    pub fn new() -> Result<Self, SchemaValidationError> {
        let schema: Value = serde_json::from_str(NOTICE_SCHEMA_TEXT).map_err(|e| {
            SchemaValidationError::SchemaCompile {
                reason: format!("embedded schema is not valid JSON: {e}"),
            }
        })?;

        let mut opts = jsonschema::options();
        opts.with_draft(jsonschema::Draft::Draft202012);

        let validator = opts
            .build(&schema)
            .map_err(|e| SchemaValidationError::SchemaCompile {
                reason: e.to_string(),
            })?;

        Ok(Self { validator })
    }

    /// Validate serialized payload text against the import-notice schema.
    ///
    /// This is the round-trip check used on the send path: the text is
    /// re-parsed and the parsed form is structurally checked.
    ///
    /// # Errors
    ///
    /// Returns `SchemaValidationError::InvalidJson` if the text does not
    /// parse, or `SchemaValidationError::ValidationFailed` with structured
    /// violation details if the parsed form does not conform.
    pub fn validate_text(&self, payload: &str) -> Result<(), SchemaValidationError> {
        let instance: Value = serde_json::from_str(payload).map_err(|e| {
            SchemaValidationError::InvalidJson {
                reason: e.to_string(),
            }
        })?;
        self.validate_value(&instance)
    }

    /// Validate a parsed JSON value against the import-notice schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaValidationError::ValidationFailed` with structured
    /// violation details if the value does not conform.
    pub fn validate_value(&self, instance: &Value) -> Result<(), SchemaValidationError> {
        let errors: Vec<Violation> = self
            .validator
            .iter_errors(instance)
            .map(|e| Violation {
                instance_path: e.instance_path.to_string(),
                schema_path: e.schema_path.to_string(),
                message: e.to_string(),
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaValidationError::ValidationFailed {
                violations: ValidationViolations { violations: errors },
            })
        }
    }
}
