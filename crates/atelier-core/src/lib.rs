//! # atelier-core — Foundational Types for the Atelier Connector
//!
//! This crate is the bedrock of the Atelier Connector workspace. It defines
//! the import notice record, its canonical wire text, and the identifier
//! newtypes shared by the schema and bridge crates. Every other crate in the
//! workspace depends on `atelier-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for identifiers.** `NoticeId` and `MessageKindId`
//!    are uuid newtypes with distinct meanings — you cannot route on a
//!    notice id or stamp a notice with a routing id.
//!
//! 2. **`CanonicalText` newtype.** The wire payload for the structured send
//!    path is produced exclusively by `CanonicalText::new()`: lexicographic
//!    field order, stable indentation, deterministic output. No raw
//!    `serde_json::to_string()` on the send path.
//!
//! 3. **Required fields enforced by construction.** `ImportNotice` has no
//!    optional `path` or id — a notice cannot exist without them. Runtime
//!    schema validation stays at the serialization boundary only.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `atelier-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone`, and the wire-facing types
//!   implement `Serialize`/`Deserialize`.

pub mod canonical;
pub mod error;
pub mod identity;
pub mod notice;

// Re-export primary types for ergonomic imports.
pub use canonical::CanonicalText;
pub use error::CanonicalizationError;
pub use identity::{MessageKindId, NoticeId};
pub use notice::{ImportNotice, DEFAULT_ASSET_KIND};
