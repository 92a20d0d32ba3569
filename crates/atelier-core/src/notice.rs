//! # Import Notice — The Asset-Import Message Record
//!
//! The single record exchanged by the connector: "the asset at path P
//! should be imported elsewhere". Created per send attempt, validated
//! once, serialized once, discarded after handoff to the transport. No
//! persistence, no identity beyond the single message exchange.
//!
//! ## Wire Compatibility
//!
//! Field names on the wire are fixed by the cross-application contract:
//! `path`, `name`, `uuid`, `type`, `takeOwnership`. The Rust field names
//! differ (`id`, `kind`, `take_ownership`) and are mapped with serde
//! rename attributes. Receivers must accept any field order; optional
//! fields absent from an incoming payload take their documented defaults.

use serde::{Deserialize, Serialize};

use crate::canonical::CanonicalText;
use crate::error::CanonicalizationError;
use crate::identity::NoticeId;

/// Asset category tag applied when the sender does not specify one.
pub const DEFAULT_ASSET_KIND: &str = "sbsar";

/// A single asset-import notification.
///
/// `path` and `id` are always present after construction — the type has no
/// way to exist without them. `id` is generated fresh per construction, so
/// two notices for the same path are never recognized as duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportNotice {
    /// Filesystem location of the asset. Opaque to the connector.
    pub path: String,

    /// Display name for the receiving application. Defaults to empty.
    #[serde(default)]
    pub name: String,

    /// Fresh identifier distinguishing this notice instance.
    #[serde(rename = "uuid")]
    pub id: NoticeId,

    /// Asset category tag, e.g. `"sbsar"`.
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,

    /// Whether the receiving application should assume ownership of the
    /// asset resource.
    #[serde(rename = "takeOwnership", default)]
    pub take_ownership: bool,
}

fn default_kind() -> String {
    DEFAULT_ASSET_KIND.to_string()
}

impl ImportNotice {
    /// Construct a notice for `path` with the default asset kind.
    pub fn new(path: impl Into<String>) -> Self {
        Self::with_kind(path, DEFAULT_ASSET_KIND)
    }

    /// Construct a notice for `path` with an explicit asset kind.
    ///
    /// `name` starts empty and `take_ownership` starts false; both can be
    /// set before the notice is validated and sent.
    pub fn with_kind(path: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: String::new(),
            id: NoticeId::new(),
            kind: kind.into(),
            take_ownership: false,
        }
    }

    /// Produce the canonical wire text for this notice.
    ///
    /// # Errors
    ///
    /// Returns `CanonicalizationError` if JSON serialization fails.
    pub fn canonical_text(&self) -> Result<CanonicalText, CanonicalizationError> {
        CanonicalText::new(self)
    }
}
