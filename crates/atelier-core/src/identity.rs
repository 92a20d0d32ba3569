//! # Identifier Newtypes
//!
//! Newtype wrappers for the two identifier namespaces in the connector:
//! notice instance ids and message-kind routing ids. These prevent
//! accidental identifier confusion — you cannot route a message on a
//! `NoticeId` or stamp a notice with a `MessageKindId`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a single import notice instance.
///
/// Generated fresh at notice construction and never reused. Freshness is
/// probabilistic (v4 random); no registry of past ids is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoticeId(pub Uuid);

/// Identifier for a message kind on the connector bus.
///
/// Message-kind ids are fixed, stable routing values that must match
/// exactly across applications for interoperability. They are declared as
/// module-scoped constants by the feature that owns them; there is no
/// process-wide mutable registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageKindId(pub Uuid);

impl NoticeId {
    /// Generate a new random notice identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for NoticeId {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageKindId {
    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for NoticeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for MessageKindId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_ids_are_distinct() {
        let a = NoticeId::new();
        let b = NoticeId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_notice_id_serializes_as_bare_uuid_string() {
        let id = NoticeId::new();
        let json = serde_json::to_string(&id).unwrap();
        // Newtype transparency: the wire form is the RFC 4122 text form,
        // not an object wrapper.
        assert_eq!(json, format!("\"{}\"", id.as_uuid()));
    }

    #[test]
    fn test_message_kind_id_round_trip() {
        let kind = MessageKindId(uuid::uuid!("91e3dfbc-80b8-4b1a-92d5-63ec09ac641a"));
        let json = serde_json::to_string(&kind).unwrap();
        let back: MessageKindId = serde_json::from_str(&json).unwrap();
        assert_eq!(kind, back);
    }

    #[test]
    fn test_display_is_hyphenated_uuid() {
        let kind = MessageKindId(uuid::uuid!("72538d04-276f-4254-a45b-d3654f705477"));
        assert_eq!(kind.to_string(), "72538d04-276f-4254-a45b-d3654f705477");
    }
}
