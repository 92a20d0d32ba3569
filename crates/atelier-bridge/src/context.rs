//! # Connector Context
//!
//! The opaque per-connection handle the host's connector runtime threads
//! through every send and receive. Context construction belongs to the
//! host's registration layer; this crate only carries the handle and reads
//! the peer label for log lines.

use uuid::Uuid;

/// Handle for one connection to a peer application.
#[derive(Debug, Clone)]
pub struct ConnectorContext {
    connection: Uuid,
    application: String,
}

impl ConnectorContext {
    /// Create a context for a connection to the named peer application.
    pub fn new(application: impl Into<String>) -> Self {
        Self {
            connection: Uuid::new_v4(),
            application: application.into(),
        }
    }

    /// The connection identifier assigned at construction.
    pub fn connection(&self) -> &Uuid {
        &self.connection
    }

    /// The peer application label.
    pub fn application(&self) -> &str {
        &self.application
    }
}
