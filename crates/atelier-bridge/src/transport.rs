//! # Transport Seam
//!
//! Abstract interface to the externally-owned connector bus. The host's
//! connector runtime owns the socket, the framing, and the delivery
//! guarantees; this crate only hands it a message-kind identifier and a
//! payload string.
//!
//! The trait requires `Send + Sync` so a host may send from any thread.
//! Each call is synchronous and delivers-or-fails with no partial-send
//! state visible to the caller.

use thiserror::Error;

use atelier_core::MessageKindId;

use crate::context::ConnectorContext;

/// Error surfaced by the transport on a failed send.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The connection named by the context is no longer open.
    #[error("connection closed: {0}")]
    ConnectionClosed(String),

    /// The transport accepted the call but could not deliver the message.
    #[error("write failed: {0}")]
    WriteFailed(String),
}

/// Abstract interface to the connector bus.
///
/// Implementations are provided by the host runtime; tests use a recording
/// stub. The trait ensures that the real bus and the stub are
/// interchangeable at compile time.
pub trait Transport: Send + Sync {
    /// Hand a payload to the bus under a message-kind identifier.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the message could not be delivered.
    fn write_message(
        &self,
        ctx: &ConnectorContext,
        kind: MessageKindId,
        payload: &str,
    ) -> Result<(), TransportError>;
}
