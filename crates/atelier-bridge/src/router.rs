//! # Feature Registration and Routing
//!
//! A feature contributes two things to a connector session: the set of
//! message kinds it understands (advertised during connection negotiation)
//! and a callback table mapping message kinds to receive handlers.
//!
//! Composition is explicit: the host builds a [`Router`] from an ordered
//! list of features, this component's entries first, then inherited ones.
//! A message kind claimed by two features is a registration bug, and
//! composition fails loudly with [`RouterError::DuplicateKind`] rather
//! than letting one handler silently shadow the other.
//!
//! ## Receive Containment
//!
//! Incoming payloads are untrusted. A handler that cannot parse its
//! payload returns [`DispatchError::MalformedPayload`]; [`Router::receive`]
//! logs the failure and drops the message, so a malformed payload never
//! surfaces as a crash in the host.

use std::collections::HashMap;

use thiserror::Error;

use atelier_core::MessageKindId;

use crate::context::ConnectorContext;

/// A registered receive handler.
///
/// Handlers are stateless with respect to the router: everything they need
/// arrives with the call.
pub type Callback =
    Box<dyn Fn(&ConnectorContext, MessageKindId, &str) -> Result<(), DispatchError> + Send + Sync>;

/// Error during router composition.
#[derive(Error, Debug)]
pub enum RouterError {
    /// Two features registered a handler for the same message kind.
    #[error("duplicate handler registration for message kind {0}")]
    DuplicateKind(MessageKindId),
}

/// Error while dispatching an incoming message.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// No handler is registered for the message kind.
    #[error("no handler registered for message kind {0}")]
    UnknownKind(MessageKindId),

    /// The payload could not be parsed as the structure the handler expects.
    #[error("malformed payload for message kind {kind}: {reason}")]
    MalformedPayload {
        /// The message kind the payload arrived under.
        kind: MessageKindId,
        /// Parse failure detail.
        reason: String,
    },
}

/// A unit of connector functionality: advertised message kinds plus the
/// receive callbacks it contributes to the session's callback table.
///
/// A feature may advertise kinds it has no receive handler for — a
/// send-only compatibility kind is advertised so peers will accept it,
/// but nothing local consumes it.
pub trait Feature {
    /// The message kinds this feature understands, used by the connection
    /// negotiation layer. Stable across calls; no shared mutable state.
    fn message_kinds(&self) -> Vec<MessageKindId>;

    /// The {kind → handler} entries this feature contributes.
    fn callbacks(&self) -> Vec<(MessageKindId, Callback)>;
}

/// Immutable routing table built from an ordered list of features.
pub struct Router {
    handlers: HashMap<MessageKindId, Callback>,
    kinds: Vec<MessageKindId>,
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("kinds", &self.kinds)
            .finish_non_exhaustive()
    }
}

impl Router {
    /// Compose a router from features, in registration order.
    ///
    /// # Errors
    ///
    /// Returns `RouterError::DuplicateKind` if two features contribute a
    /// handler for the same message kind.
    pub fn compose(features: &[&dyn Feature]) -> Result<Self, RouterError> {
        let mut handlers: HashMap<MessageKindId, Callback> = HashMap::new();
        let mut kinds: Vec<MessageKindId> = Vec::new();

        for feature in features {
            for kind in feature.message_kinds() {
                if !kinds.contains(&kind) {
                    kinds.push(kind);
                }
            }
            for (kind, callback) in feature.callbacks() {
                if handlers.contains_key(&kind) {
                    return Err(RouterError::DuplicateKind(kind));
                }
                handlers.insert(kind, callback);
            }
        }

        Ok(Self { handlers, kinds })
    }

    /// The union of all advertised message kinds, in registration order.
    pub fn message_kinds(&self) -> &[MessageKindId] {
        &self.kinds
    }

    /// Whether a receive handler is registered for `kind`.
    pub fn has_handler(&self, kind: MessageKindId) -> bool {
        self.handlers.contains_key(&kind)
    }

    /// Route one incoming message to its handler.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::UnknownKind` if nothing is registered for
    /// `kind`, or the handler's own error.
    pub fn dispatch(
        &self,
        ctx: &ConnectorContext,
        kind: MessageKindId,
        payload: &str,
    ) -> Result<(), DispatchError> {
        match self.handlers.get(&kind) {
            Some(handler) => handler(ctx, kind, payload),
            None => Err(DispatchError::UnknownKind(kind)),
        }
    }

    /// Route one incoming message, containing any failure.
    ///
    /// This is the entry point the host's receive loop calls: dispatch
    /// failures are logged and the message is dropped. Nothing propagates.
    pub fn receive(&self, ctx: &ConnectorContext, kind: MessageKindId, payload: &str) {
        if let Err(e) = self.dispatch(ctx, kind, payload) {
            tracing::error!(
                application = ctx.application(),
                kind = %kind,
                error = %e,
                "dropping incoming connector message"
            );
        }
    }
}
