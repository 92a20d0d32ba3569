//! # atelier-bridge — Connector Dispatch Layer
//!
//! The integration surface between the asset-import core and the host's
//! connector runtime. This crate owns:
//!
//! - the [`Transport`] seam — the bus's synchronous `write_message`
//!   primitive, abstracted so tests run against a recording stub;
//! - [`ConnectorContext`] — the opaque per-connection handle constructed
//!   by the host's registration layer;
//! - the [`Feature`] trait and [`Router`] — explicit callback-table
//!   composition across features, rejecting duplicate message-kind
//!   registrations;
//! - [`AssetImport`] — the feature implementing the structured and legacy
//!   import announcement paths and the structured receive handler.
//!
//! ## Concurrency Model
//!
//! Everything here is synchronous and stateless between calls: no queues,
//! no locks, no I/O of its own. Ordering between concurrent sends is the
//! transport's business; this crate offers no ordering guarantee and no
//! deduplication.

pub mod context;
pub mod import;
pub mod router;
pub mod transport;

pub use context::ConnectorContext;
pub use import::{AssetImport, IMPORT_NOTICE_KIND, LEGACY_PATH_KIND};
pub use router::{Callback, DispatchError, Feature, Router, RouterError};
pub use transport::{Transport, TransportError};
