//! # Asset Import Feature
//!
//! The connector feature that announces asset imports to peer
//! applications and receives their announcements.
//!
//! Two message kinds, fixed and stable across all participating
//! applications:
//!
//! - [`IMPORT_NOTICE_KIND`] — the structured path: a schema-validated
//!   JSON envelope carrying path, display name, fresh notice id, asset
//!   kind, and the ownership flag.
//! - [`LEGACY_PATH_KIND`] — the compatibility path: the bare path string
//!   with no envelope, for older consumers. Send-only; this feature
//!   registers no receive handler for it.
//!
//! Validation is asymmetric: the sender validates the serialized envelope
//! before it reaches the bus, the receiver trusts the structure beyond
//! what the typed parse enforces.

use atelier_core::{ImportNotice, MessageKindId};
use atelier_schema::{NoticeValidator, SchemaValidationError};
use uuid::uuid;

use crate::context::ConnectorContext;
use crate::router::{Callback, DispatchError, Feature};
use crate::transport::{Transport, TransportError};

/// Message kind for the structured, schema-validated import notice.
pub const IMPORT_NOTICE_KIND: MessageKindId =
    MessageKindId(uuid!("91e3dfbc-80b8-4b1a-92d5-63ec09ac641a"));

/// Message kind for the legacy bare-path payload.
pub const LEGACY_PATH_KIND: MessageKindId =
    MessageKindId(uuid!("72538d04-276f-4254-a45b-d3654f705477"));

/// The asset-import feature.
///
/// Holds the compiled wire-contract validator; everything else is
/// stateless between calls. Each send is an independent, blocking call
/// into the transport, and each structured send carries a fresh notice
/// id — retried sends are never recognized as duplicates here.
pub struct AssetImport {
    validator: NoticeValidator,
}

impl AssetImport {
    /// Create the feature, compiling the embedded wire-contract schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaValidationError::SchemaCompile` if the embedded
    /// schema does not compile.
    pub fn new() -> Result<Self, SchemaValidationError> {
        Ok(Self {
            validator: NoticeValidator::new()?,
        })
    }

    /// Announce an asset import on the structured path.
    ///
    /// Builds a notice for `path` with defaults, validates its canonical
    /// text, and hands it to the transport under [`IMPORT_NOTICE_KIND`].
    /// A notice that fails validation is logged and dropped — the send is
    /// aborted without surfacing an error, and nothing is retried.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` only for delivery failure.
    pub fn send_import(
        &self,
        transport: &dyn Transport,
        ctx: &ConnectorContext,
        path: &str,
    ) -> Result<(), TransportError> {
        self.send_notice(transport, ctx, ImportNotice::new(path))
    }

    /// Announce a caller-prepared notice on the structured path.
    ///
    /// Same validation and failure semantics as [`send_import`]; use this
    /// when the caller sets a display name, asset kind, or the ownership
    /// flag before sending.
    ///
    /// [`send_import`]: AssetImport::send_import
    pub fn send_notice(
        &self,
        transport: &dyn Transport,
        ctx: &ConnectorContext,
        notice: ImportNotice,
    ) -> Result<(), TransportError> {
        let text = match notice.canonical_text() {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(
                    path = %notice.path,
                    error = %e,
                    "dropping import notice: canonicalization failed"
                );
                return Ok(());
            }
        };

        if let Err(e) = self.validator.validate_text(text.as_str()) {
            tracing::error!(
                path = %notice.path,
                error = %e,
                "dropping import notice: wire contract violation"
            );
            return Ok(());
        }

        tracing::debug!(
            application = ctx.application(),
            kind = %IMPORT_NOTICE_KIND,
            id = %notice.id,
            "sending import notice"
        );
        transport.write_message(ctx, IMPORT_NOTICE_KIND, text.as_str())
    }

    /// Announce an asset import on the legacy path.
    ///
    /// Hands the bare path string to the transport under
    /// [`LEGACY_PATH_KIND`]. No envelope, no validation — this exists
    /// purely for wire compatibility with consumers that expect a plain
    /// path.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` on delivery failure.
    pub fn send_legacy(
        &self,
        transport: &dyn Transport,
        ctx: &ConnectorContext,
        path: &str,
    ) -> Result<(), TransportError> {
        tracing::debug!(
            application = ctx.application(),
            kind = %LEGACY_PATH_KIND,
            "sending legacy import path"
        );
        transport.write_message(ctx, LEGACY_PATH_KIND, path)
    }
}

/// Receive handler for [`IMPORT_NOTICE_KIND`].
///
/// Parses the payload as an [`ImportNotice`] and logs it. Import behavior
/// beyond the announcement is delegated to host-side collaborators. A
/// payload that does not parse is contained as
/// [`DispatchError::MalformedPayload`]; the router logs and drops it.
fn recv_import(
    ctx: &ConnectorContext,
    kind: MessageKindId,
    payload: &str,
) -> Result<(), DispatchError> {
    let notice: ImportNotice =
        serde_json::from_str(payload).map_err(|e| DispatchError::MalformedPayload {
            kind,
            reason: e.to_string(),
        })?;

    tracing::info!(
        application = ctx.application(),
        path = %notice.path,
        id = %notice.id,
        asset_kind = %notice.kind,
        take_ownership = notice.take_ownership,
        "received import notice"
    );
    Ok(())
}

impl Feature for AssetImport {
    fn message_kinds(&self) -> Vec<MessageKindId> {
        vec![IMPORT_NOTICE_KIND, LEGACY_PATH_KIND]
    }

    fn callbacks(&self) -> Vec<(MessageKindId, Callback)> {
        vec![(IMPORT_NOTICE_KIND, Box::new(recv_import))]
    }
}
