//! End-to-end exercise of the import announcement flow: feature → canonical
//! text → validation → transport, and back in through the router.

use std::sync::Mutex;

use atelier_bridge::{
    AssetImport, ConnectorContext, DispatchError, Router, Transport, TransportError,
    IMPORT_NOTICE_KIND, LEGACY_PATH_KIND,
};
use atelier_core::{ImportNotice, MessageKindId, DEFAULT_ASSET_KIND};
use atelier_schema::NoticeValidator;

/// Transport stub that records every write.
#[derive(Default)]
struct RecordingTransport {
    writes: Mutex<Vec<(MessageKindId, String)>>,
}

impl RecordingTransport {
    fn take(&self) -> Vec<(MessageKindId, String)> {
        std::mem::take(&mut *self.writes.lock().unwrap())
    }
}

impl Transport for RecordingTransport {
    fn write_message(
        &self,
        _ctx: &ConnectorContext,
        kind: MessageKindId,
        payload: &str,
    ) -> Result<(), TransportError> {
        self.writes.lock().unwrap().push((kind, payload.to_string()));
        Ok(())
    }
}

/// Transport stub whose connection is gone.
struct ClosedTransport;

impl Transport for ClosedTransport {
    fn write_message(
        &self,
        ctx: &ConnectorContext,
        _kind: MessageKindId,
        _payload: &str,
    ) -> Result<(), TransportError> {
        Err(TransportError::ConnectionClosed(ctx.application().to_string()))
    }
}

#[test]
fn send_import_writes_one_validated_message() {
    let transport = RecordingTransport::default();
    let ctx = ConnectorContext::new("painter");
    let feature = AssetImport::new().unwrap();

    feature.send_import(&transport, &ctx, "/tmp/a.sbsar").unwrap();

    let writes = transport.take();
    assert_eq!(writes.len(), 1, "expected exactly one write_message call");
    let (kind, payload) = &writes[0];
    assert_eq!(*kind, IMPORT_NOTICE_KIND);

    // The transmitted payload re-validates against the wire contract.
    let validator = NoticeValidator::new().unwrap();
    validator.validate_text(payload).unwrap();

    let notice: ImportNotice = serde_json::from_str(payload).unwrap();
    assert_eq!(notice.path, "/tmp/a.sbsar");
    assert_eq!(notice.name, "");
    assert_eq!(notice.kind, DEFAULT_ASSET_KIND);
    assert!(!notice.take_ownership);
    // The id on the wire is a well-formed RFC 4122 identifier.
    assert_eq!(notice.id.as_uuid().get_version_num(), 4);
}

#[test]
fn repeated_sends_carry_fresh_ids() {
    let transport = RecordingTransport::default();
    let ctx = ConnectorContext::new("painter");
    let feature = AssetImport::new().unwrap();

    feature.send_import(&transport, &ctx, "/tmp/a.sbsar").unwrap();
    feature.send_import(&transport, &ctx, "/tmp/a.sbsar").unwrap();

    let writes = transport.take();
    assert_eq!(writes.len(), 2);
    let first: ImportNotice = serde_json::from_str(&writes[0].1).unwrap();
    let second: ImportNotice = serde_json::from_str(&writes[1].1).unwrap();
    assert_eq!(first.path, second.path);
    assert_ne!(first.id, second.id, "uniqueness is per call, not per path");
}

#[test]
fn send_legacy_writes_bare_path() {
    let transport = RecordingTransport::default();
    let ctx = ConnectorContext::new("painter");
    let feature = AssetImport::new().unwrap();

    feature.send_legacy(&transport, &ctx, "/tmp/a.sbsar").unwrap();

    let writes = transport.take();
    assert_eq!(writes.len(), 1);
    let (kind, payload) = &writes[0];
    assert_eq!(*kind, LEGACY_PATH_KIND);
    assert_eq!(payload, "/tmp/a.sbsar", "legacy payload is the literal path, no envelope");
}

#[test]
fn send_notice_preserves_caller_fields() {
    let transport = RecordingTransport::default();
    let ctx = ConnectorContext::new("painter");
    let feature = AssetImport::new().unwrap();

    let mut notice = ImportNotice::with_kind("/srv/assets/cloth.sbs", "sbs");
    notice.name = "Cloth".to_string();
    notice.take_ownership = true;
    let sent_id = notice.id;

    feature.send_notice(&transport, &ctx, notice).unwrap();

    let writes = transport.take();
    assert_eq!(writes.len(), 1);
    let received: ImportNotice = serde_json::from_str(&writes[0].1).unwrap();
    assert_eq!(received.name, "Cloth");
    assert_eq!(received.kind, "sbs");
    assert!(received.take_ownership);
    assert_eq!(received.id, sent_id);
}

#[test]
fn transport_failure_surfaces_to_caller() {
    let ctx = ConnectorContext::new("painter");
    let feature = AssetImport::new().unwrap();

    let err = feature
        .send_import(&ClosedTransport, &ctx, "/tmp/a.sbsar")
        .unwrap_err();
    assert!(matches!(err, TransportError::ConnectionClosed(_)));
}

#[test]
fn sent_payload_routes_back_through_the_router() {
    let transport = RecordingTransport::default();
    let ctx = ConnectorContext::new("painter");
    let feature = AssetImport::new().unwrap();

    feature.send_import(&transport, &ctx, "/tmp/a.sbsar").unwrap();
    let writes = transport.take();

    let router = Router::compose(&[&feature]).unwrap();
    router.dispatch(&ctx, writes[0].0, &writes[0].1).unwrap();
}

#[test]
fn router_advertises_both_kinds_but_handles_structured_only() {
    let feature = AssetImport::new().unwrap();
    let router = Router::compose(&[&feature]).unwrap();

    assert_eq!(router.message_kinds(), &[IMPORT_NOTICE_KIND, LEGACY_PATH_KIND]);
    assert!(router.has_handler(IMPORT_NOTICE_KIND));
    assert!(!router.has_handler(LEGACY_PATH_KIND), "legacy path is send-only");
}

#[test]
fn malformed_inbound_payload_is_contained() {
    let feature = AssetImport::new().unwrap();
    let router = Router::compose(&[&feature]).unwrap();
    let ctx = ConnectorContext::new("painter");

    let err = router
        .dispatch(&ctx, IMPORT_NOTICE_KIND, "{\"path\": 42}")
        .unwrap_err();
    assert!(matches!(err, DispatchError::MalformedPayload { .. }));

    // The containment entry point neither panics nor propagates.
    router.receive(&ctx, IMPORT_NOTICE_KIND, "{\"path\": 42}");
}
