//! Canonical structured event names used across `flow-socket`.

// Channel-router events.
pub const INBOUND_CONTROL_DROP: &str = "inbound_control_drop";
pub const INBOUND_KEY_STRIPPED: &str = "inbound_key_stripped";
pub const DATA_SEND_BROADCAST: &str = "data_send_broadcast";
pub const DATA_SEND_TARGETED: &str = "data_send_targeted";
pub const DATA_SEND_CLIENT_GONE: &str = "data_send_client_gone";
pub const DATA_SEND_FAILED: &str = "data_send_failed";

// Control-emitter events.
pub const CONTROL_SEND_BROADCAST: &str = "control_send_broadcast";
pub const CONTROL_SEND_TARGETED: &str = "control_send_targeted";
pub const CONTROL_SEND_FAILED: &str = "control_send_failed";

// Teardown lifecycle events.
pub const TEARDOWN_START: &str = "teardown_start";
pub const TEARDOWN_DISCONNECT_FAILED: &str = "teardown_disconnect_failed";
pub const TEARDOWN_NAMESPACE_MISSING: &str = "teardown_namespace_missing";
pub const TEARDOWN_CLAIM_MISSING: &str = "teardown_claim_missing";
pub const TEARDOWN_ROUTES_PRUNED: &str = "teardown_routes_pruned";
pub const TEARDOWN_COMPLETE: &str = "teardown_complete";
