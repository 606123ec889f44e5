/********************************************************************************
 * Copyright (c) 2026 Contributors to the Eclipse Foundation
 *
 * See the NOTICE file(s) distributed with this work for additional
 * information regarding copyright ownership.
 *
 * This program and the accompanying materials are made available under the
 * terms of the Apache License Version 2.0 which is available at
 * https://www.apache.org/licenses/LICENSE-2.0
 *
 * SPDX-License-Identifier: Apache-2.0
 ********************************************************************************/

//! Inbound-message admission, sanitization, and data-channel delivery.

use crate::endpoint::Endpoint;
use crate::message::{FlowMessage, InboundMessage, SCRIPT_KEY, STYLE_KEY};
use crate::observability::events;
use crate::runtime::{FlowContext, OutputSlots};
use crate::transport::{Namespace, TransportError};
use tracing::{debug, warn};

const COMPONENT: &str = "channel_router";

/// Routes one inbound flow message onto the endpoint's data channel.
///
/// The endpoint's received counter is incremented unconditionally, dropped
/// messages included. Inbound control messages are dropped to prevent
/// control-signal echo loops: `None` is returned and nothing is emitted.
///
/// Data messages are sanitized per the endpoint's capability flags, then
/// delivered targeted (when a client id is stamped on the message) or
/// broadcast. When `forward_inbound` is set, the possibly-sanitized message
/// is also re-emitted as the node's own first output. The returned message
/// reflects any sanitization applied.
///
/// Payload shape is not validated; any serializable record is forwarded
/// as-is.
pub async fn route_inbound(
    message: FlowMessage,
    endpoint: &Endpoint,
    namespace: &dyn Namespace,
    flow: &dyn FlowContext,
) -> Option<FlowMessage> {
    endpoint.record_received();

    let mut message = match InboundMessage::classify(message) {
        InboundMessage::Control(_) => {
            debug!(
                event = events::INBOUND_CONTROL_DROP,
                component = COMPONENT,
                base_path = endpoint.base_path(),
                "dropping inbound control message to prevent echo loop"
            );
            return None;
        }
        InboundMessage::Data(message) => message,
    };

    if !endpoint.allow_scripts() && message.remove(SCRIPT_KEY).is_some() {
        debug!(
            event = events::INBOUND_KEY_STRIPPED,
            component = COMPONENT,
            base_path = endpoint.base_path(),
            key = SCRIPT_KEY,
            "stripped disallowed payload key"
        );
    }
    if !endpoint.allow_styles() && message.remove(STYLE_KEY).is_some() {
        debug!(
            event = events::INBOUND_KEY_STRIPPED,
            component = COMPONENT,
            base_path = endpoint.base_path(),
            key = STYLE_KEY,
            "stripped disallowed payload key"
        );
    }

    let target = message.target_client().map(str::to_string);
    match target {
        Some(client_id) => {
            match namespace
                .emit_to(&client_id, endpoint.data_channel(), &message)
                .await
            {
                Ok(()) => {
                    debug!(
                        event = events::DATA_SEND_TARGETED,
                        component = COMPONENT,
                        base_path = endpoint.base_path(),
                        channel = endpoint.data_channel(),
                        client_id = client_id.as_str(),
                        "sent targeted data message"
                    );
                }
                // The connected check and the send are not atomic; a client
                // leaving in between is a no-op, not an error.
                Err(TransportError::ClientGone(_)) => {
                    debug!(
                        event = events::DATA_SEND_CLIENT_GONE,
                        component = COMPONENT,
                        base_path = endpoint.base_path(),
                        channel = endpoint.data_channel(),
                        client_id = client_id.as_str(),
                        "target client no longer connected"
                    );
                }
                Err(err) => {
                    warn!(
                        event = events::DATA_SEND_FAILED,
                        component = COMPONENT,
                        base_path = endpoint.base_path(),
                        channel = endpoint.data_channel(),
                        client_id = client_id.as_str(),
                        err = ?err,
                        "targeted data send failed"
                    );
                }
            }
        }
        None => {
            if let Err(err) = namespace.emit(endpoint.data_channel(), &message).await {
                warn!(
                    event = events::DATA_SEND_FAILED,
                    component = COMPONENT,
                    base_path = endpoint.base_path(),
                    channel = endpoint.data_channel(),
                    err = ?err,
                    "broadcast data send failed"
                );
            } else {
                debug!(
                    event = events::DATA_SEND_BROADCAST,
                    component = COMPONENT,
                    base_path = endpoint.base_path(),
                    channel = endpoint.data_channel(),
                    "broadcast data message"
                );
            }
        }
    }

    if endpoint.forward_inbound() {
        flow.send_output(OutputSlots::Single(message.clone()));
    }

    Some(message)
}

#[cfg(test)]
mod tests {
    use super::route_inbound;
    use crate::endpoint::Endpoint;
    use crate::message::{FlowMessage, CLIENT_ID_KEY, CONTROL_KEY, SCRIPT_KEY, STYLE_KEY};
    use crate::runtime::{FlowContext, NodeStatus, OutputSlots};
    use crate::transport::{ClientId, Namespace, TransportError};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingNamespace {
        broadcasts: Mutex<Vec<(String, FlowMessage)>>,
        targeted: Mutex<Vec<(ClientId, String, FlowMessage)>>,
        gone_clients: Vec<ClientId>,
    }

    #[async_trait]
    impl Namespace for RecordingNamespace {
        async fn emit(&self, channel: &str, message: &FlowMessage) -> Result<(), TransportError> {
            self.broadcasts
                .lock()
                .unwrap()
                .push((channel.to_string(), message.clone()));
            Ok(())
        }

        async fn emit_to(
            &self,
            client_id: &ClientId,
            channel: &str,
            message: &FlowMessage,
        ) -> Result<(), TransportError> {
            if self.gone_clients.contains(client_id) {
                return Err(TransportError::ClientGone(client_id.clone()));
            }
            self.targeted.lock().unwrap().push((
                client_id.clone(),
                channel.to_string(),
                message.clone(),
            ));
            Ok(())
        }

        async fn connected_clients(&self) -> Vec<ClientId> {
            Vec::new()
        }

        async fn disconnect(&self, _client_id: &ClientId) -> Result<(), TransportError> {
            Ok(())
        }

        async fn remove_all_listeners(&self) {}
    }

    #[derive(Default)]
    struct RecordingFlow {
        outputs: Mutex<Vec<OutputSlots>>,
    }

    impl FlowContext for RecordingFlow {
        fn report_status(&self, _status: NodeStatus) {}

        fn send_output(&self, output: OutputSlots) {
            self.outputs.lock().unwrap().push(output);
        }
    }

    fn data_message() -> FlowMessage {
        let mut message = FlowMessage::new();
        message.set("value", json!(1));
        message
    }

    #[tokio::test]
    async fn inbound_control_is_dropped_with_counter_increment() {
        let endpoint = Endpoint::new("/app", "data", "control")
            .unwrap()
            .with_forward_inbound(true);
        let namespace = RecordingNamespace::default();
        let flow = RecordingFlow::default();

        let mut message = FlowMessage::new();
        message.set(CONTROL_KEY, json!("connected"));

        let result = route_inbound(message, &endpoint, &namespace, &flow).await;

        assert!(result.is_none());
        assert_eq!(endpoint.received_count(), 1);
        assert!(namespace.broadcasts.lock().unwrap().is_empty());
        assert!(namespace.targeted.lock().unwrap().is_empty());
        assert!(flow.outputs.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn script_and_style_are_stripped_when_disallowed() {
        let endpoint = Endpoint::new("/app", "data", "control")
            .unwrap()
            .with_allow_scripts(false)
            .with_allow_styles(false);
        let namespace = RecordingNamespace::default();
        let flow = RecordingFlow::default();

        let mut message = data_message();
        message.set(SCRIPT_KEY, json!("alert(1)"));
        message.set(STYLE_KEY, json!("body{}"));

        let returned = route_inbound(message, &endpoint, &namespace, &flow)
            .await
            .unwrap();

        assert!(!returned.contains(SCRIPT_KEY));
        assert!(!returned.contains(STYLE_KEY));
        let broadcasts = namespace.broadcasts.lock().unwrap();
        assert_eq!(broadcasts.len(), 1);
        assert!(!broadcasts[0].1.contains(SCRIPT_KEY));
        assert!(!broadcasts[0].1.contains(STYLE_KEY));
    }

    #[tokio::test]
    async fn keys_survive_when_capabilities_allow_them() {
        let endpoint = Endpoint::new("/app", "data", "control").unwrap();
        let namespace = RecordingNamespace::default();
        let flow = RecordingFlow::default();

        let mut message = data_message();
        message.set(SCRIPT_KEY, json!("alert(1)"));

        let returned = route_inbound(message, &endpoint, &namespace, &flow)
            .await
            .unwrap();

        assert!(returned.contains(SCRIPT_KEY));
    }

    #[tokio::test]
    async fn targeted_message_never_broadcasts() {
        let endpoint = Endpoint::new("/app", "data", "control").unwrap();
        let namespace = RecordingNamespace::default();
        let flow = RecordingFlow::default();

        let mut message = data_message();
        message.set(CLIENT_ID_KEY, json!("client-1"));

        route_inbound(message, &endpoint, &namespace, &flow).await;

        assert!(namespace.broadcasts.lock().unwrap().is_empty());
        let targeted = namespace.targeted.lock().unwrap();
        assert_eq!(targeted.len(), 1);
        assert_eq!(targeted[0].0, "client-1");
        assert_eq!(targeted[0].1, "data");
    }

    #[tokio::test]
    async fn delivery_to_gone_client_is_a_silent_no_op() {
        let endpoint = Endpoint::new("/app", "data", "control").unwrap();
        let namespace = RecordingNamespace {
            gone_clients: vec!["client-1".to_string()],
            ..Default::default()
        };
        let flow = RecordingFlow::default();

        let mut message = data_message();
        message.set(CLIENT_ID_KEY, json!("client-1"));

        let result = route_inbound(message, &endpoint, &namespace, &flow).await;

        assert!(result.is_some());
        assert!(namespace.targeted.lock().unwrap().is_empty());
        assert!(namespace.broadcasts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn forward_inbound_re_emits_the_sanitized_message() {
        let endpoint = Endpoint::new("/app", "data", "control")
            .unwrap()
            .with_allow_scripts(false)
            .with_forward_inbound(true);
        let namespace = RecordingNamespace::default();
        let flow = RecordingFlow::default();

        let mut message = data_message();
        message.set(SCRIPT_KEY, json!("x"));
        message.set_topic("t");

        route_inbound(message, &endpoint, &namespace, &flow).await;

        let outputs = flow.outputs.lock().unwrap();
        assert_eq!(outputs.len(), 1);
        match &outputs[0] {
            OutputSlots::Single(forwarded) => {
                assert!(!forwarded.contains(SCRIPT_KEY));
                assert_eq!(forwarded.topic(), Some("t"));
            }
            other => panic!("expected single-slot output, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn no_flow_output_without_forward_flag() {
        let endpoint = Endpoint::new("/app", "data", "control").unwrap();
        let namespace = RecordingNamespace::default();
        let flow = RecordingFlow::default();

        route_inbound(data_message(), &endpoint, &namespace, &flow).await;

        assert!(flow.outputs.lock().unwrap().is_empty());
        assert_eq!(namespace.broadcasts.lock().unwrap().len(), 1);
    }
}
