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

//! Lifecycle/control notification emission on the control channel.

use crate::endpoint::Endpoint;
use crate::message::FlowMessage;
use crate::observability::{events, fields};
use crate::runtime::{FlowContext, OutputSlots};
use crate::transport::{ClientId, Namespace};
use tracing::{debug, warn};

const COMPONENT: &str = "control_emitter";

/// Emits a control message to one client or to every connected client.
///
/// When the message lacks a topic tag and the endpoint has a non-empty
/// default topic, the default is stamped in place before emission. The
/// (possibly stamped) message is always mirrored to the node's second output
/// slot with the first slot explicitly empty, connected clients or not.
///
/// Delivery is fire-and-forget: no acknowledgement is obtained and emission
/// failures are logged, never surfaced. Returns the message as emitted.
pub async fn send_control(
    mut message: FlowMessage,
    namespace: &dyn Namespace,
    endpoint: &Endpoint,
    flow: &dyn FlowContext,
    target: Option<&ClientId>,
) -> FlowMessage {
    if message.topic().is_none() {
        if let Some(default_topic) = endpoint.default_topic() {
            message.set_topic(default_topic);
        }
    }

    match target {
        Some(client_id) => {
            message.set_target_client(client_id);
            if let Err(err) = namespace
                .emit_to(client_id, endpoint.control_channel(), &message)
                .await
            {
                warn!(
                    event = events::CONTROL_SEND_FAILED,
                    component = COMPONENT,
                    base_path = endpoint.base_path(),
                    channel = endpoint.control_channel(),
                    client_id = client_id.as_str(),
                    err = ?err,
                    "targeted control send failed"
                );
            } else {
                debug!(
                    event = events::CONTROL_SEND_TARGETED,
                    component = COMPONENT,
                    base_path = endpoint.base_path(),
                    channel = endpoint.control_channel(),
                    client_id = client_id.as_str(),
                    topic = fields::format_topic(message.topic()).as_str(),
                    "sent targeted control message"
                );
            }
        }
        None => {
            if let Err(err) = namespace.emit(endpoint.control_channel(), &message).await {
                warn!(
                    event = events::CONTROL_SEND_FAILED,
                    component = COMPONENT,
                    base_path = endpoint.base_path(),
                    channel = endpoint.control_channel(),
                    err = ?err,
                    "broadcast control send failed"
                );
            } else {
                debug!(
                    event = events::CONTROL_SEND_BROADCAST,
                    component = COMPONENT,
                    base_path = endpoint.base_path(),
                    channel = endpoint.control_channel(),
                    topic = fields::format_topic(message.topic()).as_str(),
                    "broadcast control message"
                );
            }
        }
    }

    flow.send_output(OutputSlots::Pair(None, Some(message.clone())));

    message
}
