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

//! Flow message data model, inbound classification, and property lookup.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reserved key whose presence marks a message as a control message.
pub const CONTROL_KEY: &str = "control";
/// Reserved key selecting a single client for targeted delivery.
pub const CLIENT_ID_KEY: &str = "_clientId";
/// Reserved key carrying the message topic tag.
pub const TOPIC_KEY: &str = "topic";
/// Payload key stripped when the endpoint disallows scripts.
pub const SCRIPT_KEY: &str = "script";
/// Payload key stripped when the endpoint disallows styles.
pub const STYLE_KEY: &str = "style";
/// Reserved key identifying the origin of a control message.
pub const FROM_KEY: &str = "from";

const CONTROL_SHUTDOWN: &str = "shutdown";
const FROM_SERVER: &str = "server";

/// An open key/value record carried between the flow runtime and clients.
///
/// Keys are unique and insertion order is irrelevant. Beyond the reserved
/// keys above, payload shape is caller-defined and not validated here.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FlowMessage {
    fields: Map<String, Value>,
}

impl FlowMessage {
    /// Creates an empty message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing key/value map as a message.
    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Wraps a JSON value as a message. Returns `None` for non-object values.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self { fields }),
            _ => None,
        }
    }

    /// The canonical shutdown notice broadcast to clients during teardown.
    pub fn shutdown_notice() -> Self {
        let mut message = Self::new();
        message.set(CONTROL_KEY, Value::String(CONTROL_SHUTDOWN.to_string()));
        message.set(FROM_KEY, Value::String(FROM_SERVER.to_string()));
        message
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.fields.insert(key.into(), value);
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.fields.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// True when the control marker key is present.
    pub fn is_control(&self) -> bool {
        self.fields.contains_key(CONTROL_KEY)
    }

    /// The targeted-delivery client id, when one is stamped on the message.
    pub fn target_client(&self) -> Option<&str> {
        self.fields.get(CLIENT_ID_KEY).and_then(Value::as_str)
    }

    pub fn set_target_client(&mut self, client_id: &str) {
        self.set(CLIENT_ID_KEY, Value::String(client_id.to_string()));
    }

    pub fn topic(&self) -> Option<&str> {
        self.fields.get(TOPIC_KEY).and_then(Value::as_str)
    }

    pub fn set_topic(&mut self, topic: &str) {
        self.set(TOPIC_KEY, Value::String(topic.to_string()));
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

/// An inbound message classified once at the flow boundary.
///
/// The control/data split is decided solely by presence of the reserved
/// marker key, so every later stage works with an explicit variant instead
/// of re-probing the map.
#[derive(Clone, Debug)]
pub enum InboundMessage {
    Control(FlowMessage),
    Data(FlowMessage),
}

impl InboundMessage {
    pub fn classify(message: FlowMessage) -> Self {
        if message.is_control() {
            InboundMessage::Control(message)
        } else {
            InboundMessage::Data(message)
        }
    }
}

/// Returns the first value found among ordered dotted-path candidates, or
/// the caller-supplied default when none resolve. Never errors.
pub fn first_property<'a>(
    root: &'a Value,
    candidates: &[&str],
    default: &'a Value,
) -> &'a Value {
    candidates
        .iter()
        .find_map(|path| lookup_path(root, path))
        .unwrap_or(default)
}

fn lookup_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in path.split('.') {
        current = current.get(segment)?;
    }
    Some(current)
}
