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

//! Canonical structured field keys and value-format helpers.

pub const EVENT: &str = "event";
pub const COMPONENT: &str = "component";
pub const BASE_PATH: &str = "base_path";
pub const CHANNEL: &str = "channel";
pub const CLIENT_ID: &str = "client_id";
pub const TOPIC: &str = "topic";
pub const PRUNED: &str = "pruned";
pub const CLIENTS: &str = "clients";
pub const ERR: &str = "err";

pub const NONE: &str = "none";

/// Formats an optional topic tag for log fields.
pub fn format_topic(topic: Option<&str>) -> String {
    topic.unwrap_or(NONE).to_string()
}
