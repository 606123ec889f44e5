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

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};

/// Construction failures for an [`Endpoint`].
#[derive(Debug, Eq, PartialEq)]
pub enum EndpointConfigError {
    EmptyBasePath,
    SameChannelNames,
}

impl Display for EndpointConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EndpointConfigError::EmptyBasePath => write!(f, "base path must not be empty"),
            EndpointConfigError::SameChannelNames => {
                write!(f, "data and control channel names must differ")
            }
        }
    }
}

impl Error for EndpointConfigError {}

/// One mounted, addressable namespace bridging flow messages and real-time
/// clients.
///
/// The base path and channel names are immutable for the endpoint's lifetime.
/// The received-message counter is mutated only by the channel router, once
/// per inbound message, dropped or not.
///
/// # Examples
///
/// ```
/// use flow_socket::Endpoint;
///
/// let endpoint = Endpoint::new("/dashboard", "data", "control")
///     .unwrap()
///     .with_allow_scripts(false)
///     .with_forward_inbound(true)
///     .with_default_topic("dashboard");
///
/// assert_eq!(endpoint.base_path(), "/dashboard");
/// assert_eq!(endpoint.received_count(), 0);
/// ```
#[derive(Debug)]
pub struct Endpoint {
    base_path: String,
    data_channel: String,
    control_channel: String,
    allow_scripts: bool,
    allow_styles: bool,
    forward_inbound: bool,
    default_topic: Option<String>,
    received: AtomicU64,
}

impl Endpoint {
    /// Creates an endpoint for `base_path` with distinct channel names.
    pub fn new(
        base_path: &str,
        data_channel: &str,
        control_channel: &str,
    ) -> Result<Self, EndpointConfigError> {
        if base_path.is_empty() {
            return Err(EndpointConfigError::EmptyBasePath);
        }
        if data_channel == control_channel {
            return Err(EndpointConfigError::SameChannelNames);
        }

        Ok(Self {
            base_path: base_path.to_string(),
            data_channel: data_channel.to_string(),
            control_channel: control_channel.to_string(),
            allow_scripts: true,
            allow_styles: true,
            forward_inbound: false,
            default_topic: None,
            received: AtomicU64::new(0),
        })
    }

    pub fn with_allow_scripts(mut self, allow: bool) -> Self {
        self.allow_scripts = allow;
        self
    }

    pub fn with_allow_styles(mut self, allow: bool) -> Self {
        self.allow_styles = allow;
        self
    }

    pub fn with_forward_inbound(mut self, forward: bool) -> Self {
        self.forward_inbound = forward;
        self
    }

    /// Sets the default topic stamped onto topic-less control messages.
    /// An empty topic clears the default.
    pub fn with_default_topic(mut self, topic: &str) -> Self {
        self.default_topic = if topic.is_empty() {
            None
        } else {
            Some(topic.to_string())
        };
        self
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn data_channel(&self) -> &str {
        &self.data_channel
    }

    pub fn control_channel(&self) -> &str {
        &self.control_channel
    }

    pub fn allow_scripts(&self) -> bool {
        self.allow_scripts
    }

    pub fn allow_styles(&self) -> bool {
        self.allow_styles
    }

    pub fn forward_inbound(&self) -> bool {
        self.forward_inbound
    }

    pub fn default_topic(&self) -> Option<&str> {
        self.default_topic.as_deref()
    }

    /// Monotonic count of inbound messages handled by the channel router.
    pub fn received_count(&self) -> u64 {
        self.received.load(Ordering::Relaxed)
    }

    pub(crate) fn record_received(&self) -> u64 {
        self.received.fetch_add(1, Ordering::Relaxed) + 1
    }
}
