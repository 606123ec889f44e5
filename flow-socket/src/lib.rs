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

//! # flow-socket
//!
//! `flow-socket` implements the routing and lifecycle-teardown core of a
//! dynamic bidirectional endpoint bridging a flow-execution runtime to a set
//! of connected real-time clients. Two logical channels — a data channel for
//! application payloads and a control channel for lifecycle signals — are
//! multiplexed over one addressable namespace, with broadcast and targeted
//! per-client delivery.
//!
//! The transport server, the HTTP routing framework, and the flow runtime are
//! external collaborators consumed through the [`Namespace`],
//! [`SocketTransport`], and [`FlowContext`] trait seams; this crate owns the
//! policy between them.
//!
//! ## Routing inbound messages
//!
//! ```
//! use flow_socket::{route_inbound, Endpoint, FlowContext, FlowMessage,
//!                   Namespace, NodeStatus, OutputSlots, TransportError};
//! use async_trait::async_trait;
//! use serde_json::json;
//!
//! # struct NullNamespace;
//! # #[async_trait]
//! # impl Namespace for NullNamespace {
//! #     async fn emit(&self, _channel: &str, _message: &FlowMessage) -> Result<(), TransportError> { Ok(()) }
//! #     async fn emit_to(&self, _client_id: &String, _channel: &str, _message: &FlowMessage) -> Result<(), TransportError> { Ok(()) }
//! #     async fn connected_clients(&self) -> Vec<String> { Vec::new() }
//! #     async fn disconnect(&self, _client_id: &String) -> Result<(), TransportError> { Ok(()) }
//! #     async fn remove_all_listeners(&self) {}
//! # }
//! # struct NullFlow;
//! # impl FlowContext for NullFlow {
//! #     fn report_status(&self, _status: NodeStatus) {}
//! #     fn send_output(&self, _output: OutputSlots) {}
//! # }
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let endpoint = Endpoint::new("/dashboard", "data", "control")
//!     .unwrap()
//!     .with_allow_scripts(false);
//!
//! let mut message = FlowMessage::new();
//! message.set("value", json!(1));
//!
//! let routed = route_inbound(message, &endpoint, &NullNamespace, &NullFlow).await;
//! assert!(routed.is_some());
//! assert_eq!(endpoint.received_count(), 1);
//! # });
//! ```
//!
//! ## Internal architecture map
//!
//! - API surface: [`Endpoint`], [`FlowMessage`], and the trait seams
//! - Control plane: ordered route registry, path matching, base-path claims
//! - Data plane: inbound admission/sanitization and control emission
//! - Lifecycle: ordered best-effort teardown
//! - Runtime: status-reporting and output-emission boundary
//!
//! ## Observability model
//!
//! The crate uses `tracing` for logs/events. Library code emits events and
//! does not initialize a global subscriber; embedders and tests own one-time
//! subscriber initialization at process boundaries.

mod endpoint;
pub use endpoint::{Endpoint, EndpointConfigError};

mod message;
pub use message::{
    first_property, FlowMessage, InboundMessage, CLIENT_ID_KEY, CONTROL_KEY, FROM_KEY,
    SCRIPT_KEY, STYLE_KEY, TOPIC_KEY,
};

mod transport;
pub use transport::{ClientId, Namespace, SocketTransport, TransportError};

mod control_plane;
pub use control_plane::{
    find_matching_entries, prune_base_path, EndpointTable, EntryId, RouteEntry, RouteRegistry,
};

mod data_plane;
pub use data_plane::{route_inbound, send_control};

mod lifecycle;
pub use lifecycle::{teardown, TeardownContext};

mod runtime;
pub use runtime::{FlowContext, NodeStatus, OutputSlots, StatusFill, StatusShape};

#[doc(hidden)]
pub mod observability;
