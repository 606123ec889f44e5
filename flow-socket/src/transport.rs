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

//! Real-time transport trait seams consumed by the routing core.

use crate::message::FlowMessage;
use async_trait::async_trait;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Identifier of one connected client socket within a namespace.
pub type ClientId = String;

/// Transport-level emission/disconnect failures.
///
/// `ClientGone` is expected under normal operation: the connected check and
/// the send are not atomic with respect to client-initiated disconnects, so
/// routers treat it as a no-op rather than an error.
#[derive(Debug)]
pub enum TransportError {
    ClientGone(ClientId),
    Emit(String),
    Disconnect(String),
}

impl Display for TransportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TransportError::ClientGone(client_id) => {
                write!(f, "client {client_id} is no longer connected")
            }
            TransportError::Emit(reason) => write!(f, "emit failed: {reason}"),
            TransportError::Disconnect(reason) => write!(f, "disconnect failed: {reason}"),
        }
    }
}

impl Error for TransportError {}

/// Transport-level grouping of connected client sockets for one base path.
#[async_trait]
pub trait Namespace: Send + Sync {
    /// Broadcasts `message` on `channel` to every connected client.
    async fn emit(&self, channel: &str, message: &FlowMessage) -> Result<(), TransportError>;

    /// Emits `message` on `channel` to a single client.
    async fn emit_to(
        &self,
        client_id: &ClientId,
        channel: &str,
        message: &FlowMessage,
    ) -> Result<(), TransportError>;

    /// Snapshot of currently connected client ids at the moment of the call.
    async fn connected_clients(&self) -> Vec<ClientId>;

    /// Forcibly disconnects one client.
    async fn disconnect(&self, client_id: &ClientId) -> Result<(), TransportError>;

    /// Removes every event listener registered on this namespace.
    async fn remove_all_listeners(&self);
}

/// The transport server owning namespaces keyed by base path.
#[async_trait]
pub trait SocketTransport: Send + Sync {
    /// Deregisters the namespace mounted at `base_path`. Returns `false`
    /// when no such namespace exists.
    async fn remove_namespace(&self, base_path: &str) -> bool;
}
