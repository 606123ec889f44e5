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

//! Ordered best-effort endpoint teardown.

use crate::control_plane::{prune_base_path, EndpointTable, RouteRegistry};
use crate::data_plane::send_control;
use crate::endpoint::Endpoint;
use crate::message::FlowMessage;
use crate::observability::events;
use crate::runtime::{FlowContext, NodeStatus};
use crate::transport::{Namespace, SocketTransport};
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

const COMPONENT: &str = "teardown";

/// The domain owners one teardown operates on.
///
/// Registries are injected explicitly rather than reached through ambient
/// state, so teardown is deterministic under test without a real transport
/// or router instance.
pub struct TeardownContext<'a> {
    pub endpoint: &'a Endpoint,
    pub namespace: &'a dyn Namespace,
    pub transport: &'a dyn SocketTransport,
    pub routes: &'a mut RouteRegistry,
    pub endpoints: &'a EndpointTable,
    pub flow: &'a dyn FlowContext,
}

/// Retires an endpoint: notify clients, disconnect them, clear transport
/// state, prune the route registry, then signal completion.
///
/// Every step is attempted even when an earlier one failed. The shutdown
/// notice is broadcast before any disconnection so clients receive it while
/// still connected. The completion signal, when supplied, is sent exactly
/// once, last; its absence is not an error.
pub async fn teardown(ctx: TeardownContext<'_>, done: Option<oneshot::Sender<()>>) {
    let base_path = ctx.endpoint.base_path();
    info!(
        event = events::TEARDOWN_START,
        component = COMPONENT,
        base_path,
        "tearing down endpoint"
    );

    ctx.flow.report_status(NodeStatus::closed());

    send_control(
        FlowMessage::shutdown_notice(),
        ctx.namespace,
        ctx.endpoint,
        ctx.flow,
        None,
    )
    .await;

    // Snapshot, then disconnect. Clients arriving after the snapshot belong
    // to a namespace that is about to be deregistered anyway.
    let clients = ctx.namespace.connected_clients().await;
    for client_id in &clients {
        if let Err(err) = ctx.namespace.disconnect(client_id).await {
            warn!(
                event = events::TEARDOWN_DISCONNECT_FAILED,
                component = COMPONENT,
                base_path,
                client_id = client_id.as_str(),
                err = ?err,
                "failed to disconnect client"
            );
        }
    }

    ctx.namespace.remove_all_listeners().await;

    if !ctx.transport.remove_namespace(base_path).await {
        warn!(
            event = events::TEARDOWN_NAMESPACE_MISSING,
            component = COMPONENT,
            base_path,
            "transport had no namespace registered for this base path"
        );
    }

    if !ctx.endpoints.release(base_path).await {
        debug!(
            event = events::TEARDOWN_CLAIM_MISSING,
            component = COMPONENT,
            base_path,
            "base path was not claimed"
        );
    }

    let pruned = prune_base_path(ctx.routes, base_path);
    debug!(
        event = events::TEARDOWN_ROUTES_PRUNED,
        component = COMPONENT,
        base_path,
        pruned,
        "pruned route registry entries"
    );

    info!(
        event = events::TEARDOWN_COMPLETE,
        component = COMPONENT,
        base_path,
        clients = clients.len(),
        pruned,
        "endpoint teardown complete"
    );

    if let Some(done) = done {
        // The receiver may already be gone; completion is one-shot and
        // best-effort like everything above it.
        let _ = done.send(());
    }
}
