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

//! Output-emission and status-reporting seam toward the flow runtime.

use crate::message::FlowMessage;
use crate::runtime::status::NodeStatus;

/// Values emitted downstream by a node. A slot may be explicitly empty;
/// `Pair(None, Some(_))` is the control-mirror shape where only the second
/// output carries a message.
#[derive(Clone, Debug, PartialEq)]
pub enum OutputSlots {
    Single(FlowMessage),
    Pair(Option<FlowMessage>, Option<FlowMessage>),
}

/// The slice of the flow runtime the routing core talks back to.
///
/// Both calls are fire-and-forget from the core's point of view; the runtime
/// queues them on its own execution thread.
pub trait FlowContext: Send + Sync {
    fn report_status(&self, status: NodeStatus);

    fn send_output(&self, output: OutputSlots);
}
