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

//! Advisory node status reported to the runtime UI.

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StatusFill {
    Red,
    Green,
    Yellow,
    Blue,
    Grey,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StatusShape {
    Ring,
    Dot,
}

/// A `{fill, shape, text}` status triple. Non-blocking and advisory only.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NodeStatus {
    pub fill: StatusFill,
    pub shape: StatusShape,
    pub text: String,
}

impl NodeStatus {
    pub fn new(fill: StatusFill, shape: StatusShape, text: impl Into<String>) -> Self {
        Self {
            fill,
            shape,
            text: text.into(),
        }
    }

    /// Plain-string status; carries the runtime's default fill and shape.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(StatusFill::Grey, StatusShape::Dot, text)
    }

    /// Terminal status reported when an endpoint is torn down.
    pub fn closed() -> Self {
        Self::new(StatusFill::Red, StatusShape::Ring, "closed")
    }
}
