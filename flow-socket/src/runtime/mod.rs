//! Flow-runtime integration layer.
//!
//! Isolates the host runtime's status-reporting and output-emission surfaces
//! behind trait seams so routing and teardown stay testable without a real
//! runtime instance.

mod flow_context;
mod status;

pub use flow_context::{FlowContext, OutputSlots};
pub use status::{NodeStatus, StatusFill, StatusShape};
