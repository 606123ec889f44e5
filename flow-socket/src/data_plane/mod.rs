//! Data-plane layer.
//!
//! Owns per-message policy: inbound admission, sanitization, and delivery on
//! the data channel, plus lifecycle/control notification on the control
//! channel. This layer translates endpoint configuration into concrete
//! emissions toward the transport and the flow runtime.

mod channel_router;
mod control_emitter;

pub use channel_router::route_inbound;
pub use control_emitter::send_control;
