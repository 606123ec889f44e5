//! Lifecycle layer.
//!
//! Owns the ordered, best-effort teardown that retires an endpoint and frees
//! its transport and routing resources.

mod teardown;

pub use teardown::{teardown, TeardownContext};
