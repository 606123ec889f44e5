//! Structured-logging vocabulary shared across the crate.

pub mod events;
pub mod fields;
