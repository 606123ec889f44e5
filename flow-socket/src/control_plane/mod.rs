//! Control-plane layer.
//!
//! Owns the shared, order-sensitive registries touched during endpoint mount
//! and teardown: the HTTP route registry, the matcher that identifies which
//! of its entries belong to a base path, and the one-endpoint-per-path claim
//! table.

mod endpoint_table;
mod path_matcher;
mod route_registry;

pub use endpoint_table::EndpointTable;
pub use path_matcher::find_matching_entries;
pub use route_registry::{prune_base_path, EntryId, RouteEntry, RouteRegistry};
