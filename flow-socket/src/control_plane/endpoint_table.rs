//! Base-path claim table enforcing one endpoint per path.

use std::collections::HashSet;
use tokio::sync::Mutex;

/// Storage owner for mounted base paths.
///
/// At most one endpoint may exist per base path at any time; `claim` is the
/// mount-time dedupe check and `release` runs during teardown.
pub struct EndpointTable {
    mounted: Mutex<HashSet<String>>,
}

impl EndpointTable {
    /// Creates an empty claim table.
    pub fn new() -> Self {
        Self {
            mounted: Mutex::new(HashSet::new()),
        }
    }

    /// Claims a base path. Returns `true` only when first claimed.
    pub async fn claim(&self, base_path: &str) -> bool {
        let mut mounted = self.mounted.lock().await;
        mounted.insert(base_path.to_string())
    }

    /// Releases a base path. Returns `true` only when it was claimed.
    pub async fn release(&self, base_path: &str) -> bool {
        let mut mounted = self.mounted.lock().await;
        mounted.remove(base_path)
    }
}

impl Default for EndpointTable {
    fn default() -> Self {
        Self::new()
    }
}
