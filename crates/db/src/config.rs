//! Database configuration
//!
//! Connection type is inferred from which fields are set.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Database configuration
///
/// Connection type is inferred:
/// - If `url` is set → that endpoint (e.g. `mem://` or `rocksdb://...`)
/// - If `path` is set (no `url`) → embedded RocksDB at that path
/// - If neither → use default embedded path
/// - If both → error (ambiguous)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path for embedded RocksDB database
    pub path: Option<PathBuf>,

    /// Explicit connection URL
    pub url: Option<String>,

    /// Namespace (defaults to "tickler")
    pub namespace: Option<String>,
}

impl DatabaseConfig {
    /// Create config for a throwaway in-memory database
    pub fn in_memory() -> Self {
        Self {
            url: Some("mem://".to_string()),
            ..Default::default()
        }
    }

    /// Get the namespace (defaults to "tickler")
    pub fn namespace(&self) -> &str {
        self.namespace.as_deref().unwrap_or("tickler")
    }
}
