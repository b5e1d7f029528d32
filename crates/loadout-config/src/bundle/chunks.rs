use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::bundle::types::ChunkScope;

/// Code-splitting configuration forwarded to the external bundler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitChunksOptions {
    #[serde(default)]
    pub cache_groups: IndexMap<String, CacheGroup>,
}

/// A named group of modules split into their own output chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheGroup {
    /// Module-path fragment selecting members of the group
    pub test: String,

    /// Name of the emitted chunk
    pub name: String,

    #[serde(default)]
    pub chunks: ChunkScope,
}

impl Default for SplitChunksOptions {
    fn default() -> Self {
        // Third-party dependencies change less often than app code, so
        // they go into a separate chunk the browser can keep cached.
        let mut cache_groups = IndexMap::new();
        cache_groups.insert(
            "commons".to_string(),
            CacheGroup {
                test: "node_modules".to_string(),
                name: "vendors".to_string(),
                chunks: ChunkScope::All,
            },
        );
        Self { cache_groups }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vendors_group_is_preconfigured() {
        let split = SplitChunksOptions::default();
        let commons = split.cache_groups.get("commons").expect("commons group");
        assert_eq!(commons.test, "node_modules");
        assert_eq!(commons.name, "vendors");
        assert_eq!(commons.chunks, ChunkScope::All);
    }
}
