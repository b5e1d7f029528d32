use serde::{Deserialize, Serialize};

use crate::mode::BuildMode;

/// Output filename pattern with `[name]` and `[hash]` tokens.
///
/// Production patterns embed a content hash so browsers can cache
/// unchanged bundles across releases; development keeps a stable name
/// the dev server can serve at a predictable path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilenameTemplate {
    pattern: String,
}

impl FilenameTemplate {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    /// Stable name, no hash fragment
    pub fn stable() -> Self {
        Self::new("[name].js")
    }

    /// Content-hash-qualified name
    pub fn hashed() -> Self {
        Self::new("[name].[hash].js")
    }

    pub fn for_mode(mode: BuildMode) -> Self {
        match mode {
            BuildMode::Development => Self::stable(),
            BuildMode::Production => Self::hashed(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn has_hash(&self) -> bool {
        self.pattern.contains("[hash]")
    }

    /// Substitute the tokens for a concrete bundle.
    ///
    /// When no hash is supplied the hash segment is dropped together
    /// with its separating dot, so a hashed pattern still renders to a
    /// servable filename.
    pub fn render(&self, name: &str, hash: Option<&str>) -> String {
        let named = self.pattern.replace("[name]", name);
        match hash {
            Some(hash) => named.replace("[hash]", hash),
            None => named.replace(".[hash]", "").replace("[hash]", ""),
        }
    }
}

impl Default for FilenameTemplate {
    fn default() -> Self {
        Self::stable()
    }
}
