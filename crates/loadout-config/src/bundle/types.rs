use serde::{Deserialize, Serialize};

use crate::mode::BuildMode;

/// Source map generation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceMapStrategy {
    /// Inline maps, regenerated quickly on every rebuild
    Inline,
    /// External `.map` files, accurate for released artifacts
    #[default]
    External,
}

impl SourceMapStrategy {
    /// Development trades fidelity for rebuild speed; production pays
    /// for accurate standalone map files.
    pub fn for_mode(mode: BuildMode) -> Self {
        match mode {
            BuildMode::Development => SourceMapStrategy::Inline,
            BuildMode::Production => SourceMapStrategy::External,
        }
    }
}

/// Which chunks a cache group may pull modules from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkScope {
    #[default]
    All,
    Async,
    Initial,
}

/// Import resolution options forwarded to the external bundler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveOptions {
    /// Follow symlinks when resolving modules. Fable package layouts
    /// depend on the literal on-disk paths, so this stays off.
    #[serde(default)]
    pub symlinks: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self { symlinks: false }
    }
}
