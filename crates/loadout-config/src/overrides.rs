//! Project-level overrides loaded from `loadout.toml`.
//!
//! Overrides cover project facts only: which files to bundle, where
//! output goes, page metadata, and the dev server address. Fields that
//! are functions of the build mode (source maps, filename pattern,
//! plugin list shape) have no counterpart here.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Optional overrides merged into a mode preset.
///
/// Every field is optional; an absent field leaves the preset value in
/// place. Entry lists replace the default wholesale rather than
/// merging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigOverrides {
    /// Replacement entry map (bundle name to source files)
    #[serde(default)]
    pub entries: Option<IndexMap<String, Vec<PathBuf>>>,

    /// Output directory for generated bundles
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Directory copied into the output by production builds
    #[serde(default)]
    pub assets_dir: Option<PathBuf>,

    #[serde(default)]
    pub html: Option<HtmlOverrides>,

    #[serde(default)]
    pub dev_server: Option<DevServerOverrides>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlOverrides {
    #[serde(default)]
    pub template: Option<PathBuf>,

    #[serde(default)]
    pub filename: Option<String>,

    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevServerOverrides {
    #[serde(default)]
    pub host: Option<String>,

    #[serde(default)]
    pub port: Option<u16>,

    #[serde(default)]
    pub static_dir: Option<PathBuf>,
}
