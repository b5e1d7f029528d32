//! Core build configuration types shared across loadout crates.

mod assets;
mod chunks;
mod filename;
mod helpers;
mod html;
mod loader;
mod plugin;
mod types;

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use assets::CopyAssetsOptions;
pub use chunks::{CacheGroup, SplitChunksOptions};
pub use filename::FilenameTemplate;
pub use html::HtmlOptions;
pub use loader::{default_loader_rules, rule_for, FilePattern, LoaderRule};
pub use plugin::PluginDescriptor;
pub use types::{ChunkScope, ResolveOptions, SourceMapStrategy};

use crate::dev::DevServerOptions;
use crate::error::ConfigError;
use crate::mode::BuildMode;
use crate::overrides::ConfigOverrides;

use helpers::default_output_dir;

/// Where generated files land and how they are named
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputOptions {
    /// Output directory for generated bundles
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// Per-bundle filename pattern
    #[serde(default)]
    pub filename: FilenameTemplate,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            filename: FilenameTemplate::default(),
        }
    }
}

/// The resolved configuration record consumed by the external bundler.
///
/// Built fresh on every invocation. The mode is derived once from the
/// argument list and `source_maps`, `output.filename` and the plugin
/// list are pure functions of it; `loader_rules`, `split_chunks` and
/// `resolve` are mode-invariant. Nothing here is persisted between
/// invocations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    pub mode: BuildMode,

    #[serde(default)]
    pub source_maps: SourceMapStrategy,

    /// Ordered mapping from output bundle name to its source files
    #[serde(default)]
    pub entries: IndexMap<String, Vec<PathBuf>>,

    #[serde(default)]
    pub output: OutputOptions,

    /// Ordered plugin invocation descriptors
    #[serde(default)]
    pub plugins: Vec<PluginDescriptor>,

    /// Ordered (pattern, loader chain) pairs, identical in both modes
    #[serde(default = "default_loader_rules")]
    pub loader_rules: Vec<LoaderRule>,

    #[serde(default)]
    pub split_chunks: SplitChunksOptions,

    #[serde(default)]
    pub resolve: ResolveOptions,

    /// Settings for the external development server. Carried in both
    /// modes; only a development invocation starts the server.
    #[serde(default)]
    pub dev_server: DevServerOptions,
}

impl BuildConfig {
    /// Development preset: fast inline source maps, stable filenames,
    /// no asset-copy step.
    pub fn development() -> Self {
        Self::preset(BuildMode::Development)
    }

    /// Production preset: external source maps, content-hashed
    /// filenames, asset-copy step appended.
    pub fn production() -> Self {
        Self::preset(BuildMode::Production)
    }

    /// Build the configuration for a raw invocation argument list.
    ///
    /// This is the whole selector: derive the mode, then dispatch to
    /// the matching preset. Argument lists without the dev-server
    /// marker, including the empty list, resolve to production.
    pub fn for_invocation<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::preset(BuildMode::from_invocation(args))
    }

    fn preset(mode: BuildMode) -> Self {
        let mut plugins = vec![PluginDescriptor::Html(HtmlOptions::default())];
        if mode.is_production() {
            plugins.push(PluginDescriptor::CopyAssets(CopyAssetsOptions::default()));
        }

        Self {
            mode,
            source_maps: SourceMapStrategy::for_mode(mode),
            entries: default_entries(),
            output: OutputOptions {
                dir: default_output_dir(),
                filename: FilenameTemplate::for_mode(mode),
            },
            plugins,
            loader_rules: default_loader_rules(),
            split_chunks: SplitChunksOptions::default(),
            resolve: ResolveOptions::default(),
            dev_server: DevServerOptions::default(),
        }
    }

    /// Create from serde_json::Value (for programmatic use)
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            message: e.to_string(),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> Result<Value, ConfigError> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            message: e.to_string(),
        })
    }

    /// Merge project-level overrides into the preset.
    ///
    /// Only project facts are overridable: entries, directories, page
    /// metadata, dev server address. Mode-derived fields are not
    /// reachable from here and stay functions of the mode.
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(entries) = overrides.entries {
            self.entries = entries;
        }

        if let Some(dir) = overrides.output_dir {
            self.output.dir = dir;
        }

        if let Some(html) = overrides.html {
            for plugin in &mut self.plugins {
                if let PluginDescriptor::Html(options) = plugin {
                    if let Some(template) = html.template.clone() {
                        options.template = template;
                    }
                    if let Some(filename) = html.filename.clone() {
                        options.filename = filename;
                    }
                    if let Some(title) = html.title.clone() {
                        options.title = Some(title);
                    }
                }
            }
        }

        if let Some(from) = overrides.assets_dir {
            for plugin in &mut self.plugins {
                if let PluginDescriptor::CopyAssets(options) = plugin {
                    options.from = from.clone();
                }
            }
        }

        if let Some(dev) = overrides.dev_server {
            if let Some(host) = dev.host {
                self.dev_server.host = host;
            }
            if let Some(port) = dev.port {
                self.dev_server.port = port;
            }
            if let Some(static_dir) = dev.static_dir {
                self.dev_server.static_dir = static_dir;
            }
        }
    }

    /// Schema-only validation of the assembled record.
    pub fn validate(&self) -> Result<(), ConfigError> {
        crate::validation::validate_schema(self)
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::production()
    }
}

fn default_entries() -> IndexMap<String, Vec<PathBuf>> {
    let mut entries = IndexMap::new();
    entries.insert("app".to_string(), vec![PathBuf::from("src/App.fsproj")]);
    entries.insert(
        "style".to_string(),
        vec![PathBuf::from("src/scss/main.scss")],
    );
    entries
}
