//! File-based override discovery for CLI use.
//!
//! Finds and loads `loadout.toml` from a project root. Library users
//! can construct [`ConfigOverrides`] directly and skip this module.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::overrides::ConfigOverrides;

const OVERRIDE_FILE: &str = "loadout.toml";

/// File-based override discovery rooted at a project directory.
pub struct OverrideDiscovery {
    root: PathBuf,
}

impl OverrideDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Path of the override file, if one exists in the root.
    pub fn find(&self) -> Option<PathBuf> {
        let path = self.root.join(OVERRIDE_FILE);
        path.exists().then_some(path)
    }

    /// Load overrides from the discovered file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no override file is present.
    pub fn load(&self) -> Result<ConfigOverrides> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        let content = fs::read_to_string(&path)?;

        let overrides = toml::from_str(&content).map_err(|e| ConfigError::InvalidValue {
            field: OVERRIDE_FILE.to_string(),
            message: e.to_string(),
        })?;

        tracing::debug!(path = %path.display(), "loaded overrides");
        Ok(overrides)
    }

    /// Load overrides, treating an absent file as no overrides.
    ///
    /// Parse failures still surface; only `NotFound` degrades to the
    /// empty override set, keeping the zero-config default usable.
    pub fn load_or_default(&self) -> Result<ConfigOverrides> {
        match self.load() {
            Ok(overrides) => Ok(overrides),
            Err(ConfigError::NotFound) => {
                tracing::debug!(root = %self.root.display(), "no override file, using presets");
                Ok(ConfigOverrides::default())
            }
            Err(err) => Err(err),
        }
    }
}

/// Discover and load overrides from a project root (convenience).
pub fn discover_overrides(root: impl AsRef<Path>) -> Result<ConfigOverrides> {
    OverrideDiscovery::new(root).load_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn find_returns_none_when_no_file() {
        let dir = TempDir::new().unwrap();
        let discovery = OverrideDiscovery::new(dir.path());
        assert!(discovery.find().is_none());
    }

    #[test]
    fn load_returns_not_found_without_file() {
        let dir = TempDir::new().unwrap();
        let result = OverrideDiscovery::new(dir.path()).load();
        assert!(matches!(result, Err(ConfigError::NotFound)));
    }

    #[test]
    fn load_or_default_degrades_to_empty_overrides() {
        let dir = TempDir::new().unwrap();
        let overrides = OverrideDiscovery::new(dir.path())
            .load_or_default()
            .unwrap();
        assert_eq!(overrides, ConfigOverrides::default());
    }

    #[test]
    fn load_parses_toml_overrides() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("loadout.toml"),
            r#"
output_dir = "build"

[dev_server]
port = 3000
"#,
        )
        .unwrap();

        let overrides = OverrideDiscovery::new(dir.path()).load().unwrap();
        assert_eq!(overrides.output_dir, Some("build".into()));
        assert_eq!(overrides.dev_server.unwrap().port, Some(3000));
    }

    #[test]
    fn malformed_toml_is_a_parse_error_not_a_fallback() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("loadout.toml"), "output_dir = [").unwrap();

        let result = OverrideDiscovery::new(dir.path()).load_or_default();
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }
}
