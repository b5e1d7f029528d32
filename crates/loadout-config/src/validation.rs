//! Schema validation for assembled configuration records.
//!
//! Schema-only: entry files are not checked for existence here, the
//! external bundler resolves and reports missing paths itself.

use std::collections::HashSet;

use crate::bundle::BuildConfig;
use crate::error::{ConfigError, Result};

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()>;
}

/// Structural validation with no filesystem checks.
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        if config.entries.is_empty() {
            return Err(ConfigError::NoEntries);
        }

        for (name, files) in &config.entries {
            if name.trim().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: "entry names cannot be empty".to_string(),
                    hint: Some("Name each bundle in the entries table".to_string()),
                });
            }
            if files.is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: format!("entry '{name}' has no source files"),
                    hint: Some("List at least one source file per entry".to_string()),
                });
            }
        }

        if !config.output.filename.pattern().contains("[name]") {
            return Err(ConfigError::SchemaValidation {
                message: "output filename pattern must contain [name]".to_string(),
                hint: Some("Without [name] every bundle would collide on one path".to_string()),
            });
        }

        let mut seen = HashSet::new();
        for rule in &config.loader_rules {
            if rule.loaders.is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: "loader rules must name at least one loader".to_string(),
                    hint: None,
                });
            }
            for ext in rule.pattern.as_slice() {
                if !seen.insert(ext.clone()) {
                    return Err(ConfigError::SchemaValidation {
                        message: format!("extension '{ext}' is claimed by more than one rule"),
                        hint: Some("Rules are tried in sequence; keep their patterns disjoint".to_string()),
                    });
                }
            }
        }

        if config.dev_server.port == 0 {
            return Err(ConfigError::SchemaValidation {
                message: "dev server port cannot be 0".to_string(),
                hint: Some("Pick a fixed port the dev server can advertise".to_string()),
            });
        }

        Ok(())
    }
}

/// Convenience function for schema validation
pub fn validate_schema(config: &BuildConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::{FilenameTemplate, LoaderRule};

    #[test]
    fn presets_validate_clean() {
        assert!(validate_schema(&BuildConfig::production()).is_ok());
        assert!(validate_schema(&BuildConfig::development()).is_ok());
    }

    #[test]
    fn empty_entries_are_rejected() {
        let mut config = BuildConfig::production();
        config.entries.clear();
        assert!(matches!(
            validate_schema(&config),
            Err(ConfigError::NoEntries)
        ));
    }

    #[test]
    fn entries_without_files_are_rejected() {
        let mut config = BuildConfig::production();
        config.entries.insert("empty".to_string(), Vec::new());
        assert!(matches!(
            validate_schema(&config),
            Err(ConfigError::SchemaValidation { .. })
        ));
    }

    #[test]
    fn filename_pattern_must_keep_the_name_token() {
        let mut config = BuildConfig::production();
        config.output.filename = FilenameTemplate::new("bundle.js");
        assert!(matches!(
            validate_schema(&config),
            Err(ConfigError::SchemaValidation { .. })
        ));
    }

    #[test]
    fn overlapping_rules_are_rejected() {
        let mut config = BuildConfig::production();
        let duplicate = config.loader_rules[0].clone();
        config.loader_rules.push(duplicate);
        assert!(matches!(
            validate_schema(&config),
            Err(ConfigError::SchemaValidation { .. })
        ));
    }

    #[test]
    fn loader_rules_need_loaders() {
        let mut config = BuildConfig::production();
        config.loader_rules.push(LoaderRule {
            pattern: crate::bundle::FilePattern::extensions(&["md"]),
            loaders: Vec::new(),
        });
        assert!(matches!(
            validate_schema(&config),
            Err(ConfigError::SchemaValidation { .. })
        ));
    }

    #[test]
    fn zero_port_is_rejected() {
        let mut config = BuildConfig::development();
        config.dev_server.port = 0;
        assert!(matches!(
            validate_schema(&config),
            Err(ConfigError::SchemaValidation { .. })
        ));
    }
}
