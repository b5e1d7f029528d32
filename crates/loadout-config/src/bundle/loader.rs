use std::path::Path;

use serde::{Deserialize, Serialize};

/// A file-extension pattern tested against source paths.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilePattern {
    extensions: Vec<String>,
}

impl FilePattern {
    pub fn extensions(extensions: &[&str]) -> Self {
        Self {
            extensions: extensions.iter().map(|ext| (*ext).to_string()).collect(),
        }
    }

    /// Case-insensitive extension match.
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .is_some_and(|ext| self.extensions.iter().any(|candidate| *candidate == ext))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.extensions
    }
}

/// One (pattern, loader chain) pair.
///
/// The external bundler tries rules in sequence and hands a matching
/// file to the named loaders. Loader identifiers are opaque here; the
/// chain itself runs outside this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderRule {
    pub pattern: FilePattern,
    pub loaders: Vec<String>,
}

impl LoaderRule {
    pub fn new(pattern: FilePattern, loaders: &[&str]) -> Self {
        Self {
            pattern,
            loaders: loaders.iter().map(|loader| (*loader).to_string()).collect(),
        }
    }
}

/// The fixed rule list shared by both build modes: Fable sources,
/// stylesheets, then binary assets. The extension sets are mutually
/// exclusive, so ordering has no observable effect on correct inputs.
pub fn default_loader_rules() -> Vec<LoaderRule> {
    vec![
        LoaderRule::new(
            FilePattern::extensions(&["fs", "fsx", "fsproj"]),
            &["fable-loader"],
        ),
        LoaderRule::new(
            FilePattern::extensions(&["sass", "scss", "css"]),
            &["style-loader", "css-loader", "sass-loader"],
        ),
        LoaderRule::new(
            FilePattern::extensions(&[
                "png", "jpg", "jpeg", "gif", "svg", "woff", "woff2", "ttf", "eot",
            ]),
            &["file-loader"],
        ),
    ]
}

/// First rule whose pattern matches the path, in declaration order.
pub fn rule_for<'a>(rules: &'a [LoaderRule], path: &Path) -> Option<&'a LoaderRule> {
    rules.iter().find(|rule| rule.pattern.matches(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn fable_sources_use_the_fable_loader() {
        let rules = default_loader_rules();
        let rule = rule_for(&rules, &PathBuf::from("src/App.fsproj")).expect("rule");
        assert_eq!(rule.loaders, vec!["fable-loader"]);
        assert!(rule.pattern.matches(&PathBuf::from("src/View.fs")));
        assert!(rule.pattern.matches(&PathBuf::from("scripts/build.fsx")));
    }

    #[test]
    fn stylesheets_use_the_style_chain() {
        let rules = default_loader_rules();
        let rule = rule_for(&rules, &PathBuf::from("src/scss/main.scss")).expect("rule");
        assert_eq!(rule.loaders, vec!["style-loader", "css-loader", "sass-loader"]);
    }

    #[test]
    fn binary_assets_use_the_file_loader() {
        let rules = default_loader_rules();
        for file in ["logo.png", "photo.JPEG", "icon.svg", "font.woff2"] {
            let rule = rule_for(&rules, &PathBuf::from(file)).expect("rule");
            assert_eq!(rule.loaders, vec!["file-loader"]);
        }
    }

    #[test]
    fn unknown_extensions_match_no_rule() {
        let rules = default_loader_rules();
        assert!(rule_for(&rules, &PathBuf::from("src/index.html")).is_none());
        assert!(rule_for(&rules, &PathBuf::from("README")).is_none());
    }

    #[test]
    fn extension_sets_are_mutually_exclusive() {
        let rules = default_loader_rules();
        let mut seen = std::collections::HashSet::new();
        for rule in &rules {
            for ext in rule.pattern.as_slice() {
                assert!(seen.insert(ext.clone()), "extension {ext} appears twice");
            }
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        let pattern = FilePattern::extensions(&["png"]);
        assert!(pattern.matches(&PathBuf::from("Logo.PNG")));
    }
}
