//! Build mode selection from the process invocation.
//!
//! The mode is derived once, from the raw argument list, and every other
//! mode-dependent field of the configuration is a pure function of it.

use serde::{Deserialize, Serialize};

/// Substring that marks a development-server invocation.
///
/// The scan is plain substring containment over each argument, so both a
/// `dev-server` subcommand and a `webpack-dev-server`-style binary name
/// select development mode.
pub const DEV_SERVER_MARKER: &str = "dev-server";

/// Whether the build runs under an interactive development server or as
/// a one-shot production build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    Development,
    #[default]
    Production,
}

impl BuildMode {
    /// Derive the mode from an invocation argument list.
    ///
    /// Any argument containing [`DEV_SERVER_MARKER`] selects
    /// `Development`. Everything else, including the empty list, falls
    /// through to `Production`; there is no error path.
    pub fn from_invocation<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let is_dev = args
            .into_iter()
            .any(|arg| arg.as_ref().contains(DEV_SERVER_MARKER));

        if is_dev {
            BuildMode::Development
        } else {
            BuildMode::Production
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BuildMode::Development => "development",
            BuildMode::Production => "production",
        }
    }

    pub fn is_development(self) -> bool {
        matches!(self, BuildMode::Development)
    }

    pub fn is_production(self) -> bool {
        matches!(self, BuildMode::Production)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_selects_development() {
        let mode = BuildMode::from_invocation(["node", "webpack-dev-server", "--port", "8080"]);
        assert_eq!(mode, BuildMode::Development);
    }

    #[test]
    fn absent_marker_selects_production() {
        let mode = BuildMode::from_invocation(["node", "webpack"]);
        assert_eq!(mode, BuildMode::Production);
    }

    #[test]
    fn empty_invocation_falls_through_to_production() {
        let args: [&str; 0] = [];
        assert_eq!(BuildMode::from_invocation(args), BuildMode::Production);
    }

    #[test]
    fn marker_is_matched_anywhere_in_an_argument() {
        let mode = BuildMode::from_invocation(["/usr/local/bin/loadout", "dev-server"]);
        assert_eq!(mode, BuildMode::Development);

        let mode = BuildMode::from_invocation(["target/debug/some-dev-server-wrapper"]);
        assert_eq!(mode, BuildMode::Development);
    }

    #[test]
    fn default_is_production() {
        assert_eq!(BuildMode::default(), BuildMode::Production);
    }

    #[test]
    fn owned_strings_are_accepted() {
        let args = vec!["loadout".to_string(), "build".to_string()];
        assert_eq!(BuildMode::from_invocation(&args), BuildMode::Production);
    }
}
