use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::bundle::helpers::{default_html_filename, default_html_template};

/// HTML page generation options
///
/// Invocation descriptor for the external HTML plugin: it reads the
/// template, injects references to the generated bundles, and emits one
/// page into the output directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlOptions {
    /// Source template for the generated page
    #[serde(default = "default_html_template")]
    pub template: PathBuf,

    /// Output filename, relative to the output directory
    #[serde(default = "default_html_filename")]
    pub filename: String,

    /// Page title override
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub title: Option<String>,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            template: default_html_template(),
            filename: default_html_filename(),
            title: None,
        }
    }
}
