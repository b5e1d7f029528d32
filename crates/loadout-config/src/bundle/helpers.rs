use std::path::PathBuf;

// Helper defaults
pub(crate) fn default_output_dir() -> PathBuf {
    PathBuf::from("dist")
}

pub(crate) fn default_assets_dir() -> PathBuf {
    PathBuf::from("assets")
}

pub(crate) fn default_html_template() -> PathBuf {
    PathBuf::from("src/index.html")
}

pub(crate) fn default_html_filename() -> String {
    "index.html".to_string()
}
