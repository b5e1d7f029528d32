use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::bundle::helpers::default_assets_dir;

/// Asset-copy step appended to production builds.
///
/// The external plugin copies the directory's contents verbatim into
/// the output directory. Development builds skip it; the dev server
/// serves the same directory in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyAssetsOptions {
    /// Directory whose contents are copied into the output directory
    #[serde(default = "default_assets_dir")]
    pub from: PathBuf,
}

impl Default for CopyAssetsOptions {
    fn default() -> Self {
        Self {
            from: default_assets_dir(),
        }
    }
}
