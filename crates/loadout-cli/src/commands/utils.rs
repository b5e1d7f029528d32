//! Shared helpers for command implementations.

use std::fs;
use std::path::{Path, PathBuf};

use loadout_config::BuildConfig;

use crate::error::Result;

/// Filename of the emitted record inside the output directory.
pub(crate) const CONFIG_FILENAME: &str = "loadout.config.json";

/// Emit the record as pretty JSON.
///
/// With `print` the record goes to stdout and nothing touches the
/// filesystem; otherwise it lands in the output directory where the
/// external bundler reads it, and the written path is returned.
pub(crate) fn emit(config: &BuildConfig, root: &Path, print: bool) -> Result<Option<PathBuf>> {
    let json = serde_json::to_string_pretty(config)?;

    if print {
        println!("{json}");
        return Ok(None);
    }

    let out_dir = root.join(&config.output.dir);
    fs::create_dir_all(&out_dir)?;

    let path = out_dir.join(CONFIG_FILENAME);
    fs::write(&path, json)?;
    tracing::debug!(path = %path.display(), "wrote configuration record");
    Ok(Some(path))
}
