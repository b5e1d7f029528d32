//! Build command implementation.
//!
//! Resolves the configuration record for a one-shot production build
//! and emits it for the external bundler.

use std::time::Instant;

use loadout_config::{discover_overrides, BuildConfig};

use crate::cli::BuildArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the build command.
///
/// 1. Derive the mode from the raw invocation argument list
/// 2. Apply `loadout.toml` overrides from the project root
/// 3. Validate the assembled record
/// 4. Emit it (stdout with `--print`, output directory otherwise)
pub fn execute(args: BuildArgs) -> Result<()> {
    let start = Instant::now();

    ui::info("Resolving build configuration...");
    let mut config = BuildConfig::for_invocation(std::env::args());
    tracing::debug!(mode = config.mode.as_str(), "mode selected");

    let overrides = discover_overrides(&args.root)?;
    config.apply_overrides(overrides);
    config.validate()?;

    if let Some(path) = utils::emit(&config, &args.root, args.print)? {
        ui::info(&format!("Configuration written to {}", path.display()));
    }

    ui::success(&format!(
        "{} configuration ready in {}",
        config.mode.as_str(),
        ui::format_duration(start.elapsed())
    ));

    Ok(())
}
