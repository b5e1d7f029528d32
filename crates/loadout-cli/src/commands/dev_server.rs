//! Dev-server command implementation.
//!
//! The invocation itself carries the dev-server marker, so the mode
//! selector resolves to the development preset. The server process is
//! external; this command prepares its configuration and reports the
//! address it will serve on.

use std::time::Instant;

use loadout_config::{discover_overrides, BuildConfig};

use crate::cli::DevServerArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the dev-server command.
///
/// Override precedence: CLI flags beat `loadout.toml`, which beats the
/// preset defaults.
pub fn execute(args: DevServerArgs) -> Result<()> {
    let start = Instant::now();

    ui::info("Resolving development configuration...");
    let mut config = BuildConfig::for_invocation(std::env::args());
    tracing::debug!(mode = config.mode.as_str(), "mode selected");

    let overrides = discover_overrides(&args.root)?;
    config.apply_overrides(overrides);

    if let Some(port) = args.port {
        config.dev_server.port = port;
    }

    config.validate()?;

    if let Some(path) = utils::emit(&config, &args.root, args.print)? {
        ui::info(&format!("Configuration written to {}", path.display()));
    }

    ui::info(&format!(
        "Dev server will serve {} at {}",
        config.dev_server.static_dir.display(),
        config.dev_server.address()
    ));

    ui::success(&format!(
        "{} configuration ready in {}",
        config.mode.as_str(),
        ui::format_duration(start.elapsed())
    ));

    Ok(())
}
