//! Logging infrastructure for the loadout CLI.
//!
//! Structured logging on the `tracing` ecosystem: `--verbose` raises
//! loadout crates to debug level, `--quiet` drops to errors only, and
//! `RUST_LOG` overrides the default info filter.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Call once at startup, before any logging occurs.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("loadout=debug,loadout_config=debug,loadout_cli=debug")
    } else if quiet {
        EnvFilter::new("loadout=error,loadout_config=error,loadout_cli=error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("loadout=info,loadout_config=info,loadout_cli=info")
        })
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    // The subscriber is global and can only be installed once per
    // process, so these only exercise filter construction.

    #[test]
    fn verbose_filter_parses() {
        let _filter = EnvFilter::new("loadout=debug,loadout_config=debug,loadout_cli=debug");
    }

    #[test]
    fn quiet_filter_parses() {
        let _filter = EnvFilter::new("loadout=error,loadout_config=error,loadout_cli=error");
    }
}
