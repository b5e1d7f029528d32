//! Command-line interface definition for the loadout tool.
//!
//! # Command Structure
//!
//! - `loadout build` - produce the production configuration
//! - `loadout dev-server` - produce the development configuration

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// loadout - build configuration selector for Fable front-ends
#[derive(Parser, Debug)]
#[command(
    name = "loadout",
    version,
    about = "Selects and emits the build configuration for a Fable front-end",
    long_about = "loadout assembles the configuration record an external bundler consumes.\n\
                  Invocations that name the dev-server select the development preset;\n\
                  everything else resolves to the production preset."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available loadout subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Produce the production build configuration
    ///
    /// Resolves the production preset (external source maps, hashed
    /// filenames, asset-copy step), applies loadout.toml overrides,
    /// and emits the record.
    Build(BuildArgs),

    /// Produce the configuration for the local development server
    ///
    /// Resolves the development preset (inline source maps, stable
    /// filenames, no asset copy) and reports the address the dev
    /// server will serve on.
    #[command(name = "dev-server")]
    DevServer(DevServerArgs),
}

/// Arguments for the build command
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Project root where loadout.toml overrides are discovered
    #[arg(long, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,

    /// Print the resolved configuration to stdout instead of writing it
    #[arg(long)]
    pub print: bool,
}

/// Arguments for the dev-server command
#[derive(Args, Debug)]
pub struct DevServerArgs {
    /// Project root where loadout.toml overrides are discovered
    #[arg(long, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,

    /// Print the resolved configuration to stdout instead of writing it
    #[arg(long)]
    pub print: bool,

    /// Port for the development server (overrides loadout.toml)
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,
}
