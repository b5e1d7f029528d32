//! loadout CLI - resolves and emits the build configuration record.
//!
//! The binary derives a build mode from its own invocation, folds in
//! project overrides from `loadout.toml`, validates the assembled
//! record, and writes it where the external bundler picks it up.
//!
//! # Architecture
//!
//! - [`cli`] - clap argument definitions
//! - [`commands`] - `build` and `dev-server` implementations
//! - [`error`] - CLI error types
//! - [`logger`] - structured logging with tracing
//! - [`ui`] - terminal status messages and formatting

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};
