//! Main entry point for the loadout CLI.

use std::process::ExitCode;

use clap::Parser;
use loadout_cli::{cli, commands, logger, ui};

fn main() -> ExitCode {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors();

    let result = match args.command {
        cli::Command::Build(build_args) => commands::build_execute(build_args),
        cli::Command::DevServer(dev_args) => commands::dev_server_execute(dev_args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ui::error(&err.to_string());
            ExitCode::FAILURE
        }
    }
}
