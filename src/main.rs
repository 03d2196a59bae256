//! gpsync - localization bundle synchronization
//!
//! A command line tool that uploads source-language resource files into a
//! translation bundle store and downloads their translations back into the
//! workspace under a configurable directory layout.

use clap::Parser;
use console::Style;

mod cli;
mod commands;
mod config;
mod discovery;
mod domain;
mod error;
mod export;
mod filter;
mod logging;
mod operations;
mod path_utils;
mod resolver;
mod store;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Upload(args) => commands::upload::run(cli.workspace, args),
        Commands::Download(args) => commands::download::run(cli.workspace, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        let category = e.category();
        eprintln!("Error: {e}");
        eprintln!(
            "{}",
            Style::new()
                .bold()
                .red()
                .for_stderr()
                .apply_to(format!("Run failed ({})", category.label()))
        );
        std::process::exit(category.exit_code());
    }
}
