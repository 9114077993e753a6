//! patchlog CLI: the `patchlog` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    support::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::History {
            change,
            config,
            json,
        } => commands::history::run(change, config, json),

        Commands::Latest { change, json } => commands::latest::run(change, json),

        Commands::Updates {
            known,
            source,
            json,
        } => commands::updates::run(known, source, json),
    }
}
