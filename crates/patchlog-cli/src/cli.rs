use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "patchlog",
    about = "patchlog: patch set history and update checks for reviewed changes",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the ordered patch set history of a change
    History {
        /// Path to a change detail JSON document
        change: String,

        /// TOML file overriding the WIP tag sets (`[wip] entered/exited`)
        #[arg(long)]
        config: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report the latest patch set and change edit placement
    Latest {
        /// Path to a change detail JSON document
        change: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check a loaded change against a fresher copy
    Updates {
        /// Path to the previously loaded change detail JSON document
        known: String,

        /// Directory holding current change details as `<number>.json`
        #[arg(long)]
        source: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
