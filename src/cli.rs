use clap::{Parser, Subcommand};

/// CLI arguments parser using `clap`
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Base URL of the lookup API (overrides the settings file)
    #[arg(long, global = true)]
    pub api_base: Option<String>,
    /// Subcommand chosen to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Looks up a single GitHub user and prints the profile
    Search {
        /// GitHub username
        username: String,
        /// Open the profile page in the browser when found
        #[arg(long)]
        open: bool,
    },
    /// Displays the effective settings
    Config,
}
