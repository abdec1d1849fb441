// Command line entry points

pub mod migrate;

use clap::{Parser, Subcommand};

/// Trail catalog backend
#[derive(Parser, Debug)]
#[command(name = "trail-catalog")]
#[command(about = "Trail catalog REST backend", long_about = None)]
pub struct Cli {
    /// Path to an env file loaded before reading configuration
    #[arg(long, global = true)]
    pub env_file: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Run migrations, then start the HTTP server (default)
    Serve,

    /// Apply pending database migrations and exit
    Migrate,
}

impl Cli {
    /// The subcommand to run, defaulting to `serve`
    pub fn command(&self) -> Commands {
        self.command.unwrap_or(Commands::Serve)
    }
}
