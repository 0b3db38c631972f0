use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pricing", version, about = "Pricing page model builder")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Build the pricing page payload and print it as JSON (default)
    Render {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the overage rate table
    Rates,

    /// Estimate overage charges for a subscriber count
    Quote {
        /// Normalized plan key (e.g. "growth")
        #[arg(short, long)]
        plan: String,

        /// Total subscriber count
        #[arg(short, long)]
        subscribers: u64,

        /// Use yearly billing rates
        #[arg(short, long)]
        yearly: bool,
    },

    /// Validate configuration and pricing catalog
    Validate,

    /// Show version information
    Version,
}

impl Cli {
    /// Get the command to execute, defaulting to Render if none provided
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Render { output: None })
    }
}
