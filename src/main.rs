use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use pricing_page::{config, init_tracing};

fn main() -> Result<()> {
    // Parse CLI arguments
    let args = cli::Cli::parse();

    if let cli::Commands::Version = args.get_command() {
        println!("Pricing Page v{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Logging settings live in the config file, so load it before tracing starts
    let cfg = config::load_config(&args.config)?;
    init_tracing(&cfg.logging.level, cfg.logging.format == "json");

    // Dispatch to appropriate command handler
    match args.get_command() {
        cli::Commands::Render { output } => commands::render::execute(&cfg, output)?,
        cli::Commands::Rates => commands::rates::execute(&cfg)?,
        cli::Commands::Quote {
            plan,
            subscribers,
            yearly,
        } => commands::quote::execute(&cfg, &plan, subscribers, yearly)?,
        cli::Commands::Validate => commands::validate::execute(&cfg)?,
        cli::Commands::Version => {}
    }

    Ok(())
}
