//! CLI definitions and entry point

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use super::commands;
use fleetcheck::config::GlobalConfig;
use fleetcheck::output::OutputMode;

/// fleetcheck - Service-due checks for fleet vehicles
#[derive(Parser, Debug)]
#[command(
    name = "fleetcheck",
    version,
    about = "Service-due checks for fleet vehicles",
    long_about = "Decide which vehicles in a fleet need maintenance.\n\n\
                  Engines, batteries and tires each carry their own rule.\n\
                  A vehicle needs service when any of its parts does."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to ~/.fleetcheck/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check every vehicle in a fleet file
    Check {
        /// Path to the fleet TOML file
        fleet: PathBuf,

        /// Evaluate as of this date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },

    /// List vehicle models and the parts they are fitted with
    Models,

    /// Show the effective service policy config
    Config {
        /// Write the effective config to the config file
        #[arg(long)]
        init: bool,

        /// Overwrite an existing config file with --init
        #[arg(short, long, requires = "init")]
        force: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let writing_config = matches!(cli.command, Some(Command::Config { init: true, .. }));
    let config = match &cli.config {
        Some(path) if writing_config && !path.exists() => GlobalConfig::default(),
        Some(path) => GlobalConfig::load_from(path)?,
        None => GlobalConfig::load(),
    };
    log::debug!("service policy: {:?}", config.service);

    match cli.command {
        Some(Command::Check { fleet, as_of }) => {
            let as_of = as_of.unwrap_or_else(|| chrono::Local::now().date_naive());
            commands::check(&fleet, as_of, &config, output_mode)
        },
        Some(Command::Models) => commands::models(&config, output_mode),
        Some(Command::Config { init, force }) => {
            commands::config(cli.config.as_deref(), &config, init, force, output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": fleetcheck::VERSION
                    })
                );
            } else {
                println!("fleetcheck v{}", fleetcheck::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": fleetcheck::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("fleetcheck v{}", fleetcheck::VERSION);
                println!("\nRun 'fleetcheck --help' for usage");
                println!("Run 'fleetcheck check <fleet.toml>' to check a fleet");
            }
            Ok(())
        },
    }
}
