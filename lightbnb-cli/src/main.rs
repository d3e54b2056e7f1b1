mod commands;
mod config;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::{PropertyArgs, ReservationsArgs, SearchArgs, UserArgs};
use crate::config::DbConfig;

#[derive(Parser, Debug)]
#[command(name = "lightbnb", author, version, about = "Query the LightBnB database")]
struct Cli {
    /// PostgreSQL connection string (overrides ~/.lightbnb/config.toml)
    #[arg(long, env = "DATABASE_URL", global = true)]
    database_url: Option<String>,

    /// Enable debug logging, including rendered SQL
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Look up or register users
    User(UserArgs),
    /// List a guest's reservations
    Reservations(ReservationsArgs),
    /// Search properties with optional filters
    Search(SearchArgs),
    /// Create properties
    Property(PropertyArgs),
    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show config file path
    Path,
    /// Show resolved configuration
    Show,
}

fn init_tracing(debug: bool) -> Result<()> {
    let default_level = if debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(debug)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.debug).ok();

    let config = DbConfig::load(cli.database_url)?;

    match cli.command {
        Commands::Config(ConfigCommands::Path) => {
            println!("{}", DbConfig::config_path().display());
        }
        Commands::Config(ConfigCommands::Show) => {
            let shown = DbConfig {
                database_url: config.redacted_url(),
                ..config
            };
            print!("{}", toml::to_string_pretty(&shown)?);
        }
        Commands::User(args) => commands::run_user(&config, args).await?,
        Commands::Reservations(args) => commands::run_reservations(&config, args).await?,
        Commands::Search(args) => commands::run_search(&config, args).await?,
        Commands::Property(args) => commands::run_property(&config, args).await?,
    }

    Ok(())
}
