//! relaylog command line.
//!
//! Emits a single record or notification from the shell, using the same
//! configuration a service would embed:
//!
//! ```text
//! relaylog --config relaylog.toml log error "disk full" --label storage
//! relaylog --env notify "deploy finished"
//! relaylog --config relaylog.toml check
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use relaylog::config::{self, LoggerConfig};
use relaylog::observability::logging::init_logging;
use relaylog::{Level, Logger, Message};

#[derive(Parser)]
#[command(name = "relaylog")]
#[command(about = "Structured logging with chat notifications", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Overlay RELAYLOG_* environment variables on the configuration.
    #[arg(long)]
    env: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Emit one record (error and fatal also notify)
    Log {
        /// trace, debug, info, warn, error, fatal (anything else logs as unspecified)
        level: String,
        message: String,
        #[arg(short, long)]
        label: Option<String>,
        /// Parse MESSAGE as JSON and log it as structured data
        #[arg(long)]
        json: bool,
    },
    /// Send a notification directly, ignoring the minimum level
    Notify {
        message: String,
        #[arg(short, long)]
        label: Option<String>,
    },
    /// Validate the configuration and print it
    Check,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(config.runtime, "relaylog=warn");

    match run(cli.command, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn resolve_config(cli: &Cli) -> Result<LoggerConfig, config::ConfigError> {
    let base = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => LoggerConfig::default(),
    };
    if !cli.env {
        return Ok(base);
    }

    let config = config::env::apply_env_vars(base, std::env::vars());
    config::validate_config(&config).map_err(config::ConfigError::Validation)?;
    Ok(config)
}

async fn run(command: Commands, config: LoggerConfig) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Log {
            level,
            message,
            label,
            json,
        } => {
            let level = Level::from_name_lenient(&level);
            let message = if json {
                Message::Structured(serde_json::from_str(&message)?)
            } else {
                Message::Text(message)
            };

            let logger = Logger::new(config);
            if let Some(delivery) = logger.log(level, message, label.as_deref()) {
                tracing::debug!(delivery_id = %delivery.id(), "Waiting for notification");
                delivery.wait().await;
            }
        }
        Commands::Notify { message, label } => {
            Logger::new(config).notify(message, label.as_deref()).await;
        }
        Commands::Check => {
            let mut shown = config.clone();
            if shown.bot_token.is_some() {
                shown.bot_token = Some("<redacted>".to_string());
            }
            println!("{}", toml::to_string_pretty(&shown)?);
        }
    }

    Ok(())
}
