//! Command-line tool for managing aliases.
//!
//! Talks to the database directly, without going through an HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Map an alias to a URL
//! cargo run --bin urlctl -- save https://example.com ex1
//!
//! # Resolve an alias
//! cargo run --bin urlctl -- get ex1
//!
//! # Delete an alias (asks for confirmation unless --yes)
//! cargo run --bin urlctl -- delete ex1
//!
//! # Check database connection
//! cargo run --bin urlctl -- db check
//! ```
//!
//! # Environment Variables
//!
//! `POSTGRES_HOST`, `POSTGRES_PORT`, `POSTGRES_USER`, `POSTGRES_PASSWORD`,
//! `POSTGRES_DB` (all required). A `.env` file is loaded if present.

use url_alias_store::application::services::UrlService;
use url_alias_store::config::DatabaseConfig;
use url_alias_store::error::AppError;
use url_alias_store::infrastructure::persistence::{PgStorage, PgUrlRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// CLI tool for managing url aliases.
#[derive(Parser)]
#[command(name = "urlctl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Map an alias to a URL
    Save {
        /// Target URL (http or https)
        url: String,

        /// Alias to create
        alias: String,
    },

    /// Print the URL an alias points to
    Get {
        /// Alias to resolve
        alias: String,
    },

    /// Delete an alias
    Delete {
        /// Alias to delete
        alias: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = DatabaseConfig::from_env().context("Failed to load database configuration")?;
    config.validate()?;

    let storage = PgStorage::open(&config)
        .await
        .context("Failed to connect to database")?;

    let service = UrlService::new(Arc::new(storage.repository()));

    let outcome = match cli.command {
        Commands::Save { url, alias } => save(&service, &url, &alias).await,
        Commands::Get { alias } => get(&service, &alias).await,
        Commands::Delete { alias, yes } => delete(&service, &alias, yes).await,
        Commands::Db { action } => handle_db_action(action, &storage, &config).await,
    };

    storage.close().await;

    match outcome {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => match e.downcast::<AppError>() {
            Ok(app_err) => {
                report(&app_err);
                Ok(ExitCode::FAILURE)
            }
            Err(e) => Err(e),
        },
    }
}

/// Maps an alias to a URL.
async fn save(service: &UrlService<PgUrlRepository>, url: &str, alias: &str) -> Result<()> {
    service.shorten(url, alias).await?;

    println!("{}", "✅ Alias saved".green().bold());
    println!("  {} → {}", alias.cyan(), url.bright_white());

    Ok(())
}

/// Prints the target URL of an alias, nothing else, so the output can be piped.
async fn get(service: &UrlService<PgUrlRepository>, alias: &str) -> Result<()> {
    let url = service.resolve(alias).await?;
    println!("{url}");

    Ok(())
}

/// Deletes an alias, asking first unless `skip_confirm` is set.
async fn delete(
    service: &UrlService<PgUrlRepository>,
    alias: &str,
    skip_confirm: bool,
) -> Result<()> {
    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete alias '{alias}'?"))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service.remove(alias).await?;
    println!("{}", "✅ Alias deleted".green().bold());

    Ok(())
}

/// Dispatches database operations.
async fn handle_db_action(
    action: DbAction,
    storage: &PgStorage,
    config: &DatabaseConfig,
) -> Result<()> {
    match action {
        DbAction::Check => {
            storage.ping().await?;
            println!("{}", "✅ Database connection OK".green().bold());
            println!("  {}", config.display_url().bright_black());
        }
        DbAction::Info => {
            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(storage.pool())
                .await?;
            let aliases: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url")
                .fetch_one(storage.pool())
                .await?;

            println!("{}", "🗄️  Database Info".bright_blue().bold());
            println!();
            println!("  Server:  {}", version.bright_black());
            println!("  Aliases: {}", aliases.to_string().bright_green().bold());
        }
    }

    Ok(())
}

/// Prints an expected failure without a backtrace.
fn report(err: &AppError) {
    let label = match err {
        AppError::Validation { .. } => "invalid input".yellow(),
        AppError::NotFound { .. } => "not found".yellow(),
        AppError::Conflict { .. } => "conflict".yellow(),
        AppError::Internal { .. } => "error".red(),
    };

    eprintln!("{} {}: {}", "❌".red(), label.bold(), err.message());
    if err.details().as_object().is_some_and(|d| !d.is_empty()) {
        eprintln!("  {}", err.details().to_string().bright_black());
    }
}
