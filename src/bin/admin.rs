//! CLI administration tool for url-alias.
//!
//! Manages mappings and the database schema directly, without going through
//! the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create the mapping table
//! cargo run --bin admin -- db init
//!
//! # Map a URL, with or without a custom alias
//! cargo run --bin admin -- link create https://example.com --alias custom
//! cargo run --bin admin -- link create https://example.com
//!
//! # Look up and remove
//! cargo run --bin admin -- link resolve custom
//! cargo run --bin admin -- link delete custom
//! ```
//!
//! # Environment Variables
//!
//! Same database settings as the server (`DATABASE_URL` or `DB_*`), plus
//! `ALIAS_LENGTH` / `ALIAS_MAX_ATTEMPTS` for generated aliases.

use url_alias::application::services::{AliasError, AliasService};
use url_alias::config::{Config, mask_connection_string};
use url_alias::domain::repositories::MappingStore;
use url_alias::infrastructure::persistence::PgMappingStore;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing url-alias.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage mappings
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Mapping subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Map a URL to an alias
    Create {
        /// The long URL
        url: String,

        /// Custom alias (generated if omitted)
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// Print the URL an alias points to
    Resolve { alias: String },

    /// Delete a mapping
    Delete {
        alias: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Create the mapping table and alias index if missing
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?;
    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to {}",
                mask_connection_string(&database_url)
            )
        })?;

    match cli.command {
        Commands::Link { action } => handle_link_action(action, pool).await?,
        Commands::Db { action } => handle_db_action(action, pool).await?,
    }

    Ok(())
}

/// Dispatches mapping commands through the alias service.
async fn handle_link_action(action: LinkAction, pool: PgPool) -> Result<()> {
    let store: Arc<dyn MappingStore> = Arc::new(PgMappingStore::new(Arc::new(pool)));
    let service = AliasService::new(store, Config::alias_policy_from_env()?);

    match action {
        LinkAction::Create { url, alias } => create_link(&service, url, alias).await,
        LinkAction::Resolve { alias } => resolve_link(&service, alias).await,
        LinkAction::Delete { alias, yes } => delete_link(&service, alias, yes).await,
    }
}

async fn create_link(service: &AliasService, url: String, alias: Option<String>) -> Result<()> {
    println!("{}", "🔗 Create Mapping".bright_blue().bold());
    println!();

    match service.create_mapping(&url, alias.as_deref()).await {
        Ok(mapping) => {
            println!("  ID:    {}", mapping.id.to_string().bright_black());
            println!("  Alias: {}", mapping.alias.bright_yellow().bold());
            println!("  URL:   {}", mapping.url.cyan());
            println!();
            println!("{}", "✅ Mapping created".green().bold());
            Ok(())
        }
        Err(AliasError::AliasConflict(alias)) => {
            println!("{}", format!("❌ Alias '{}' is already taken", alias).red());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to create mapping: {}", e)),
    }
}

async fn resolve_link(service: &AliasService, alias: String) -> Result<()> {
    match service.resolve_alias(&alias).await {
        Ok(url) => {
            println!("  {} → {}", alias.bright_yellow(), url.cyan());
            Ok(())
        }
        Err(AliasError::AliasNotFound(_)) => {
            println!("{}", format!("⚠️  Alias '{}' not found", alias).yellow());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to resolve alias: {}", e)),
    }
}

/// Deletes a mapping after confirmation (default: No).
async fn delete_link(service: &AliasService, alias: String, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Delete Mapping".bright_blue().bold());
    println!();

    match service.resolve_alias(&alias).await {
        Ok(url) => println!("  {} → {}", alias.bright_yellow(), url.cyan()),
        Err(AliasError::AliasNotFound(_)) => {
            println!("{}", "⚠️  Alias does not exist, nothing to delete".yellow());
            return Ok(());
        }
        Err(e) => return Err(anyhow::anyhow!("Database error: {}", e)),
    }
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this mapping?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_mapping(&alias)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete mapping: {}", e))?;

    println!("{}", "✅ Mapping deleted".green().bold());
    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(&pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(&pool)
                .await?;

            // Fails when the table has not been created yet.
            let mappings: Option<i64> = sqlx::query_scalar("SELECT COUNT(*) FROM url_mappings")
                .fetch_one(&pool)
                .await
                .ok();

            println!("  PostgreSQL: {}", version.bright_white());
            match mappings {
                Some(count) => println!(
                    "  Mappings:   {}",
                    count.to_string().bright_green().bold()
                ),
                None => println!("  Mappings:   {}", "table not created".yellow()),
            }
            println!();
        }
        DbAction::Init => {
            println!("{}", "🛠  Initializing schema...".bright_blue());

            PgMappingStore::new(Arc::new(pool))
                .initialize()
                .await
                .context("Failed to initialize mapping table")?;

            println!("{}", "✅ Mapping table ready".green().bold());
        }
    }

    Ok(())
}
