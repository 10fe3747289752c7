//! CLI administration tool for LinkSphere.
//!
//! Provides commands for browsing aliases, viewing statistics and
//! removing aliases without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # List the newest aliases
//! cargo run --bin admin -- list --page 1 --limit 20
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Delete an alias
//! cargo run --bin admin -- delete aB3xY9
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see [`linksphere::config`].

use linksphere::config::{self, Config};
use linksphere::domain::pagination::PageRequest;
use linksphere::infrastructure::persistence::PgLinkRepository;
use linksphere::state::AppState;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing LinkSphere.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// List aliases, newest first
    List {
        /// Page number (1-based)
        #[arg(short, long)]
        page: Option<i64>,

        /// Items per page (max 100)
        #[arg(short, long)]
        limit: Option<i64>,
    },

    /// Show statistics
    Stats,

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
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let pool = PgPool::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    let result = match cli.command {
        Commands::List { page, limit } => {
            list_urls(&state(&pool, &config), PageRequest::new(page, limit)).await
        }
        Commands::Stats => show_stats(&state(&pool, &config)).await,
        Commands::Delete { alias, yes } => delete_url(&state(&pool, &config), &alias, yes).await,
        Commands::Db { action } => handle_db_action(action, &state(&pool, &config)).await,
    };

    pool.close().await;
    result
}

fn state(pool: &PgPool, config: &Config) -> AppState {
    let repository = Arc::new(PgLinkRepository::new(Arc::new(pool.clone())));
    AppState::from_config(repository, config)
}

/// Prints one page of aliases.
///
/// # Output Format
///
/// ```text
/// Aliases (page 1 of 3, 45 total)
///
///   Alias     Clicks  URL
///   ──────────────────────────────────────────────────────────────
///   aB3xY9    12      https://example.com/some/long/path
/// ```
async fn list_urls(state: &AppState, request: PageRequest) -> Result<()> {
    let page = state
        .query_service
        .list(request)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list aliases: {}", e))?;

    println!(
        "{} (page {} of {}, {} total)",
        "Aliases".bright_blue().bold(),
        page.page,
        page.total_pages,
        page.total
    );
    println!();

    if page.items.is_empty() {
        println!("{}", "  No aliases on this page".yellow());
        println!();
        return Ok(());
    }

    println!(
        "  {:<8}  {:<6}  {}",
        "Alias".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(62).bright_black());

    for record in &page.items {
        println!(
            "  {:<8}  {:<6}  {}",
            record.alias.cyan(),
            record.clicks.to_string().bright_green(),
            record.url
        );
    }
    println!();

    Ok(())
}

/// Displays store-wide statistics and the most clicked alias.
async fn show_stats(state: &AppState) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let stats = state
        .query_service
        .stats()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load statistics: {}", e))?;

    println!(
        "  Aliases:   {}",
        stats.total_urls.to_string().bright_green().bold()
    );
    println!(
        "  Clicks:    {}",
        stats.total_clicks.to_string().bright_green().bold()
    );

    match stats.top_link {
        Some(top) => println!(
            "  Top alias: {} ({} clicks) -> {}",
            top.alias.cyan(),
            top.clicks,
            top.url
        ),
        None => println!("  Top alias: {}", "none".bright_black()),
    }
    println!();

    Ok(())
}

/// Deletes an alias after confirmation (default: No).
async fn delete_url(state: &AppState, alias: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "Delete Alias".bright_blue().bold());
    println!();
    println!("  Alias: {}", alias.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this alias?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    state
        .link_service
        .delete(alias)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete alias: {}", e))?;

    println!("{}", "Alias deleted".green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, state: &AppState) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            state
                .query_service
                .ping()
                .await
                .map_err(|e| anyhow::anyhow!("Database check failed: {}", e))?;

            println!("{}", "Database connection OK".green().bold());
        }
    }

    Ok(())
}
