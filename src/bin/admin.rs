//! CLI administration tool for shortly.
//!
//! Talks to the same store as the server, through the same registry, without
//! going over HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! cargo run --bin admin -- shorten https://example.com
//!
//! # Show target and clicks (does not count a click)
//! cargo run --bin admin -- details 1
//!
//! # Resolve like a browser would (counts a click)
//! cargo run --bin admin -- resolve 1
//!
//! # Show the allocation counter
//! cargo run --bin admin -- counter
//!
//! # Convert between counter values and identifiers
//! cargo run --bin admin -- encode 1295
//! cargo run --bin admin -- decode zz
//!
//! # Check store connection
//! cargo run --bin admin -- ping
//! ```
//!
//! # Environment Variables
//!
//! Same store settings as the server (`REDIS_URL` or `REDIS_HOST`/`REDIS_PORT`/...,
//! `STORE_TIMEOUT_MS`). See [`shortly::config`].

use shortly::application::LinkRegistry;
use shortly::config::load_from_env;
use shortly::domain::codec;
use shortly::domain::{KeyValueStore, RegistryError};
use shortly::server::connect_store;
use shortly::utils::url_validator::validate_target_url;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for managing shortly.
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
    /// Allocate (or reuse) a short identifier for a URL
    Shorten {
        /// Absolute http(s) URL
        url: String,
    },

    /// Resolve an identifier to its target, counting a click
    Resolve { short_id: String },

    /// Show target and click count of an identifier
    Details { short_id: String },

    /// Show the allocation counter
    Counter,

    /// Encode a counter value as an identifier
    Encode {
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },

    /// Decode an identifier to its counter value
    Decode { short_id: String },

    /// Check store connection
    Ping,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Pure conversions need no store
    match &cli.command {
        Commands::Encode { value } => return handle_encode(*value),
        Commands::Decode { short_id } => return handle_decode(short_id),
        _ => {}
    }

    let config = load_from_env()?;
    let store = connect_store(&config).await?;

    match cli.command {
        Commands::Shorten { url } => handle_shorten(store, &url).await?,
        Commands::Resolve { short_id } => handle_resolve(store, &short_id).await?,
        Commands::Details { short_id } => handle_details(store, &short_id).await?,
        Commands::Counter => handle_counter(store).await?,
        Commands::Ping => handle_ping(store).await?,
        Commands::Encode { .. } | Commands::Decode { .. } => {}
    }

    Ok(())
}

async fn handle_shorten(store: Arc<dyn KeyValueStore>, url: &str) -> Result<()> {
    validate_target_url(url).with_context(|| format!("Refusing to shorten '{}'", url))?;

    let registry = LinkRegistry::new(store);
    let short_id = registry
        .shorten(url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

    println!("{}", "✅ Shortened".green().bold());
    println!("  Target: {}", url.cyan());
    println!("  ID:     {}", short_id.bright_yellow().bold());

    Ok(())
}

async fn handle_resolve(store: Arc<dyn KeyValueStore>, short_id: &str) -> Result<()> {
    let registry = LinkRegistry::new(store);

    match registry.resolve(short_id).await {
        Ok(target) => {
            println!("{} -> {}", short_id.bright_yellow(), target.cyan());
            Ok(())
        }
        Err(e) => report_registry_error(short_id, e),
    }
}

/// Prints link details.
///
/// # Output Format
///
/// ```text
/// 🔗 /1
///   Target: http://example.com
///   Clicks: 3
/// ```
async fn handle_details(store: Arc<dyn KeyValueStore>, short_id: &str) -> Result<()> {
    let registry = LinkRegistry::new(store);

    match registry.get_details(short_id).await {
        Ok(details) => {
            println!("{}", format!("🔗 /{}", details.short_id).bright_blue().bold());
            println!("  Target: {}", details.target_url.cyan());
            println!(
                "  Clicks: {}",
                details.click_count.to_string().bright_white().bold()
            );
            Ok(())
        }
        Err(e) => report_registry_error(short_id, e),
    }
}

async fn handle_counter(store: Arc<dyn KeyValueStore>) -> Result<()> {
    let registry = LinkRegistry::new(store);
    let value = registry
        .allocated_count()
        .await
        .map_err(|e| anyhow::anyhow!("Store error: {}", e))?;

    println!("{}", "📊 Allocation counter".bright_blue().bold());
    println!(
        "  Identifiers issued: {}",
        value.to_string().bright_white().bold()
    );

    if value > 0 {
        println!("  Last identifier:    {}", codec::encode(value)?.bright_yellow());
    }

    Ok(())
}

async fn handle_ping(store: Arc<dyn KeyValueStore>) -> Result<()> {
    if store.health_check().await {
        println!("{}", "✅ Store reachable".green().bold());
        Ok(())
    } else {
        anyhow::bail!("Store PING failed")
    }
}

fn handle_encode(value: i64) -> Result<()> {
    println!("{}", codec::encode(value)?);
    Ok(())
}

fn handle_decode(short_id: &str) -> Result<()> {
    println!("{}", codec::decode(short_id)?);
    Ok(())
}

fn report_registry_error(short_id: &str, err: RegistryError) -> Result<()> {
    match err {
        RegistryError::NotFound { .. } => {
            println!("{} {}", "❌ No such short link:".red(), short_id);
            std::process::exit(1);
        }
        other => Err(anyhow::anyhow!("Store error: {}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_accepts_negative_value() {
        let cli = Cli::try_parse_from(["admin", "encode", "-1"]).unwrap();

        assert!(matches!(cli.command, Commands::Encode { value: -1 }));
        assert!(handle_encode(-1).is_err());
    }

    #[test]
    fn test_encode_parses_positive_value() {
        let cli = Cli::try_parse_from(["admin", "encode", "1295"]).unwrap();

        assert!(matches!(cli.command, Commands::Encode { value: 1295 }));
    }
}
