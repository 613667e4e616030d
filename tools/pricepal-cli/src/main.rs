//! PricePal CLI - compare product prices from the terminal.
//!
//! Commands:
//! - `pricepal search` - Search and compare prices, optionally writing the page
//! - `pricepal suggest` - Show suggestions for a partial query
//! - `pricepal type` - Replay typing through the debounced suggestion pipeline
//! - `pricepal interactive` - Prompt-driven search
//! - `pricepal config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ConfigArgs, InteractiveArgs, SearchArgs, SuggestArgs, TypeArgs};

/// PricePal - one search, all prices
#[derive(Parser)]
#[command(name = "pricepal")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Override the product API base URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for a product and compare prices
    Search(SearchArgs),

    /// Show suggestions for a partial query
    Suggest(SuggestArgs),

    /// Type a query keystroke by keystroke with live suggestions
    Type(TypeArgs),

    /// Search interactively
    Interactive(InteractiveArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose)?;

    let output = output::Output::new(cli.verbose, cli.json);

    let mut ctx = context::Context::load(cli.config.as_deref(), output)?;
    ctx.config = ctx.config.with_base_url_override(cli.api_url);

    let result = match cli.command {
        Commands::Search(args) => commands::search::run(args, &ctx).await,
        Commands::Suggest(args) => commands::suggest::run(args, &ctx).await,
        Commands::Type(args) => commands::type_ahead::run(args, &ctx).await,
        Commands::Interactive(args) => commands::interactive::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over the verbosity flag.
fn init_tracing(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "error" };
    let filter = match std::env::var("RUST_LOG") {
        Ok(_) => EnvFilter::from_default_env(),
        Err(_) => EnvFilter::new("warn").add_directive(format!("pricepal={}", level).parse()?),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    Ok(())
}
