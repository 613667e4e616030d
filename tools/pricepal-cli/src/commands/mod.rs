//! CLI command implementations.

pub mod config;
pub mod interactive;
pub mod search;
pub mod suggest;
pub mod type_ahead;

use clap::{Args, Subcommand};

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// What to search for.
    pub query: String,

    /// Also write the storefront page to this file.
    #[arg(long, value_name = "FILE")]
    pub html: Option<String>,

    /// Include the suggestions dropdown in the written page.
    #[arg(long, requires = "html")]
    pub with_suggestions: bool,
}

/// Arguments for the suggest command.
#[derive(Args)]
pub struct SuggestArgs {
    /// Partial query; blank shows popular searches.
    #[arg(default_value = "")]
    pub query: String,

    /// Show only popular searches, skipping the lookup.
    #[arg(long)]
    pub popular: bool,
}

/// Arguments for the type command.
#[derive(Args)]
pub struct TypeArgs {
    /// Text to type, one character at a time.
    pub text: String,

    /// Delay between keystrokes in milliseconds.
    #[arg(short, long, default_value_t = 80)]
    pub interval_ms: u64,

    /// Override the configured debounce in milliseconds.
    #[arg(long)]
    pub debounce_ms: Option<u64>,

    /// Stop after suggestions; don't submit the search.
    #[arg(long)]
    pub no_submit: bool,
}

/// Arguments for the interactive command.
#[derive(Args)]
pub struct InteractiveArgs {
    /// Start with this query instead of prompting.
    pub query: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration.
    Show,
    /// Create a pricepal.toml in the current directory.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
    /// Check the configuration for problems.
    Validate,
}
