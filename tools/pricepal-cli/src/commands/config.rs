//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, PricePalConfig, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let config = &ctx.config;
    ctx.output.info("[api]");
    ctx.output.kv("base_url", &config.api.base_url);
    ctx.output.kv("connect_timeout_ms", &config.api.connect_timeout_ms.to_string());
    ctx.output.kv("total_timeout_ms", &config.api.total_timeout_ms.to_string());
    if let Some(agent) = &config.api.user_agent {
        ctx.output.kv("user_agent", agent);
    }

    ctx.output.info("[search]");
    ctx.output.kv("debounce_ms", &config.search.debounce_ms.to_string());
    ctx.output.kv("suggestion_limit", &config.search.suggestion_limit.to_string());

    ctx.output.info("[retailers]");
    ctx.output.kv(
        "assignment",
        &format!("{:?}", config.retailers.assignment).to_lowercase(),
    );
    for name in config.directory()?.names() {
        ctx.output.list_item(name);
    }

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (errors, warnings) = check(&ctx.config);

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }
    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");
    Ok(())
}

/// Collect (errors, warnings) for a configuration.
fn check(config: &PricePalConfig) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if !config.api.base_url.starts_with("http://") && !config.api.base_url.starts_with("https://") {
        errors.push(format!("api.base_url '{}' must be an http(s) URL", config.api.base_url));
    }
    if config.api.total_timeout_ms == 0 {
        errors.push("api.total_timeout_ms must be greater than 0".to_string());
    }
    if config.api.connect_timeout_ms > config.api.total_timeout_ms {
        warnings.push("api.connect_timeout_ms exceeds api.total_timeout_ms".to_string());
    }
    if config.search.suggestion_limit == 0 {
        errors.push("search.suggestion_limit must be at least 1".to_string());
    }
    if config.search.debounce_ms < 50 {
        warnings.push(format!(
            "search.debounce_ms {} will send a lookup on nearly every keystroke",
            config.search.debounce_ms
        ));
    }
    if let Err(e) = config.directory() {
        errors.push(format!("{:#}", e));
    }
    for (i, retailer) in config.retailers.entries.iter().enumerate() {
        match &retailer.link_template {
            Some(template) if !template.contains("{query}") => warnings.push(format!(
                "retailers.entries[{}].link_template has no {{query}} placeholder",
                i
            )),
            None => warnings.push(format!(
                "retailers.entries[{}] ({}) has no link_template; its products will link to \"#\"",
                i, retailer.name
            )),
            _ => {}
        }
    }

    (errors, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricepal_catalog::retailer::Retailer;

    #[test]
    fn test_defaults_are_clean() {
        let (errors, warnings) = check(&PricePalConfig::default());
        assert!(errors.is_empty(), "{:?}", errors);
        assert!(warnings.is_empty(), "{:?}", warnings);
    }

    #[test]
    fn test_bad_values_reported() {
        let mut config = PricePalConfig::default();
        config.api.base_url = "ftp://example.com".to_string();
        config.search.suggestion_limit = 0;
        config.search.debounce_ms = 10;

        let (errors, warnings) = check(&config);
        assert_eq!(errors.len(), 2);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_retailer_template_warnings() {
        let mut config = PricePalConfig::default();
        config.retailers.entries = vec![Retailer::new("Croma", "croma.png")];

        let (errors, warnings) = check(&config);
        assert!(errors.is_empty());
        assert!(warnings[0].contains("Croma"));
    }
}
