//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::config::{PricePalConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// Effective configuration, environment overrides applied.
    pub config: PricePalConfig,
    /// Where the configuration came from, if a file was used.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context: explicit config path, else the nearest config file
    /// walking up from the working directory, else defaults.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => (PricePalConfig::load(path)?, Some(PathBuf::from(path))),
            None => match find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (PricePalConfig::default(), None),
            },
        };

        if let Some(path) = &config_path {
            output.debug(&format!("Using config: {}", path.display()));
        }

        Ok(Self {
            config: config.with_env_overrides(),
            config_path,
            output,
            cwd,
        })
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}

/// Find the nearest config file in `start` or its ancestors.
fn find_config(start: &Path) -> Option<(PricePalConfig, PathBuf)> {
    for dir in start.ancestors() {
        for name in CONFIG_FILE_NAMES {
            let path = dir.join(name);
            if !path.exists() {
                continue;
            }
            match PricePalConfig::load(path.to_str()?) {
                Ok(config) => return Some((config, path)),
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "skipping unreadable config"),
            }
        }
    }
    None
}
