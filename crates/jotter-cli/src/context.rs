use anyhow::{Context as _, Result};
use std::path::PathBuf;

use jotter_core::{Config, NoteStore};
use tracing::debug;

use crate::cli::Cli;

/// Application context passed to every command handler.
///
/// The store location and config file are resolved here, once, at startup;
/// handlers take everything they need from the context. The one late
/// lookup is the editor fallback chain, which runs when `edit` launches.
pub struct Context {
    store: NoteStore,
    config: Config,
}

impl Context {
    /// Build the context from parsed CLI arguments.
    ///
    /// The notes directory is taken from `--dir` (clap folds the
    /// `JOTTER_DIR` environment variable into the flag), then from the
    /// config file, then from the built-in default. The config file itself
    /// is optional; a missing file means defaults.
    pub fn new(cli: &Cli) -> Result<Self> {
        let config_path = cli
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from("jotter.toml"));

        let mut config = Config::load(&config_path)
            .with_context(|| format!("failed to load config from {}", config_path.display()))?
            .unwrap_or_default();

        if let Some(dir) = &cli.dir {
            config.store.dir = dir.clone();
        }
        config.validate()?;

        debug!(
            dir = %config.store.dir.display(),
            extension = %config.store.extension,
            "resolved configuration"
        );

        let store = NoteStore::new(config.store.clone());
        Ok(Self { store, config })
    }

    /// The note store for this run
    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    /// Resolved configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
