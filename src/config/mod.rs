pub mod toml_config;

pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::domain::model::{HarnessSettings, WorkerMode};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

/// Command line flags. Running with none of them reproduces the plain harness.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "compose-harness")]
#[command(about = "Compose the static and shared components and join a worker thread")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (stderr)
    #[arg(short, long)]
    pub verbose: bool,

    /// Log process CPU and memory per harness phase
    #[arg(long)]
    pub monitor: bool,

    /// Run the worker on the main thread instead of spawning one
    #[arg(long)]
    pub inline_worker: bool,
}

/// Settings after merging CLI flags over the config file over defaults.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub settings: HarnessSettings,
    pub verbose: bool,
    pub log_level: Option<String>,
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn load_file(&self) -> Result<Option<TomlConfig>> {
        match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Ok(Some(file))
            }
            None => Ok(None),
        }
    }

    pub fn resolve(&self) -> Result<ResolvedConfig> {
        let file = self.load_file()?;
        Ok(self.merge(file.as_ref()))
    }

    pub fn merge(&self, file: Option<&TomlConfig>) -> ResolvedConfig {
        let mut settings = file
            .map(TomlConfig::harness_settings)
            .unwrap_or_default();
        if self.inline_worker {
            settings.worker_mode = WorkerMode::Inline;
        }

        ResolvedConfig {
            settings,
            verbose: self.verbose,
            log_level: file.and_then(|f| f.log_level().map(str::to_string)),
            monitor: self.monitor || file.is_some_and(TomlConfig::monitoring_enabled),
        }
    }
}
