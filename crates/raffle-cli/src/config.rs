//! Raffle configuration: TOML file plus command-line overrides

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use raffle_core::PrizeTier;
use raffle_roster::RosterOptions;
use raffle_state::default_session_path;

/// Complete raffle configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaffleConfig {
    /// Session snapshot location (platform data dir when unset)
    pub store_path: Option<PathBuf>,

    /// Fixed shuffle seed for a reproducible draw
    pub seed: Option<u64>,

    /// Roster sheet layout
    pub roster: RosterOptions,

    /// Prize inventory. Empty means ask the operator at setup.
    pub prizes: Vec<PrizeTier>,
}

/// Default config file location
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("raffle")
        .join("raffle.toml")
}

impl RaffleConfig {
    /// Load from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str).context("invalid raffle config")?;
        config.validate()?;
        Ok(config)
    }

    /// Save to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to serialize raffle config")
    }

    /// Load `path`, or the default location when `None`.
    ///
    /// An explicit path must exist; a missing default file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (default_config_path(), false),
        };

        if !path.exists() {
            if explicit {
                bail!("config file {} does not exist", path.display());
            }
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config =
            Self::from_toml(&text).with_context(|| format!("in config file {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Check prize tiers and roster layout
    pub fn validate(&self) -> Result<()> {
        if self.roster.sheet_name.trim().is_empty() {
            bail!("roster.sheet_name cannot be empty");
        }
        if self.roster.attendance_column == self.roster.name_column {
            bail!("roster.attendance_column and roster.name_column must differ");
        }
        for (i, tier) in self.prizes.iter().enumerate() {
            tier.validate()
                .with_context(|| format!("prize #{} in config", i + 1))?;
        }
        Ok(())
    }

    pub fn store_path(&self) -> PathBuf {
        self.store_path.clone().unwrap_or_else(default_session_path)
    }

    /// Builder: override store path
    pub fn with_store_path(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.store_path = path;
        }
        self
    }

    /// Builder: override sheet name
    pub fn with_sheet(mut self, sheet: Option<String>) -> Self {
        if let Some(sheet) = sheet {
            self.roster.sheet_name = sheet;
        }
        self
    }

    /// Builder: override seed
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}
