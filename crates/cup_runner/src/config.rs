//! League configuration

use anyhow::{bail, Context, Result};
use cup_core::{ScheduleConfig, ROUND_LENGTH};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Default location of the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "league.toml";

/// Where the league's data lives and how cups are scheduled
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LeagueConfig {
    /// Display name for reports
    pub name: String,
    /// One team per line
    pub teams_file: PathBuf,
    /// Weekly `points:hits` table
    pub weeks_file: PathBuf,
    /// Gameweek deadlines, `<week>: <YYYY-MM-DD>, <HH:MM>` per line
    pub deadlines_file: PathBuf,
    /// Directory holding `tournament_<n>.csv`
    pub schedule_dir: PathBuf,
    /// Number of cups generated per season
    pub cups: u32,
    pub schedule: ScheduleConfig,
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            name: "Mini League".to_string(),
            teams_file: PathBuf::from("teams.txt"),
            weeks_file: PathBuf::from("weeks.csv"),
            deadlines_file: PathBuf::from("deadlines.txt"),
            schedule_dir: PathBuf::from("."),
            cups: 5,
            schedule: ScheduleConfig::default(),
        }
    }
}

impl LeagueConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("Failed to parse league config")?;
        config.validate()?;
        Ok(config)
    }

    /// A cup spans `ROUND_LENGTH` weeks, so its schedule cannot have more rounds
    pub fn validate(&self) -> Result<()> {
        if self.schedule.rounds > ROUND_LENGTH {
            bail!(
                "schedule.rounds is {} but a cup only spans {} weeks",
                self.schedule.rounds,
                ROUND_LENGTH
            );
        }
        Ok(())
    }

    /// Load configuration from a file, falling back to defaults if it does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("Invalid config: {}", path.display()))
    }

    /// Relative paths in the config are taken relative to `base`
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        for path in [
            &mut self.teams_file,
            &mut self.weeks_file,
            &mut self.deadlines_file,
            &mut self.schedule_dir,
        ] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
        self
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
