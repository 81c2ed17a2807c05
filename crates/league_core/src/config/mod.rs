//! # Configuration
//!
//! All tuning constants live here so calibration changes never touch the
//! algorithms.
//!
//! ```rust
//! use league_core::config::{LeagueConfig, SimulationConfig};
//!
//! let config = LeagueConfig::default();
//! assert_eq!(config.tournament.max_teams, 20);
//! let open_games = SimulationConfig::high_scoring();
//! assert!(open_games.expected_goals_scale > 1.0);
//! ```

mod simulation_config;
mod tournament_config;

pub use simulation_config::SimulationConfig;
pub use tournament_config::TournamentConfig;

use crate::error::{LeagueError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LeagueConfig {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub tournament: TournamentConfig,
}

impl LeagueConfig {
    /// Load from a `.yaml`/`.yml` or `.json` file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();

        let config = match extension.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Self::from_yaml_str(&raw)?,
            "json" => Self::from_json_str(&raw)?,
            other => {
                return Err(LeagueError::Config(format!(
                    "unsupported config extension '{}' for {}",
                    other,
                    path.display()
                )))
            }
        };
        log::info!("loaded league config from {}", path.display());
        Ok(config)
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(raw).map_err(|e| LeagueError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.simulation.validate()?;
        self.tournament.validate()
    }
}
