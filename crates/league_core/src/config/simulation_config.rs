//! Match model calibration.

use crate::error::{LeagueError, Result};
use serde::{Deserialize, Serialize};

/// Tunable constants of the Poisson match model. The defaults are an
/// empirical calibration checked by the statistical tests in `simulation`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    // === Effective strength ===
    /// Attack weight (default: 0.4)
    pub attack_weight: f64,
    /// Midfield weight (default: 0.3)
    pub midfield_weight: f64,
    /// Defense weight (default: 0.2)
    pub defense_weight: f64,
    /// Goalkeeper weight (default: 0.1)
    pub goalkeeper_weight: f64,
    /// Flat bonus for the home side (default: 3.0)
    pub home_advantage: f64,

    // === Quality bonus ===
    /// Overall rating that earns the large bonus (default: 85)
    pub elite_threshold: u8,
    pub elite_bonus: f64,
    /// Overall rating that earns the small bonus (default: 75)
    pub excellent_threshold: u8,
    pub excellent_bonus: f64,

    /// Half-width of the uniform jitter added to strength (default: 1.0)
    pub jitter: f64,
    pub min_strength: f64,
    pub max_strength: f64,

    // === Expected goals ===
    /// Lower clamp on the opposing defense rating before dividing (default: 30)
    pub defense_floor: u8,
    pub min_expected_goals: f64,
    pub max_expected_goals: f64,
    /// Multiplier applied to the curve output before clamping (default: 1.0)
    pub expected_goals_scale: f64,

    /// Hard cap on goals per side (default: 10)
    pub max_goals: u8,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            attack_weight: 0.4,
            midfield_weight: 0.3,
            defense_weight: 0.2,
            goalkeeper_weight: 0.1,
            home_advantage: 3.0,

            elite_threshold: 85,
            elite_bonus: 2.0,
            excellent_threshold: 75,
            excellent_bonus: 1.0,

            jitter: 1.0,
            min_strength: 30.0,
            max_strength: 100.0,

            defense_floor: 30,
            min_expected_goals: 0.2,
            max_expected_goals: 5.0,
            expected_goals_scale: 1.0,

            max_goals: 10,
        }
    }
}

impl SimulationConfig {
    pub fn realistic() -> Self {
        Self::default()
    }

    /// More open games: curve output scaled up by a quarter.
    pub fn high_scoring() -> Self {
        Self { expected_goals_scale: 1.25, ..Self::default() }
    }

    /// No strength jitter. Goals are still Poisson draws from the injected RNG.
    pub fn deterministic() -> Self {
        Self { jitter: 0.0, ..Self::default() }
    }

    pub fn validate(&self) -> Result<()> {
        let finite = [
            self.attack_weight,
            self.midfield_weight,
            self.defense_weight,
            self.goalkeeper_weight,
            self.home_advantage,
            self.elite_bonus,
            self.excellent_bonus,
            self.jitter,
            self.min_strength,
            self.max_strength,
            self.min_expected_goals,
            self.max_expected_goals,
            self.expected_goals_scale,
        ];
        if finite.iter().any(|v| !v.is_finite()) {
            return Err(LeagueError::Config("simulation values must be finite".to_string()));
        }

        let weights = [
            self.attack_weight,
            self.midfield_weight,
            self.defense_weight,
            self.goalkeeper_weight,
        ];
        if weights.iter().any(|w| *w < 0.0) {
            return Err(LeagueError::Config("strength weights must be non-negative".to_string()));
        }
        if self.home_advantage < 0.0 || self.elite_bonus < 0.0 || self.excellent_bonus < 0.0 {
            return Err(LeagueError::Config("bonuses must be non-negative".to_string()));
        }
        if self.excellent_threshold > self.elite_threshold {
            return Err(LeagueError::Config(format!(
                "excellent_threshold {} is above elite_threshold {}",
                self.excellent_threshold, self.elite_threshold
            )));
        }
        if self.jitter < 0.0 {
            return Err(LeagueError::Config("jitter must be non-negative".to_string()));
        }
        if self.min_strength <= 0.0 || self.min_strength > self.max_strength {
            return Err(LeagueError::Config(format!(
                "strength band [{}, {}] is invalid",
                self.min_strength, self.max_strength
            )));
        }
        if self.defense_floor == 0 {
            return Err(LeagueError::Config("defense_floor must be at least 1".to_string()));
        }
        if self.min_expected_goals < 0.0 || self.min_expected_goals > self.max_expected_goals {
            return Err(LeagueError::Config(format!(
                "expected goals band [{}, {}] is invalid",
                self.min_expected_goals, self.max_expected_goals
            )));
        }
        if self.expected_goals_scale <= 0.0 {
            return Err(LeagueError::Config("expected_goals_scale must be positive".to_string()));
        }
        Ok(())
    }
}
