//! # Match simulation
//!
//! Two-sided Poisson model:
//! 1. effective strength per side (weighted ratings, home advantage, quality
//!    bonus, jitter, clamp)
//! 2. expected goals from strength against the opposing defense rating
//! 3. independent Poisson draws per side, capped
//!
//! Every random draw comes from the caller's RNG, in a fixed order (home
//! jitter, away jitter, home goals, away goals), so a seeded RNG reproduces
//! the same scorelines.

pub mod poisson;
pub mod strength;

use crate::config::SimulationConfig;
use crate::error::Result;
use crate::models::{Fixture, Match, Score, Team};
use chrono::{DateTime, Utc};
use rand::Rng;

#[derive(Debug, Clone, Default)]
pub struct MatchSimulator {
    config: SimulationConfig,
}

impl MatchSimulator {
    /// Fails with [`LeagueError::Config`](crate::LeagueError::Config) when the
    /// config would not produce a valid strength or expected-goals band.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Scoreline only. `home` plays with home advantage.
    pub fn score<R: Rng + ?Sized>(&self, home: &Team, away: &Team, rng: &mut R) -> Score {
        let home_strength = strength::effective_strength(home, true, &self.config, rng);
        let away_strength = strength::effective_strength(away, false, &self.config, rng);

        let home_xg = strength::expected_goals(home_strength, away.defense(), &self.config);
        let away_xg = strength::expected_goals(away_strength, home.defense(), &self.config);

        let home_goals = poisson::sample_goals(home_xg, self.config.max_goals, rng);
        let away_goals = poisson::sample_goals(away_xg, self.config.max_goals, rng);

        log::debug!(
            "{} {:.1} (xG {:.2}) vs {} {:.1} (xG {:.2}) -> {}-{}",
            home.short_name,
            home_strength,
            home_xg,
            away.short_name,
            away_strength,
            away_xg,
            home_goals,
            away_goals
        );

        Score::new(home_goals, away_goals)
    }

    /// Played match for a one-off pairing (round 1, group 0), stamped now.
    pub fn simulate<R: Rng + ?Sized>(&self, home: &Team, away: &Team, rng: &mut R) -> Match {
        self.simulate_at(home, away, rng, Utc::now())
    }

    /// As [`simulate`](Self::simulate) with a caller-chosen timestamp, which
    /// makes the whole value reproducible.
    pub fn simulate_at<R: Rng + ?Sized>(
        &self,
        home: &Team,
        away: &Team,
        rng: &mut R,
        played_at: DateTime<Utc>,
    ) -> Match {
        let fixture = Fixture::new(home.id, away.id, 1, 0);
        Match::played(fixture, self.score(home, away, rng), played_at)
    }

    /// Plays a scheduled match. `home`/`away` must be the fixture's teams.
    pub fn play<R: Rng + ?Sized>(
        &self,
        pending: &Match,
        home: &Team,
        away: &Team,
        rng: &mut R,
        played_at: DateTime<Utc>,
    ) -> Match {
        debug_assert_eq!(pending.home(), home.id);
        debug_assert_eq!(pending.away(), away.id);
        pending.with_result(self.score(home, away, rng), played_at)
    }
}
