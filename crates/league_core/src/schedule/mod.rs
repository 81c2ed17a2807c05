//! # Fixture generation
//!
//! Builds a single round-robin schedule: `N(N-1)/2` fixtures split into
//! `N-1` rounds of `N/2` games, every team exactly once per round, and no
//! team hosting more than one game more (or fewer) than it travels.
//!
//! The structure is fully deterministic. Only the caller's team order decides
//! which team lands in which slot.

mod circle;

pub use circle::{circle_rounds, HomeAwayLedger};

use crate::error::{LeagueError, Result};
use crate::models::{Fixture, GroupId, Team, TeamId};
use std::collections::{BTreeMap, HashSet};

pub const MIN_TEAMS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureGenerator {
    group_id: GroupId,
}

impl Default for FixtureGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}

impl FixtureGenerator {
    pub fn new(group_id: GroupId) -> Self {
        Self { group_id }
    }

    pub fn group_id(&self) -> GroupId {
        self.group_id
    }

    /// Fixtures ordered round by round.
    ///
    /// Fails with [`LeagueError::InvalidInput`] for fewer than 4 teams, an odd
    /// count, or duplicate team ids.
    pub fn generate(&self, teams: &[Team]) -> Result<Vec<Fixture>> {
        validate_team_count(teams.len())?;

        let mut ids = HashSet::with_capacity(teams.len());
        if let Some(dup) = teams.iter().find(|t| !ids.insert(t.id)) {
            log::warn!("rejecting schedule: duplicate team id {}", dup.id);
            return Err(LeagueError::invalid_input(format!("duplicate team id {}", dup.id)));
        }

        let rounds = circle_rounds(teams.len());
        let mut ledger = HomeAwayLedger::new(teams.len());
        let mut fixtures = Vec::with_capacity(teams.len() * (teams.len() - 1) / 2);

        for (round_index, pairs) in rounds.iter().enumerate() {
            for &(home, away) in pairs {
                ledger.record(home, away);
                fixtures.push(Fixture::new(
                    teams[home].id,
                    teams[away].id,
                    round_index as u32 + 1,
                    self.group_id,
                ));
            }
        }

        debug_assert!(ledger.max_imbalance() <= 1, "home/away imbalance above one");
        log::debug!(
            "generated {} fixtures over {} rounds for group {} (max home/away imbalance {})",
            fixtures.len(),
            rounds.len(),
            self.group_id,
            ledger.max_imbalance()
        );
        Ok(fixtures)
    }
}

pub fn validate_team_count(count: usize) -> Result<()> {
    if count < MIN_TEAMS {
        log::warn!("rejecting schedule: {} teams", count);
        return Err(LeagueError::invalid_input(format!(
            "group must have at least {} teams, got {}",
            MIN_TEAMS, count
        )));
    }
    if count % 2 != 0 {
        log::warn!("rejecting schedule: odd team count {}", count);
        return Err(LeagueError::invalid_input(format!(
            "group must have an even number of teams, got {}",
            count
        )));
    }
    Ok(())
}

/// `(home, away)` game counts per team.
pub fn home_away_counts(fixtures: &[Fixture]) -> BTreeMap<TeamId, (u32, u32)> {
    let mut counts: BTreeMap<TeamId, (u32, u32)> = BTreeMap::new();
    for f in fixtures {
        counts.entry(f.home).or_default().0 += 1;
        counts.entry(f.away).or_default().1 += 1;
    }
    counts
}

pub fn total_rounds(fixtures: &[Fixture]) -> u32 {
    fixtures.iter().map(|f| f.round).max().unwrap_or(0)
}
