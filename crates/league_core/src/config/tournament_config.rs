use crate::error::{LeagueError, Result};
use crate::models::GroupId;
use crate::schedule::MIN_TEAMS;
use serde::{Deserialize, Serialize};

/// Tournament-level limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    /// Smallest accepted field (default: 4, never below 4)
    pub min_teams: usize,
    /// Largest accepted field (default: 20)
    pub max_teams: usize,
    /// Group id stamped on every fixture (default: 1)
    pub group_id: GroupId,
    /// Top places that qualify (default: 2)
    pub qualifying_places: usize,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self { min_teams: MIN_TEAMS, max_teams: 20, group_id: 1, qualifying_places: 2 }
    }
}

impl TournamentConfig {
    pub fn validate(&self) -> Result<()> {
        if self.min_teams < MIN_TEAMS {
            return Err(LeagueError::Config(format!(
                "min_teams {} is below the scheduling minimum of {}",
                self.min_teams, MIN_TEAMS
            )));
        }
        if self.max_teams < self.min_teams {
            return Err(LeagueError::Config(format!(
                "max_teams {} is below min_teams {}",
                self.max_teams, self.min_teams
            )));
        }
        if self.qualifying_places > self.min_teams {
            return Err(LeagueError::Config(format!(
                "qualifying_places {} exceeds min_teams {}",
                self.qualifying_places, self.min_teams
            )));
        }
        Ok(())
    }

    /// Checks a team count against both the scheduling rules and these limits.
    pub fn check_team_count(&self, count: usize) -> Result<()> {
        if count < self.min_teams {
            return Err(LeagueError::invalid_input(format!(
                "tournament needs at least {} teams, got {}",
                self.min_teams, count
            )));
        }
        if count > self.max_teams {
            return Err(LeagueError::invalid_input(format!(
                "tournament cannot have more than {} teams, got {}",
                self.max_teams, count
            )));
        }
        if count % 2 != 0 {
            return Err(LeagueError::invalid_input(format!(
                "tournament needs an even number of teams, got {}",
                count
            )));
        }
        Ok(())
    }
}
