//! # Standings
//!
//! Rebuilds a group table from scratch on every call: one zeroed row per team,
//! every played match folded in, then ranked by [`tiebreak::rank`]. Unplayed
//! matches stay in the table's match list but add nothing to the rows.

pub mod stats;
pub mod tiebreak;

pub use stats::SimulationStats;

use crate::models::{GroupId, GroupTable, Match, QualificationStatus, Standing, Team, TeamId};
use std::collections::HashMap;

pub struct StandingsCalculator;

impl StandingsCalculator {
    /// Ranked table for `teams` over `matches`. Never fails; a played match
    /// naming a team outside `teams` is skipped with a warning.
    pub fn calculate(teams: &[Team], matches: &[Match], group_id: GroupId) -> GroupTable {
        let mut standings: Vec<Standing> = teams.iter().map(|t| Standing::new(t.id)).collect();
        let index: HashMap<TeamId, usize> =
            teams.iter().enumerate().map(|(i, t)| (t.id, i)).collect();

        for m in matches.iter().filter(|m| m.is_played()) {
            match (index.get(&m.home()), index.get(&m.away())) {
                (Some(&home), Some(&away)) => {
                    standings[home].record(m.home_goals(), m.away_goals());
                    standings[away].record(m.away_goals(), m.home_goals());
                }
                _ => log::warn!(
                    "group {}: skipping {} vs {}, team not in group",
                    group_id,
                    m.home(),
                    m.away()
                ),
            }
        }

        let ratings: HashMap<TeamId, u8> =
            teams.iter().map(|t| (t.id, t.overall_rating())).collect();
        tiebreak::rank(&mut standings, matches, &ratings);

        for (i, standing) in standings.iter_mut().enumerate() {
            standing.position = i as u32 + 1;
        }

        GroupTable {
            group_id,
            standings,
            matches: matches.to_vec(),
            is_complete: matches.iter().all(Match::is_played),
        }
    }

    /// Status per team in table order, with the top `places` qualifying.
    pub fn qualification_status(
        table: &GroupTable,
        places: usize,
    ) -> Vec<(TeamId, QualificationStatus)> {
        table
            .standings
            .iter()
            .map(|s| (s.team, QualificationStatus::from_position(s.position, places)))
            .collect()
    }
}
