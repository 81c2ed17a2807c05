use crate::models::GroupTable;
use serde::{Deserialize, Serialize};

/// Aggregate numbers for a group. Every ratio is 0.0 while nothing is played.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationStats {
    pub total_matches: u32,
    pub played_matches: u32,
    pub total_goals: u32,
    pub average_goals_per_match: f64,
    pub decisive_results: u32,
    pub draws: u32,
    pub home_wins: u32,
    pub away_wins: u32,
    pub decisive_percentage: f64,
    pub draw_percentage: f64,
}

impl SimulationStats {
    pub fn from_table(table: &GroupTable) -> Self {
        let mut played = 0;
        let mut draws = 0;
        let mut home_wins = 0;
        let mut away_wins = 0;

        for m in table.played_matches() {
            played += 1;
            match m.home_goals().cmp(&m.away_goals()) {
                std::cmp::Ordering::Greater => home_wins += 1,
                std::cmp::Ordering::Less => away_wins += 1,
                std::cmp::Ordering::Equal => draws += 1,
            }
        }

        let decisive = home_wins + away_wins;
        Self {
            total_matches: table.matches.len() as u32,
            played_matches: played,
            total_goals: table.total_goals(),
            average_goals_per_match: table.average_goals_per_match(),
            decisive_results: decisive,
            draws,
            home_wins,
            away_wins,
            decisive_percentage: percentage(decisive, played),
            draw_percentage: percentage(draws, played),
        }
    }
}

fn percentage(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}
