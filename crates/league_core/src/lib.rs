//! # league_core - Round-Robin Group Stage Simulator
//!
//! Schedules a single round robin, simulates scorelines with a two-sided
//! Poisson model and ranks the group with football tie-break rules.
//!
//! ## Features
//! - Balanced schedules: every team once per round, home/away within one game
//! - Reproducible simulation (same seed = same results)
//! - Full tie-break chain down to head-to-head and team rating
//! - Stepwise tournament driver and a one-shot JSON API

pub mod api;
pub mod config;
pub mod error;
pub mod generator;
pub mod models;
pub mod schedule;
pub mod simulation;
pub mod standings;
pub mod tournament;

// Re-export main API functions
pub use api::{
    simulate_tournament, simulate_tournament_json, TournamentRequest, TournamentResponse,
};
pub use error::{LeagueError, Result};

pub use config::{LeagueConfig, SimulationConfig, TournamentConfig};
pub use generator::{GenerationType, TeamGenerator};
pub use models::{
    Fixture, GroupId, GroupTable, HeadToHeadRecord, Match, MatchOutcome, QualificationStatus,
    RatingTier, Score, Standing, Team, TeamDetails, TeamId, TeamRatings,
};
pub use schedule::FixtureGenerator;
pub use simulation::MatchSimulator;
pub use standings::{SimulationStats, StandingsCalculator};
pub use tournament::{simulate_group, GroupSimulationResult, Tournament, TournamentStatus};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub use api::SCHEMA_VERSION;

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use serde_json::json;

    #[test]
    fn test_basic_tournament() {
        let request = json!({
            "schema_version": 1,
            "seed": 42,
            "team_count": 8,
            "generation": "excellent"
        });

        let result = simulate_tournament_json(&request.to_string());
        assert!(result.is_ok(), "Simulation should succeed");

        let parsed: serde_json::Value = serde_json::from_str(&result.unwrap()).unwrap();
        assert_eq!(parsed["schema_version"], 1);
        assert_eq!(parsed["table"]["standings"].as_array().map(Vec::len), Some(8));
        assert_eq!(parsed["table"]["is_complete"], true);
        assert_eq!(parsed["stats"]["played_matches"], 28);
    }

    #[test]
    fn test_determinism() {
        let request = json!({ "schema_version": 1, "seed": 999, "team_count": 10 }).to_string();
        let first = simulate_tournament_json(&request).unwrap();
        for _ in 0..3 {
            assert_eq!(simulate_tournament_json(&request).unwrap(), first);
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let run = |seed: u64| {
            let request = json!({ "schema_version": 1, "seed": seed, "team_count": 10 });
            simulate_tournament_json(&request.to_string()).unwrap()
        };
        assert_ne!(run(1), run(2));
    }

    #[test]
    fn test_end_to_end_stepwise() {
        let mut rng = ChaCha8Rng::seed_from_u64(2026);
        let teams = TeamGenerator::generate(6, GenerationType::Mixed, &mut rng).unwrap();

        let mut tournament = Tournament::default();
        tournament.initialize(teams).unwrap();
        let simulator = MatchSimulator::default();

        let mut rounds = 0;
        while tournament.has_more_fixtures() {
            let played = tournament.play_round(&simulator, &mut rng).unwrap();
            assert_eq!(played.len(), 3);
            rounds += 1;
        }
        assert_eq!(rounds, 5);

        let table = tournament.current_table();
        assert!(table.is_complete);
        let points: u32 = table.standings.iter().map(|s| s.points).sum();
        let draws = table.played_matches().filter(|m| m.is_draw()).count() as u32;
        assert_eq!(points, 15 * 3 - draws);

        let status = tournament.status();
        assert_eq!(status.current_round, 5);
        assert!(status.is_complete && !status.has_more_matches);
    }
}
