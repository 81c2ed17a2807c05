use crate::config::LeagueConfig;
use crate::error::{LeagueError, Result};
use crate::generator::{GenerationType, TeamGenerator};
use crate::models::{GroupTable, QualificationStatus, Team, TeamId};
use crate::simulation::MatchSimulator;
use crate::standings::SimulationStats;
use crate::tournament::simulate_group_from;
use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u8 = 1;

/// Field size used when the request carries neither `teams` nor `team_count`.
pub const DEFAULT_TEAM_COUNT: usize = 4;

#[derive(Debug, Clone, Deserialize)]
pub struct TournamentRequest {
    pub schema_version: u8,
    pub seed: u64,
    /// Explicit field. Takes precedence over `team_count`.
    #[serde(default)]
    pub teams: Option<Vec<Team>>,
    #[serde(default)]
    pub team_count: Option<usize>,
    #[serde(default)]
    pub generation: GenerationType,
    #[serde(default)]
    pub config: Option<LeagueConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentResponse {
    pub schema_version: u8,
    pub seed: u64,
    pub teams: Vec<Team>,
    pub table: GroupTable,
    pub qualification: Vec<(TeamId, QualificationStatus)>,
    pub qualified: Vec<TeamId>,
    pub stats: SimulationStats,
}

/// Runs a complete group from a JSON request and returns the JSON response.
///
/// The seed drives team generation and every match, and fixture `n` is
/// stamped `n` seconds after the Unix epoch, so equal requests produce equal
/// responses byte for byte.
pub fn simulate_tournament_json(request_json: &str) -> Result<String> {
    let request: TournamentRequest = serde_json::from_str(request_json)?;
    let response = simulate_tournament(request)?;
    Ok(serde_json::to_string(&response)?)
}

pub fn simulate_tournament(request: TournamentRequest) -> Result<TournamentResponse> {
    if request.schema_version != SCHEMA_VERSION {
        return Err(LeagueError::UnsupportedSchema {
            found: request.schema_version,
            expected: SCHEMA_VERSION,
        });
    }

    let config = request.config.unwrap_or_default();
    config.validate()?;

    let mut rng = ChaCha8Rng::seed_from_u64(request.seed);
    let teams = match request.teams {
        Some(teams) => teams,
        None => {
            let count = request.team_count.unwrap_or(DEFAULT_TEAM_COUNT);
            TeamGenerator::generate(count, request.generation, &mut rng)?
        }
    };
    config.tournament.check_team_count(teams.len())?;

    log::info!(
        "json request: seed {}, {} teams, group {}",
        request.seed,
        teams.len(),
        config.tournament.group_id
    );

    let simulator = MatchSimulator::new(config.simulation.clone())?;
    let result = simulate_group_from(
        &teams,
        &config.tournament,
        &simulator,
        &mut rng,
        DateTime::<Utc>::UNIX_EPOCH,
    )?;
    let qualified = result.table.qualified_teams(config.tournament.qualifying_places);

    Ok(TournamentResponse {
        schema_version: SCHEMA_VERSION,
        seed: request.seed,
        teams,
        table: result.table,
        qualification: result.qualification,
        qualified,
        stats: result.stats,
    })
}
