//! # Tournament orchestration
//!
//! [`Tournament`] owns the field, the fixture-ordered match list and a cursor
//! pointing at the next unplayed slot. Everything a caller asks about (round,
//! progress, table) is derived from those three on demand.
//!
//! [`simulate_group`] runs a whole group in one call for callers that do not
//! need to step through it.

use crate::config::TournamentConfig;
use crate::error::{LeagueError, Result};
use crate::models::{GroupId, GroupTable, Match, QualificationStatus, Team, TeamId};
use crate::schedule::FixtureGenerator;
use crate::simulation::MatchSimulator;
use crate::standings::{SimulationStats, StandingsCalculator};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Progress snapshot for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentStatus {
    pub current_round: u32,
    pub total_rounds: u32,
    pub matches_played: usize,
    pub total_matches: usize,
    pub is_complete: bool,
    pub has_more_matches: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tournament {
    config: TournamentConfig,
    teams: Vec<Team>,
    matches: Vec<Match>,
    cursor: usize,
}

impl Tournament {
    pub fn new(config: TournamentConfig) -> Self {
        Self { config, teams: Vec::new(), matches: Vec::new(), cursor: 0 }
    }

    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    /// Schedules a fresh round robin for `teams`, discarding any previous
    /// state. On error the tournament is left untouched.
    pub fn initialize(&mut self, teams: Vec<Team>) -> Result<()> {
        self.config.check_team_count(teams.len())?;
        let fixtures = FixtureGenerator::new(self.config.group_id).generate(&teams)?;

        log::info!(
            "tournament initialized: {} teams, {} fixtures, group {}",
            teams.len(),
            fixtures.len(),
            self.config.group_id
        );

        self.matches = fixtures.into_iter().map(Match::unplayed).collect();
        self.teams = teams;
        self.cursor = 0;
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        !self.matches.is_empty()
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    /// Every slot in fixture order, played or not.
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn next_fixture(&self) -> Option<&Match> {
        self.matches.get(self.cursor)
    }

    pub fn has_more_fixtures(&self) -> bool {
        self.cursor < self.matches.len()
    }

    /// Round of the next fixture; the last round once everything is played
    /// and 1 before initialization.
    pub fn current_round(&self) -> u32 {
        if !self.is_initialized() {
            return 1;
        }
        self.next_fixture().map(Match::round).unwrap_or_else(|| self.total_rounds())
    }

    pub fn total_rounds(&self) -> u32 {
        self.matches.last().map(Match::round).unwrap_or(0)
    }

    pub fn played_count(&self) -> usize {
        self.cursor
    }

    pub fn is_complete(&self) -> bool {
        self.is_initialized() && !self.has_more_fixtures()
    }

    /// Stores a played result in the pending slot and advances the cursor.
    pub fn record_result(&mut self, result: Match) -> Result<()> {
        if !self.is_initialized() {
            return Err(LeagueError::NotInitialized);
        }
        let pending = self.matches.get(self.cursor).ok_or(LeagueError::TournamentFinished)?;

        if pending.fixture() != result.fixture() {
            return Err(LeagueError::FixtureMismatch(format!(
                "expected {} vs {} (round {}), got {} vs {} (round {})",
                pending.home(),
                pending.away(),
                pending.round(),
                result.home(),
                result.away(),
                result.round()
            )));
        }
        if !result.is_played() {
            return Err(LeagueError::invalid_input("result has not been played"));
        }

        log::debug!(
            "round {}: {} {} {}",
            result.round(),
            result.home(),
            result.score_line(),
            result.away()
        );
        self.matches[self.cursor] = result;
        self.cursor += 1;

        if !self.has_more_fixtures() {
            log::info!("tournament complete after {} matches", self.matches.len());
        }
        Ok(())
    }

    /// Simulates and records the pending fixture, stamped now.
    pub fn play_next<R: Rng + ?Sized>(
        &mut self,
        simulator: &MatchSimulator,
        rng: &mut R,
    ) -> Result<Match> {
        self.play_next_at(simulator, rng, Utc::now())
    }

    pub fn play_next_at<R: Rng + ?Sized>(
        &mut self,
        simulator: &MatchSimulator,
        rng: &mut R,
        played_at: DateTime<Utc>,
    ) -> Result<Match> {
        if !self.is_initialized() {
            return Err(LeagueError::NotInitialized);
        }
        let pending = self.next_fixture().ok_or(LeagueError::TournamentFinished)?;
        let home = self.lookup(pending.home())?;
        let away = self.lookup(pending.away())?;

        let played = simulator.play(pending, home, away, rng, played_at);
        self.record_result(played.clone())?;
        Ok(played)
    }

    /// Plays every remaining fixture of the current round.
    pub fn play_round<R: Rng + ?Sized>(
        &mut self,
        simulator: &MatchSimulator,
        rng: &mut R,
    ) -> Result<Vec<Match>> {
        let round = self.next_fixture().map(Match::round).ok_or(if self.is_initialized() {
            LeagueError::TournamentFinished
        } else {
            LeagueError::NotInitialized
        })?;

        let mut played = Vec::new();
        while self.next_fixture().map(Match::round) == Some(round) {
            played.push(self.play_next(simulator, rng)?);
        }
        Ok(played)
    }

    /// Plays everything left and returns the final table.
    pub fn play_all<R: Rng + ?Sized>(
        &mut self,
        simulator: &MatchSimulator,
        rng: &mut R,
    ) -> Result<GroupTable> {
        if !self.is_initialized() {
            return Err(LeagueError::NotInitialized);
        }
        while self.has_more_fixtures() {
            self.play_next(simulator, rng)?;
        }
        Ok(self.current_table())
    }

    pub fn current_table(&self) -> GroupTable {
        StandingsCalculator::calculate(&self.teams, &self.matches, self.config.group_id)
    }

    /// Qualification for the current table under the configured place count.
    pub fn qualification(&self) -> Vec<(TeamId, QualificationStatus)> {
        StandingsCalculator::qualification_status(
            &self.current_table(),
            self.config.qualifying_places,
        )
    }

    pub fn status(&self) -> TournamentStatus {
        TournamentStatus {
            current_round: self.current_round(),
            total_rounds: self.total_rounds(),
            matches_played: self.played_count(),
            total_matches: self.matches.len(),
            is_complete: self.is_complete(),
            has_more_matches: self.has_more_fixtures(),
        }
    }

    /// Drops the field and every result, keeping the configuration.
    pub fn reset(&mut self) {
        log::info!("tournament reset");
        self.teams.clear();
        self.matches.clear();
        self.cursor = 0;
    }

    fn lookup(&self, id: TeamId) -> Result<&Team> {
        self.team(id)
            .ok_or_else(|| LeagueError::FixtureMismatch(format!("team {} is not in the field", id)))
    }
}

/// Outcome of [`simulate_group`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSimulationResult {
    pub table: GroupTable,
    pub qualification: Vec<(TeamId, QualificationStatus)>,
    pub stats: SimulationStats,
}

/// Schedules, plays and ranks a whole group in one go. The default number of
/// places qualify.
pub fn simulate_group<R: Rng + ?Sized>(
    teams: &[Team],
    group_id: GroupId,
    simulator: &MatchSimulator,
    rng: &mut R,
) -> Result<GroupSimulationResult> {
    let config = TournamentConfig { group_id, ..TournamentConfig::default() };
    simulate_group_from(teams, &config, simulator, rng, Utc::now())
}

/// As [`simulate_group`] under `config`, with the n-th fixture stamped
/// `kickoff + n` seconds.
pub fn simulate_group_from<R: Rng + ?Sized>(
    teams: &[Team],
    config: &TournamentConfig,
    simulator: &MatchSimulator,
    rng: &mut R,
    kickoff: DateTime<Utc>,
) -> Result<GroupSimulationResult> {
    let group_id = config.group_id;
    let fixtures = FixtureGenerator::new(group_id).generate(teams)?;

    let mut matches = Vec::with_capacity(fixtures.len());
    for (slot, fixture) in fixtures.into_iter().enumerate() {
        let home = find_team(teams, fixture.home)?;
        let away = find_team(teams, fixture.away)?;
        let pending = Match::unplayed(fixture);
        let at = kickoff + Duration::seconds(slot as i64);
        matches.push(simulator.play(&pending, home, away, rng, at));
    }

    let table = StandingsCalculator::calculate(teams, &matches, group_id);
    let qualification = StandingsCalculator::qualification_status(&table, config.qualifying_places);
    let stats = SimulationStats::from_table(&table);

    log::info!(
        "group {} simulated: {} matches, {} goals",
        group_id,
        stats.played_matches,
        stats.total_goals
    );
    Ok(GroupSimulationResult { table, qualification, stats })
}

fn find_team(teams: &[Team], id: TeamId) -> Result<&Team> {
    teams
        .iter()
        .find(|t| t.id == id)
        .ok_or_else(|| LeagueError::FixtureMismatch(format!("team {} is not in the field", id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Score, TeamRatings};
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn field(n: u32) -> Vec<Team> {
        (1..=n)
            .map(|i| {
                Team::new(
                    TeamId(i),
                    format!("Club {}", i),
                    format!("C{}", i),
                    TeamRatings::uniform(50 + (i % 10) as u8 * 4),
                )
                .unwrap()
            })
            .collect()
    }

    fn started(n: u32) -> Tournament {
        let mut t = Tournament::default();
        t.initialize(field(n)).unwrap();
        t
    }

    #[test]
    fn test_uninitialized_state() {
        let t = Tournament::default();
        assert!(!t.is_initialized());
        assert_eq!(t.current_round(), 1);
        assert_eq!(t.total_rounds(), 0);
        assert!(!t.is_complete());
        assert!(!t.has_more_fixtures());
        assert!(t.next_fixture().is_none());
    }

    #[test]
    fn test_initialize_schedules_everything() {
        let t = started(6);
        assert_eq!(t.matches().len(), 15);
        assert_eq!(t.total_rounds(), 5);
        assert_eq!(t.current_round(), 1);
        assert!(t.matches().iter().all(|m| !m.is_played()));

        let status = t.status();
        assert_eq!(status.total_matches, 15);
        assert_eq!(status.matches_played, 0);
        assert!(status.has_more_matches);
        assert!(!status.is_complete);
    }

    #[test]
    fn test_initialize_rejects_bad_fields() {
        let mut t = Tournament::default();
        assert!(matches!(t.initialize(field(3)), Err(LeagueError::InvalidInput { .. })));
        assert!(matches!(t.initialize(field(22)), Err(LeagueError::InvalidInput { .. })));
        assert!(!t.is_initialized());
    }

    #[test]
    fn test_record_result_before_initialize() {
        let mut t = Tournament::default();
        let m = Match::unplayed(crate::models::Fixture::new(TeamId(1), TeamId(2), 1, 1));
        assert!(matches!(t.record_result(m), Err(LeagueError::NotInitialized)));
    }

    #[test]
    fn test_record_result_checks_pairing() {
        let mut t = started(4);
        let at = Utc.timestamp_opt(0, 0).unwrap();
        let pending = t.next_fixture().unwrap().clone();

        let wrong = pending.fixture().opponent_of(pending.home()).unwrap();
        let swapped = crate::models::Fixture::new(wrong, pending.home(), pending.round(), 1);
        let err = t.record_result(Match::played(swapped, Score::new(1, 0), at)).unwrap_err();
        assert!(matches!(err, LeagueError::FixtureMismatch(_)));

        assert!(t.record_result(pending.clone()).is_err());
        assert_eq!(t.played_count(), 0);

        t.record_result(pending.with_result(Score::new(2, 2), at)).unwrap();
        assert_eq!(t.played_count(), 1);
        assert!(t.matches()[0].is_played());
    }

    #[test]
    fn test_play_round_stays_within_round() {
        let mut t = started(8);
        let sim = MatchSimulator::default();
        let mut rng = ChaCha8Rng::seed_from_u64(11);

        let first = t.play_round(&sim, &mut rng).unwrap();
        assert_eq!(first.len(), 4);
        assert!(first.iter().all(|m| m.round() == 1 && m.is_played()));
        assert_eq!(t.current_round(), 2);
    }

    #[test]
    fn test_play_all_completes() {
        let mut t = started(6);
        let sim = MatchSimulator::default();
        let mut rng = ChaCha8Rng::seed_from_u64(12);

        let table = t.play_all(&sim, &mut rng).unwrap();
        assert!(table.is_complete);
        assert!(t.is_complete());
        assert_eq!(t.current_round(), 5);
        assert_eq!(t.played_count(), 15);
        assert!(matches!(t.play_next(&sim, &mut rng), Err(LeagueError::TournamentFinished)));

        let played: u32 = table.standings.iter().map(|s| s.played).sum();
        assert_eq!(played, 30);
    }

    #[test]
    fn test_table_is_derived_mid_tournament() {
        let mut t = started(4);
        let sim = MatchSimulator::default();
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        t.play_next(&sim, &mut rng).unwrap();

        let table = t.current_table();
        assert!(!table.is_complete);
        assert_eq!(table.standings.len(), 4);
        assert_eq!(table.played_matches().count(), 1);
    }

    #[test]
    fn test_reset_clears_state() {
        let mut t = started(4);
        let sim = MatchSimulator::default();
        let mut rng = ChaCha8Rng::seed_from_u64(14);
        t.play_next(&sim, &mut rng).unwrap();

        t.reset();
        assert!(!t.is_initialized());
        assert!(t.teams().is_empty());
        assert_eq!(t.played_count(), 0);
        assert!(matches!(t.play_all(&sim, &mut rng), Err(LeagueError::NotInitialized)));
    }

    #[test]
    fn test_simulate_group_is_reproducible() {
        let sim = MatchSimulator::default();
        let kickoff = Utc.timestamp_opt(0, 0).unwrap();
        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);

        let config = TournamentConfig { group_id: 2, ..TournamentConfig::default() };
        let first = simulate_group_from(&field(4), &config, &sim, &mut a, kickoff).unwrap();
        let second = simulate_group_from(&field(4), &config, &sim, &mut b, kickoff).unwrap();
        assert_eq!(first, second);
        assert!(first.table.is_complete);
        assert_eq!(first.qualification.len(), 4);
        assert_eq!(first.stats.played_matches, 6);
        assert!(first.table.matches.iter().all(|m| m.group_id() == 2));
    }

    #[test]
    fn test_simulate_group_matches_stepwise_tournament() {
        let sim = MatchSimulator::default();
        let kickoff = Utc.timestamp_opt(0, 0).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let config = TournamentConfig { qualifying_places: 1, ..TournamentConfig::default() };
        let batch = simulate_group_from(&field(4), &config, &sim, &mut rng, kickoff).unwrap();
        assert_eq!(batch.qualification.iter().filter(|(_, s)| s.is_qualified()).count(), 1);

        let mut t = started(4);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut slot = 0;
        while t.has_more_fixtures() {
            t.play_next_at(&sim, &mut rng, kickoff + Duration::seconds(slot)).unwrap();
            slot += 1;
        }
        assert_eq!(t.current_table(), batch.table);
        assert_eq!(
            t.qualification().iter().filter(|(_, s)| s.is_qualified()).count(),
            2
        );
    }

    #[test]
    fn test_qualification_uses_configured_places() {
        let config = TournamentConfig { qualifying_places: 3, ..TournamentConfig::default() };
        let mut t = Tournament::new(config);
        t.initialize(field(6)).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        t.play_all(&MatchSimulator::default(), &mut rng).unwrap();

        let statuses = t.qualification();
        let table = t.current_table();
        let qualified: Vec<TeamId> =
            statuses.iter().filter(|(_, s)| s.is_qualified()).map(|(id, _)| *id).collect();
        assert_eq!(qualified, table.qualified_teams(3));
        assert_eq!(statuses[2].1, QualificationStatus::Qualified { position: 3 });
        assert_eq!(statuses[3].1, QualificationStatus::Eliminated { position: 4 });
    }
}
