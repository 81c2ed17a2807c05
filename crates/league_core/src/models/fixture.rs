use super::team::TeamId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type GroupId = u32;

/// Points awarded per result.
pub const POINTS_WIN: u32 = 3;
pub const POINTS_DRAW: u32 = 1;
pub const POINTS_LOSS: u32 = 0;

/// A scheduled pairing. `round` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fixture {
    pub home: TeamId,
    pub away: TeamId,
    pub round: u32,
    pub group_id: GroupId,
}

impl Fixture {
    pub fn new(home: TeamId, away: TeamId, round: u32, group_id: GroupId) -> Self {
        Self { home, away, round, group_id }
    }

    pub fn involves(&self, team: TeamId) -> bool {
        self.home == team || self.away == team
    }

    /// True when this fixture is between `a` and `b`, in either direction.
    pub fn is_between(&self, a: TeamId, b: TeamId) -> bool {
        (self.home == a && self.away == b) || (self.home == b && self.away == a)
    }

    pub fn opponent_of(&self, team: TeamId) -> Option<TeamId> {
        if self.home == team {
            Some(self.away)
        } else if self.away == team {
            Some(self.home)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub home: u8,
    pub away: u8,
}

impl Score {
    pub fn new(home: u8, away: u8) -> Self {
        Self { home, away }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    Win,
    Draw,
    Loss,
}

impl MatchOutcome {
    pub fn from_goals(scored: u8, conceded: u8) -> Self {
        match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => MatchOutcome::Win,
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
            std::cmp::Ordering::Less => MatchOutcome::Loss,
        }
    }

    pub fn points(&self) -> u32 {
        match self {
            MatchOutcome::Win => POINTS_WIN,
            MatchOutcome::Draw => POINTS_DRAW,
            MatchOutcome::Loss => POINTS_LOSS,
        }
    }
}

/// A fixture together with its (possibly absent) result.
///
/// Unplayed matches always carry a 0-0 score and no timestamp. A result is
/// attached by building a new value with [`Match::with_result`], never by
/// mutating the pending one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    #[serde(flatten)]
    fixture: Fixture,
    home_goals: u8,
    away_goals: u8,
    is_played: bool,
    played_at: Option<DateTime<Utc>>,
}

impl Match {
    pub fn unplayed(fixture: Fixture) -> Self {
        Self { fixture, home_goals: 0, away_goals: 0, is_played: false, played_at: None }
    }

    pub fn played(fixture: Fixture, score: Score, played_at: DateTime<Utc>) -> Self {
        Self {
            fixture,
            home_goals: score.home,
            away_goals: score.away,
            is_played: true,
            played_at: Some(played_at),
        }
    }

    pub fn with_result(&self, score: Score, played_at: DateTime<Utc>) -> Self {
        Self::played(self.fixture, score, played_at)
    }

    pub fn fixture(&self) -> &Fixture {
        &self.fixture
    }

    pub fn home(&self) -> TeamId {
        self.fixture.home
    }

    pub fn away(&self) -> TeamId {
        self.fixture.away
    }

    pub fn round(&self) -> u32 {
        self.fixture.round
    }

    pub fn group_id(&self) -> GroupId {
        self.fixture.group_id
    }

    pub fn home_goals(&self) -> u8 {
        self.home_goals
    }

    pub fn away_goals(&self) -> u8 {
        self.away_goals
    }

    pub fn score(&self) -> Option<Score> {
        self.is_played.then(|| Score::new(self.home_goals, self.away_goals))
    }

    pub fn is_played(&self) -> bool {
        self.is_played
    }

    pub fn played_at(&self) -> Option<DateTime<Utc>> {
        self.played_at
    }

    pub fn total_goals(&self) -> u32 {
        if self.is_played {
            self.home_goals as u32 + self.away_goals as u32
        } else {
            0
        }
    }

    pub fn winner(&self) -> Option<TeamId> {
        if !self.is_played {
            return None;
        }
        match MatchOutcome::from_goals(self.home_goals, self.away_goals) {
            MatchOutcome::Win => Some(self.fixture.home),
            MatchOutcome::Loss => Some(self.fixture.away),
            MatchOutcome::Draw => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        self.is_played && self.home_goals == self.away_goals
    }

    pub fn home_points(&self) -> u32 {
        self.outcome_for(self.fixture.home).map_or(0, |o| o.points())
    }

    pub fn away_points(&self) -> u32 {
        self.outcome_for(self.fixture.away).map_or(0, |o| o.points())
    }

    /// Goals `(scored, conceded)` from `team`'s point of view. `None` when the
    /// match is unplayed or `team` is not part of it.
    pub fn goals_for(&self, team: TeamId) -> Option<(u8, u8)> {
        if !self.is_played {
            return None;
        }
        if team == self.fixture.home {
            Some((self.home_goals, self.away_goals))
        } else if team == self.fixture.away {
            Some((self.away_goals, self.home_goals))
        } else {
            None
        }
    }

    pub fn outcome_for(&self, team: TeamId) -> Option<MatchOutcome> {
        self.goals_for(team).map(|(scored, conceded)| MatchOutcome::from_goals(scored, conceded))
    }

    /// "2 - 1" once played, "vs" before.
    pub fn score_line(&self) -> String {
        if self.is_played {
            format!("{} - {}", self.home_goals, self.away_goals)
        } else {
            "vs".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixture() -> Fixture {
        Fixture::new(TeamId(1), TeamId(2), 1, 1)
    }

    fn kickoff() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn test_unplayed_has_no_result() {
        let m = Match::unplayed(fixture());
        assert!(!m.is_played());
        assert_eq!((m.home_goals(), m.away_goals()), (0, 0));
        assert_eq!(m.winner(), None);
        assert!(!m.is_draw());
        assert_eq!(m.home_points(), 0);
        assert_eq!(m.away_points(), 0);
        assert_eq!(m.score_line(), "vs");
        assert_eq!(m.goals_for(TeamId(1)), None);
    }

    #[test]
    fn test_with_result_leaves_pending_untouched() {
        let pending = Match::unplayed(fixture());
        let played = pending.with_result(Score::new(2, 1), kickoff());

        assert!(!pending.is_played());
        assert!(played.is_played());
        assert_eq!(played.fixture(), pending.fixture());
        assert_eq!(played.winner(), Some(TeamId(1)));
        assert_eq!(played.home_points(), 3);
        assert_eq!(played.away_points(), 0);
        assert_eq!(played.score_line(), "2 - 1");
        assert_eq!(played.played_at(), Some(kickoff()));
    }

    #[test]
    fn test_draw_points() {
        let m = Match::played(fixture(), Score::new(1, 1), kickoff());
        assert!(m.is_draw());
        assert_eq!(m.home_points(), 1);
        assert_eq!(m.away_points(), 1);
        assert_eq!(m.outcome_for(TeamId(2)), Some(MatchOutcome::Draw));
    }

    #[test]
    fn test_goals_for_is_side_aware() {
        let m = Match::played(fixture(), Score::new(0, 3), kickoff());
        assert_eq!(m.goals_for(TeamId(1)), Some((0, 3)));
        assert_eq!(m.goals_for(TeamId(2)), Some((3, 0)));
        assert_eq!(m.goals_for(TeamId(9)), None);
        assert_eq!(m.outcome_for(TeamId(2)), Some(MatchOutcome::Win));
    }

    #[test]
    fn test_fixture_is_between_either_direction() {
        let f = fixture();
        assert!(f.is_between(TeamId(1), TeamId(2)));
        assert!(f.is_between(TeamId(2), TeamId(1)));
        assert!(!f.is_between(TeamId(1), TeamId(3)));
        assert_eq!(f.opponent_of(TeamId(2)), Some(TeamId(1)));
        assert_eq!(f.opponent_of(TeamId(3)), None);
    }
}
