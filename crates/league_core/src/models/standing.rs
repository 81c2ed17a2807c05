use super::fixture::{GroupId, Match, MatchOutcome};
use super::team::TeamId;
use serde::{Deserialize, Serialize};

/// One team's aggregated record. Always rebuilt from the match list, never
/// patched in place across calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub team: TeamId,
    pub position: u32,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub points: u32,
}

impl Standing {
    pub fn new(team: TeamId) -> Self {
        Self {
            team,
            position: 0,
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            points: 0,
        }
    }

    pub fn goal_difference(&self) -> i32 {
        self.goals_for as i32 - self.goals_against as i32
    }

    pub fn record(&mut self, scored: u8, conceded: u8) {
        let outcome = MatchOutcome::from_goals(scored, conceded);
        self.played += 1;
        self.goals_for += scored as u32;
        self.goals_against += conceded as u32;
        self.points += outcome.points();
        match outcome {
            MatchOutcome::Win => self.won += 1,
            MatchOutcome::Draw => self.drawn += 1,
            MatchOutcome::Loss => self.lost += 1,
        }
    }
}

/// Mini-table restricted to the played matches between two teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadToHeadRecord {
    pub team_a: TeamId,
    pub team_b: TeamId,
    pub a_points: u32,
    pub b_points: u32,
    pub a_goals: u32,
    pub b_goals: u32,
    pub matches_played: u32,
}

impl HeadToHeadRecord {
    pub fn between(team_a: TeamId, team_b: TeamId, matches: &[Match]) -> Self {
        let mut record = Self {
            team_a,
            team_b,
            a_points: 0,
            b_points: 0,
            a_goals: 0,
            b_goals: 0,
            matches_played: 0,
        };

        for m in matches.iter().filter(|m| m.is_played() && m.fixture().is_between(team_a, team_b)) {
            if let (Some((a_scored, b_scored)), Some(a_outcome), Some(b_outcome)) =
                (m.goals_for(team_a), m.outcome_for(team_a), m.outcome_for(team_b))
            {
                record.a_goals += a_scored as u32;
                record.b_goals += b_scored as u32;
                record.a_points += a_outcome.points();
                record.b_points += b_outcome.points();
                record.matches_played += 1;
            }
        }

        record
    }

    pub fn a_goal_difference(&self) -> i32 {
        self.a_goals as i32 - self.b_goals as i32
    }

    pub fn b_goal_difference(&self) -> i32 {
        -self.a_goal_difference()
    }

    /// Points, then goal difference, then goals scored. `None` when level.
    pub fn winner(&self) -> Option<TeamId> {
        let key_a = (self.a_points, self.a_goal_difference(), self.a_goals);
        let key_b = (self.b_points, self.b_goal_difference(), self.b_goals);
        match key_a.cmp(&key_b) {
            std::cmp::Ordering::Greater => Some(self.team_a),
            std::cmp::Ordering::Less => Some(self.team_b),
            std::cmp::Ordering::Equal => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualificationStatus {
    QualifiedFirst,
    QualifiedSecond,
    /// Qualified from third place or lower, when more than two places go through.
    Qualified { position: u32 },
    Eliminated { position: u32 },
}

impl QualificationStatus {
    /// Status of the team finishing `position` when the top `places` go through.
    pub fn from_position(position: u32, places: usize) -> Self {
        if position as usize > places {
            return QualificationStatus::Eliminated { position };
        }
        match position {
            1 => QualificationStatus::QualifiedFirst,
            2 => QualificationStatus::QualifiedSecond,
            _ => QualificationStatus::Qualified { position },
        }
    }

    pub fn is_qualified(&self) -> bool {
        !matches!(self, QualificationStatus::Eliminated { .. })
    }

    pub fn label(&self) -> String {
        match self {
            QualificationStatus::QualifiedFirst => "1st place, qualified".to_string(),
            QualificationStatus::QualifiedSecond => "2nd place, qualified".to_string(),
            QualificationStatus::Qualified { position } => {
                format!("{} place, qualified", ordinal(*position))
            }
            QualificationStatus::Eliminated { position } => {
                format!("{}, eliminated", ordinal(*position))
            }
        }
    }
}

fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

/// Ranked table for one group, plus the full match list it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupTable {
    pub group_id: GroupId,
    pub standings: Vec<Standing>,
    pub matches: Vec<Match>,
    pub is_complete: bool,
}

impl GroupTable {
    pub fn standing_for(&self, team: TeamId) -> Option<&Standing> {
        self.standings.iter().find(|s| s.team == team)
    }

    pub fn position_of(&self, team: TeamId) -> Option<u32> {
        self.standing_for(team).map(|s| s.position)
    }

    pub fn qualified_teams(&self, places: usize) -> Vec<TeamId> {
        self.standings.iter().take(places).map(|s| s.team).collect()
    }

    pub fn eliminated_teams(&self, places: usize) -> Vec<TeamId> {
        self.standings.iter().skip(places).map(|s| s.team).collect()
    }

    pub fn played_matches(&self) -> impl Iterator<Item = &Match> {
        self.matches.iter().filter(|m| m.is_played())
    }

    pub fn total_goals(&self) -> u32 {
        self.played_matches().map(Match::total_goals).sum()
    }

    /// 0.0 when nothing has been played yet.
    pub fn average_goals_per_match(&self) -> f64 {
        let played = self.played_matches().count();
        if played == 0 {
            0.0
        } else {
            self.total_goals() as f64 / played as f64
        }
    }

    pub fn head_to_head(&self, a: TeamId, b: TeamId) -> HeadToHeadRecord {
        HeadToHeadRecord::between(a, b, &self.matches)
    }
}
