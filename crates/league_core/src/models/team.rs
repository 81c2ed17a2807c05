//! Team value types.
//!
//! A [`Team`] is built once at tournament setup and never mutated afterwards.
//! Its `overall_rating` is always derived from the four sub-ratings, so the
//! aggregate cannot drift away from the skills it summarises.

use crate::error::{LeagueError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MAX_RATING: u8 = 100;
pub const MAX_SHORT_NAME_LEN: usize = 4;

/// Stable team identifier. Assigned before fixture generation and used as the
/// only matching key in fixtures, results and standings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(pub u32);

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Skill sub-ratings, each on a 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRatings {
    pub attack: u8,
    pub midfield: u8,
    pub defense: u8,
    pub goalkeeper: u8,
}

impl TeamRatings {
    pub fn new(attack: u8, midfield: u8, defense: u8, goalkeeper: u8) -> Self {
        Self { attack, midfield, defense, goalkeeper }
    }

    pub fn uniform(rating: u8) -> Self {
        Self::new(rating, rating, rating, rating)
    }

    /// Weighted aggregate: 30% attack, 25% midfield, 25% defense, 20% goalkeeper,
    /// floor-rounded. Integer arithmetic keeps the floor exact.
    pub fn overall(&self) -> u8 {
        let weighted = 30 * self.attack as u32
            + 25 * self.midfield as u32
            + 25 * self.defense as u32
            + 20 * self.goalkeeper as u32;
        (weighted / 100) as u8
    }

    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("attack", self.attack),
            ("midfield", self.midfield),
            ("defense", self.defense),
            ("goalkeeper", self.goalkeeper),
        ];
        for (name, value) in fields {
            if value > MAX_RATING {
                return Err(LeagueError::invalid_input(format!(
                    "{} rating {} is outside 0..={}",
                    name, value, MAX_RATING
                )));
            }
        }
        Ok(())
    }
}

/// Rating band used for generation presets and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatingTier {
    WorldClass,
    Excellent,
    Good,
    Average,
}

impl RatingTier {
    pub fn from_overall(overall: u8) -> Self {
        match overall {
            85..=u8::MAX => RatingTier::WorldClass,
            75..=84 => RatingTier::Excellent,
            65..=74 => RatingTier::Good,
            _ => RatingTier::Average,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RatingTier::WorldClass => "World Class",
            RatingTier::Excellent => "Excellent",
            RatingTier::Good => "Good",
            RatingTier::Average => "Average",
        }
    }
}

/// Descriptive metadata with no influence on simulation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamDetails {
    pub city: Option<String>,
    pub stadium: Option<String>,
    pub founded_year: Option<u16>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TeamData")]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub short_name: String,
    ratings: TeamRatings,
    overall_rating: u8,
    #[serde(default)]
    pub details: TeamDetails,
}

/// Wire shape accepted when deserializing a [`Team`]. Any `overall_rating`
/// present in the input is ignored and recomputed.
#[derive(Debug, Deserialize)]
struct TeamData {
    id: TeamId,
    name: String,
    short_name: String,
    ratings: TeamRatings,
    #[serde(default)]
    details: TeamDetails,
}

impl TryFrom<TeamData> for Team {
    type Error = LeagueError;

    fn try_from(data: TeamData) -> Result<Self> {
        Ok(Team::new(data.id, data.name, data.short_name, data.ratings)?.with_details(data.details))
    }
}

impl Team {
    pub fn new(
        id: TeamId,
        name: impl Into<String>,
        short_name: impl Into<String>,
        ratings: TeamRatings,
    ) -> Result<Self> {
        let name = name.into();
        let short_name = short_name.into();

        if name.trim().is_empty() {
            return Err(LeagueError::invalid_input(format!("team {} has an empty name", id)));
        }
        if short_name.chars().count() > MAX_SHORT_NAME_LEN {
            return Err(LeagueError::invalid_input(format!(
                "short name '{}' is longer than {} characters",
                short_name, MAX_SHORT_NAME_LEN
            )));
        }
        ratings.validate()?;

        Ok(Self {
            id,
            name,
            short_name,
            overall_rating: ratings.overall(),
            ratings,
            details: TeamDetails::default(),
        })
    }

    pub fn with_details(mut self, details: TeamDetails) -> Self {
        self.details = details;
        self
    }

    pub fn ratings(&self) -> TeamRatings {
        self.ratings
    }

    pub fn attack(&self) -> u8 {
        self.ratings.attack
    }

    pub fn midfield(&self) -> u8 {
        self.ratings.midfield
    }

    pub fn defense(&self) -> u8 {
        self.ratings.defense
    }

    pub fn goalkeeper(&self) -> u8 {
        self.ratings.goalkeeper
    }

    pub fn overall_rating(&self) -> u8 {
        self.overall_rating
    }

    pub fn tier(&self) -> RatingTier {
        RatingTier::from_overall(self.overall_rating)
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.short_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overall_is_weighted_floor() {
        assert_eq!(TeamRatings::new(92, 88, 90, 90).overall(), 90);
        assert_eq!(TeamRatings::new(52, 48, 50, 50).overall(), 50);
        assert_eq!(TeamRatings::uniform(70).overall(), 70);
        // 30*81 + 25*80 + 25*80 + 20*80 = 8030 -> 80
        assert_eq!(TeamRatings::new(81, 80, 80, 80).overall(), 80);
    }

    #[test]
    fn test_team_derives_overall() {
        let team = Team::new(TeamId(1), "World Class FC", "WCF", TeamRatings::new(92, 88, 90, 90))
            .unwrap();
        assert_eq!(team.overall_rating(), 90);
        assert_eq!(team.tier(), RatingTier::WorldClass);
    }

    #[test]
    fn test_rejects_long_short_name() {
        let err = Team::new(TeamId(1), "Borussia", "BORUS", TeamRatings::uniform(60)).unwrap_err();
        assert!(matches!(err, LeagueError::InvalidInput { .. }));
    }

    #[test]
    fn test_rejects_rating_above_100() {
        let err = Team::new(TeamId(1), "Overrated", "OVR", TeamRatings::new(101, 50, 50, 50))
            .unwrap_err();
        assert!(err.to_string().contains("attack"));
    }

    #[test]
    fn test_deserialize_recomputes_overall() {
        let json = r#"{
            "id": 7,
            "name": "Good City",
            "short_name": "GDC",
            "ratings": {"attack": 72, "midfield": 68, "defense": 70, "goalkeeper": 70},
            "overall_rating": 99
        }"#;
        let team: Team = serde_json::from_str(json).unwrap();
        assert_eq!(team.id, TeamId(7));
        assert_eq!(team.overall_rating(), 70);
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(RatingTier::from_overall(85), RatingTier::WorldClass);
        assert_eq!(RatingTier::from_overall(84), RatingTier::Excellent);
        assert_eq!(RatingTier::from_overall(75), RatingTier::Excellent);
        assert_eq!(RatingTier::from_overall(74), RatingTier::Good);
        assert_eq!(RatingTier::from_overall(64), RatingTier::Average);
    }
}
