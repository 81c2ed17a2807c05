//! # Team generation
//!
//! Builds a field of distinct clubs with ratings drawn around a base value.
//! All draws come from the caller's RNG, so a seeded RNG gives the same field.

mod pool;

pub use pool::CLUB_NAMES;

use crate::error::{LeagueError, Result};
use crate::models::{Team, TeamDetails, TeamId, TeamRatings};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

pub const MAX_GENERATED_TEAMS: usize = CLUB_NAMES.len();

const RATING_FLOOR: i32 = 30;
const RATING_CEILING: i32 = 99;
const MIXED_BASE: RangeInclusive<u8> = 40..=95;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GenerationType {
    /// Any strength, base rating 40..=95.
    #[default]
    Mixed,
    WorldClass,
    Excellent,
    Good,
}

impl GenerationType {
    /// Range the base rating is drawn from.
    pub fn base_range(&self) -> RangeInclusive<u8> {
        match self {
            GenerationType::Mixed => MIXED_BASE,
            GenerationType::WorldClass => 85..=95,
            GenerationType::Excellent => 75..=84,
            GenerationType::Good => 65..=74,
        }
    }

    /// Spread around the base for attack, midfield, defense, goalkeeper.
    pub fn variances(&self) -> [u8; 4] {
        match self {
            GenerationType::Mixed => [15, 10, 12, 20],
            _ => [8, 8, 8, 10],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationType::Mixed => "mixed",
            GenerationType::WorldClass => "world-class",
            GenerationType::Excellent => "excellent",
            GenerationType::Good => "good",
        }
    }
}

impl fmt::Display for GenerationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GenerationType {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "mixed" => Ok(GenerationType::Mixed),
            "world-class" | "worldclass" => Ok(GenerationType::WorldClass),
            "excellent" => Ok(GenerationType::Excellent),
            "good" => Ok(GenerationType::Good),
            other => Err(LeagueError::invalid_input(format!("unknown generation type '{}'", other))),
        }
    }
}

pub struct TeamGenerator;

impl TeamGenerator {
    /// `count` clubs with ids `1..=count` and unique names from the built-in pool.
    ///
    /// `count` must be even and at most [`MAX_GENERATED_TEAMS`].
    pub fn generate<R: Rng + ?Sized>(
        count: usize,
        kind: GenerationType,
        rng: &mut R,
    ) -> Result<Vec<Team>> {
        if count == 0 || count > MAX_GENERATED_TEAMS {
            return Err(LeagueError::invalid_input(format!(
                "can generate between 2 and {} teams, got {}",
                MAX_GENERATED_TEAMS, count
            )));
        }
        if count % 2 != 0 {
            return Err(LeagueError::invalid_input(format!(
                "team count must be even, got {}",
                count
            )));
        }

        let mut names: Vec<&(&str, &str)> = CLUB_NAMES.iter().collect();
        names.shuffle(rng);
        let mut cities = pool::CITIES;
        cities.shuffle(rng);
        let mut stadiums = pool::STADIUMS;
        stadiums.shuffle(rng);

        let mut teams = Vec::with_capacity(count);
        for (index, &&(name, short_name)) in names.iter().take(count).enumerate() {
            let ratings = Self::ratings(kind, rng);
            let details = TeamDetails {
                city: Some(cities[index % cities.len()].to_string()),
                stadium: Some(stadiums[index % stadiums.len()].to_string()),
                founded_year: Some(rng.gen_range(1880..2000)),
                primary_color: pool::PRIMARY_COLORS.choose(rng).map(|c| c.to_string()),
                secondary_color: pool::SECONDARY_COLORS.choose(rng).map(|c| c.to_string()),
            };
            let team = Team::new(TeamId(index as u32 + 1), name, short_name, ratings)?
                .with_details(details);
            teams.push(team);
        }

        log::debug!("generated {} {} teams", teams.len(), kind);
        Ok(teams)
    }

    /// Draws a base from the type's range, then each sub-rating around it.
    pub fn ratings<R: Rng + ?Sized>(kind: GenerationType, rng: &mut R) -> TeamRatings {
        let base = rng.gen_range(kind.base_range());
        let [attack, midfield, defense, goalkeeper] = kind.variances();
        TeamRatings::new(
            rating_around(base, attack, rng),
            rating_around(base, midfield, rng),
            rating_around(base, defense, rng),
            rating_around(base, goalkeeper, rng),
        )
    }
}

fn rating_around<R: Rng + ?Sized>(base: u8, variance: u8, rng: &mut R) -> u8 {
    let low = (base as i32 - variance as i32).max(RATING_FLOOR);
    let high = (base as i32 + variance as i32).min(RATING_CEILING);
    rng.gen_range(low..=high) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    #[test]
    fn test_pool_short_codes_fit() {
        assert_eq!(CLUB_NAMES.len(), 50);
        assert!(CLUB_NAMES.iter().all(|(_, short)| short.len() <= 4));
        let names: HashSet<_> = CLUB_NAMES.iter().map(|(name, _)| name).collect();
        assert_eq!(names.len(), 50);
    }

    #[test]
    fn test_generate_assigns_ids_and_unique_names() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let teams = TeamGenerator::generate(20, GenerationType::Mixed, &mut rng).unwrap();
        assert_eq!(teams.len(), 20);

        let ids: Vec<u32> = teams.iter().map(|t| t.id.0).collect();
        assert_eq!(ids, (1..=20).collect::<Vec<_>>());

        let names: HashSet<_> = teams.iter().map(|t| t.name.clone()).collect();
        assert_eq!(names.len(), 20);
        assert!(teams.iter().all(|t| t.details.city.is_some() && t.details.stadium.is_some()));
    }

    #[test]
    fn test_generate_whole_pool() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let teams = TeamGenerator::generate(50, GenerationType::Good, &mut rng).unwrap();
        assert_eq!(teams.len(), 50);
    }

    #[test]
    fn test_rejects_bad_counts() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for count in [0, 1, 7, 52] {
            let err = TeamGenerator::generate(count, GenerationType::Mixed, &mut rng).unwrap_err();
            assert!(matches!(err, LeagueError::InvalidInput { .. }), "count={}", count);
        }
    }

    #[test]
    fn test_sub_ratings_stay_in_band() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..2000 {
            let r = TeamGenerator::ratings(GenerationType::Mixed, &mut rng);
            for v in [r.attack, r.midfield, r.defense, r.goalkeeper] {
                assert!((30..=99).contains(&v));
            }
        }
    }

    #[test]
    fn test_tiers_are_ordered_on_average() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mean = |kind: GenerationType, rng: &mut ChaCha8Rng| {
            let teams = TeamGenerator::generate(50, kind, rng).unwrap();
            teams.iter().map(|t| t.overall_rating() as f64).sum::<f64>() / 50.0
        };
        let world = mean(GenerationType::WorldClass, &mut rng);
        let excellent = mean(GenerationType::Excellent, &mut rng);
        let good = mean(GenerationType::Good, &mut rng);

        assert!(world > excellent && excellent > good);
        assert!(world >= 82.0, "world class mean {}", world);
        assert!(good < 74.0, "good mean {}", good);
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = TeamGenerator::generate(8, GenerationType::Mixed, &mut ChaCha8Rng::seed_from_u64(5)).unwrap();
        let b = TeamGenerator::generate(8, GenerationType::Mixed, &mut ChaCha8Rng::seed_from_u64(5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parse_generation_type() {
        assert_eq!("world-class".parse::<GenerationType>().unwrap(), GenerationType::WorldClass);
        assert_eq!("WORLD_CLASS".parse::<GenerationType>().unwrap(), GenerationType::WorldClass);
        assert_eq!("good".parse::<GenerationType>().unwrap(), GenerationType::Good);
        assert!("legendary".parse::<GenerationType>().is_err());
        assert_eq!(GenerationType::Excellent.to_string(), "excellent");
    }
}
