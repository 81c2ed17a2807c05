//! Data model: teams, fixtures, results and the derived table.

pub mod fixture;
pub mod standing;
pub mod team;

pub use fixture::{Fixture, GroupId, Match, MatchOutcome, Score};
pub use standing::{GroupTable, HeadToHeadRecord, QualificationStatus, Standing};
pub use team::{RatingTier, Team, TeamDetails, TeamId, TeamRatings};
