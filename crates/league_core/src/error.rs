use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeagueError {
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    UnsupportedSchema { found: u8, expected: u8 },

    #[error("Tournament has not been initialized")]
    NotInitialized,

    #[error("Tournament is finished, no fixture is pending")]
    TournamentFinished,

    #[error("Result does not belong to the pending fixture: {0}")]
    FixtureMismatch(String),
}

impl LeagueError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        LeagueError::InvalidInput { reason: reason.into() }
    }

    /// Whether the caller can fix its input and try the same call again.
    pub fn is_recoverable(&self) -> bool {
        match self {
            LeagueError::InvalidInput { .. } => true,
            LeagueError::Config(_) => true,
            LeagueError::Io(_) => true,
            LeagueError::UnsupportedSchema { .. } => true,
            LeagueError::FixtureMismatch(_) => true,
            LeagueError::NotInitialized => true,
            LeagueError::Serialization(_) => false,
            LeagueError::TournamentFinished => false,
        }
    }
}

impl From<serde_yaml::Error> for LeagueError {
    fn from(err: serde_yaml::Error) -> Self {
        LeagueError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LeagueError>;
