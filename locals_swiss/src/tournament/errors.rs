//! Tournament error types.

use thiserror::Error;

use crate::pairing::PairingError;

/// Tournament errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TournamentError {
    /// Name lookup failed
    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    /// Pairing attempted while results are still outstanding
    #[error("Round {0} is not finished yet")]
    RoundNotFinished(u32),

    /// Report attempted before the first pairing
    #[error("No round in progress")]
    NoActiveRound,

    /// Late registration needs at least one paired round
    #[error("Tournament has not started yet")]
    TournamentNotStarted,

    /// The next round would exceed the configured cap
    #[error("Maximum number of rounds reached: {0}")]
    MaxRoundsReached(u32),

    /// Rejected configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Match or round level failure
    #[error(transparent)]
    Pairing(#[from] PairingError),
}

impl TournamentError {
    /// Message suitable for showing to a tournament organizer.
    ///
    /// Internal ids are replaced by a generic description since operators
    /// address players by name.
    pub fn client_message(&self) -> String {
        match self {
            TournamentError::Pairing(PairingError::PlayerNotInMatch { .. })
            | TournamentError::Pairing(PairingError::PlayerNotInRound { .. }) => {
                "Player is not paired in the current round".to_string()
            }
            TournamentError::Pairing(PairingError::TableNotFound { table, .. }) => {
                format!("Table {table} does not exist")
            }
            TournamentError::Pairing(PairingError::UnknownPlayer(_)) => {
                "Internal tournament error".to_string()
            }
            _ => self.to_string(),
        }
    }
}

/// Result type for tournament operations
pub type TournamentResult<T> = Result<T, TournamentError>;
