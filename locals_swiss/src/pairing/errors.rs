//! Pairing error types.

use thiserror::Error;

use crate::player::PlayerId;

/// Errors raised by a single match or round.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PairingError {
    /// Result reported for someone who isn't seated at this table
    #[error("player {player} did not participate in this match")]
    PlayerNotInMatch { player: PlayerId },

    /// No table in the round seats this player
    #[error("player {player} is not paired in round {round}")]
    PlayerNotInRound { player: PlayerId, round: u32 },

    /// Table number outside the round
    #[error("table {table} does not exist in round {round}")]
    TableNotFound { table: u32, round: u32 },

    /// Corrections must use the round the match belongs to
    #[error("match belongs to round {expected}, got a report for round {actual}")]
    RoundMismatch { expected: u32, actual: u32 },

    /// Player id that doesn't resolve in the roster
    #[error("invalid game state: unknown player {0}")]
    UnknownPlayer(PlayerId),
}

/// Result type for pairing operations
pub type PairingResult<T> = Result<T, PairingError>;
