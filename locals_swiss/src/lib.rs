//! # Locals Swiss
//!
//! A Swiss-style pairing and scoring engine for card-game locals events.
//!
//! The engine tracks players, pairs each round by current rank, records
//! match outcomes (win, loss, draw, double loss), handles byes and mid-event
//! drops, and derives standings from a three-level tiebreaker.
//!
//! ## Architecture
//!
//! Components, leaf first:
//!
//! - **Player**: points, pointrate, opponent averages, opponent history
//! - **Match**: result state machine over two seats, correctable at any time
//! - **Round**: rank-adjacent pairing and result routing by player or table
//! - **Tournament**: roster arena, round lifecycle, standings and winners
//!
//! Tournament ranks players, Round pairs them into Matches, a Match mutates
//! player stats on every report, and Tournament recomputes the tiebreakers
//! before the next pairing or when standings are requested.
//!
//! The engine performs no I/O. Rendering its text output and persisting
//! state between runs are left to the caller.
//!
//! ## Core Modules
//!
//! - [`player`]: players, the roster arena, scoring arithmetic
//! - [`pairing`]: matches, rounds, tie shuffling
//! - [`tournament`]: orchestration, configuration, standings
//!
//! ## Example
//!
//! ```
//! use locals_swiss::{Tournament, TournamentConfig};
//!
//! let mut tournament =
//!     Tournament::new(TournamentConfig::new("Locals").with_seed(1), ["alice", "bob"]).unwrap();
//! tournament.pair_next_round().unwrap();
//! tournament.report_win("alice").unwrap();
//!
//! assert_eq!(tournament.get_winner().len(), 1);
//! ```

/// Scoring constants.
pub mod constants;

/// Players, roster and tiebreaker arithmetic.
pub mod player;
pub use player::{Opponent, Player, PlayerId, Roster};

/// Matches, rounds and pairing.
pub mod pairing;
pub use pairing::{Match, MatchResult, PairingError, Round, TieShuffler};

/// Tournament orchestration.
pub mod tournament;
pub use tournament::{
    Standings, StandingsEntry, Tournament, TournamentConfig, TournamentError, TournamentResult,
};
