//! Tournament orchestration for a Swiss locals event.
//!
//! This module provides:
//! - Tournament creation and configuration
//! - Player registration, late entry, drop and return
//! - Round pairing on current rank
//! - Result reporting by player name or table number
//! - Standings and winner computation
//!
//! ## Example
//!
//! ```
//! use locals_swiss::tournament::{Tournament, TournamentConfig};
//!
//! let config = TournamentConfig::new("Friday Locals").with_max_rounds(3).with_seed(7);
//! let mut tournament = Tournament::new(config, ["Yugi", "Kaiba", "Joey"]).unwrap();
//!
//! tournament.pair_next_round().unwrap();
//! for line in tournament.pairings() {
//!     println!("{line}");
//! }
//! ```

pub mod config;
pub mod errors;
pub mod manager;
pub mod standings;

pub use config::TournamentConfig;
pub use errors::{TournamentError, TournamentResult};
pub use manager::Tournament;
pub use standings::{Standings, StandingsEntry};
