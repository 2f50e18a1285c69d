//! Round pairing and match results.
//!
//! A [`Round`] ranks the active players, seats them two per table and
//! routes result reports to the right [`Match`]. Matches only hold
//! [`PlayerId`](crate::player::PlayerId)s; the stats they change live in
//! the tournament's roster.

pub mod errors;
pub mod matches;
pub mod round;
pub mod shuffler;

pub use errors::{PairingError, PairingResult};
pub use matches::{Match, MatchResult, Seat};
pub use round::{Round, TableNumber};
pub use shuffler::TieShuffler;
