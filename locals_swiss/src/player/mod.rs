//! Players, their opponent history, and the scoring recurrence.
//!
//! A player's standing is a three-level Swiss tiebreak:
//! - match points (+3 win, +1 draw, +0 loss)
//! - the average pointrate of their real opponents
//! - the average of those opponents' own opponent averages
//!
//! The second and third levels depend on *other* players' stats, so they
//! are recomputed for the whole [`Roster`] at once via
//! [`Roster::recompute_tiebreakers`].

pub mod models;
pub mod roster;
pub mod scoring;

pub use models::{Opponent, Player, PlayerId};
pub use roster::Roster;
pub use scoring::{average_rounded, combined_tiebreaker, pointrate};
