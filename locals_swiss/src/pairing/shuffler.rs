//! Fair ordering of equally ranked players.

use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
use std::cmp::Reverse;

use crate::player::{PlayerId, Roster};

/// Orders players by descending tiebreaker, breaking exact ties at random.
///
/// Candidates are shuffled first and then stable-sorted, so every ordering
/// of a group of tied players is equally likely while the sort itself stays
/// a total order. Seeding makes the outcome reproducible.
#[derive(Debug, Clone)]
pub struct TieShuffler {
    rng: StdRng,
}

impl TieShuffler {
    /// Create a shuffler seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a deterministic shuffler
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Rank `ids` best first by their current tiebreaker in `roster`.
    ///
    /// Ids missing from the roster sort last.
    pub fn rank(&mut self, roster: &Roster, mut ids: Vec<PlayerId>) -> Vec<PlayerId> {
        ids.shuffle(&mut self.rng);
        ids.sort_by_key(|&id| Reverse(roster.get(id).map_or(0, |player| player.tiebreaker())));
        ids
    }
}

impl Default for TieShuffler {
    fn default() -> Self {
        Self::new()
    }
}
