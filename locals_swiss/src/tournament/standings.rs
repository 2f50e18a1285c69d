//! Ranked standings listing.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::STANDINGS_EPSILON;
use crate::player::Player;

/// One row of the standings.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct StandingsEntry {
    /// Position, shared with the row above when `shared_rank` is set
    pub rank: usize,
    /// Tied with the previous row on tiebreaker
    pub shared_rank: bool,
    pub name: String,
    pub points: u32,
    pub tiebreaker: u64,
}

impl fmt::Display for StandingsEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Shared ranks are only printed on the first row of the group.
        if !self.shared_rank {
            write!(f, "{}", self.rank)?;
        }
        write!(f, "\t{}\t{}\t{}", self.name, self.points, self.tiebreaker)
    }
}

/// Standings in rank order.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Standings {
    entries: Vec<StandingsEntry>,
}

impl Standings {
    /// Builds standings from players already sorted best first.
    ///
    /// The rank counter advances on every row, but a row within
    /// [`STANDINGS_EPSILON`] of the previous group's tiebreaker reuses that
    /// group's rank.
    pub fn from_ranked<'a, I>(players: I) -> Self
    where
        I: IntoIterator<Item = &'a Player>,
    {
        let mut entries = Vec::new();
        let mut group: Option<(f64, usize)> = None;

        for (idx, player) in players.into_iter().enumerate() {
            let tiebreaker = player.tiebreaker() as f64;
            let (rank, shared_rank) = match group {
                Some((group_tiebreaker, rank))
                    if (group_tiebreaker - tiebreaker).abs() < STANDINGS_EPSILON =>
                {
                    (rank, true)
                }
                _ => {
                    group = Some((tiebreaker, idx + 1));
                    (idx + 1, false)
                }
            };

            entries.push(StandingsEntry {
                rank,
                shared_rank,
                name: player.name().to_string(),
                points: player.points(),
                tiebreaker: player.tiebreaker(),
            });
        }

        Self { entries }
    }

    pub fn entries(&self) -> &[StandingsEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Text lines `{rank}\t{name}\t{points}\t{tiebreaker}`.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for Standings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}
