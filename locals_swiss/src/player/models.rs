//! Player entity and its opponent history.

use log::debug;
use serde::{Deserialize, Serialize};
use std::{fmt, ops::RangeInclusive};

use super::scoring::{average_rounded, combined_tiebreaker, pointrate};
use crate::constants::{BYE_NAME, POINTS_PER_DRAW, POINTS_PER_LOSS, POINTS_PER_WIN};

/// Stable index of a player inside a tournament's roster.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct PlayerId(pub(crate) usize);

impl PlayerId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Someone a player was paired against.
///
/// Byes are a variant of their own so they can never be mistaken for a
/// real player, whatever that player is called.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Opponent {
    Player(PlayerId),
    Bye,
}

impl Opponent {
    pub fn player_id(self) -> Option<PlayerId> {
        match self {
            Self::Player(id) => Some(id),
            Self::Bye => None,
        }
    }

    pub fn is_bye(self) -> bool {
        matches!(self, Self::Bye)
    }
}

impl fmt::Display for Opponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player(id) => id.fmt(f),
            Self::Bye => f.write_str(BYE_NAME),
        }
    }
}

/// A tournament participant with their score and tiebreaker state.
///
/// The combined tiebreaker is never stored; it is derived from points and
/// the two opponent averages whenever it is read.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Player {
    name: String,
    points: u32,
    /// Points against the maximum obtainable so far, `0..=999`.
    pointrate: u32,
    /// Average pointrate of real opponents.
    tiebreaker1: u32,
    /// Average `tiebreaker1` of real opponents.
    tiebreaker2: u32,
    dropped: bool,
    /// Round number recorded at drop time, used to backfill on return.
    round_dropped: u32,
    opponents: Vec<Opponent>,
}

impl Player {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            points: 0,
            pointrate: 0,
            tiebreaker1: 0,
            tiebreaker2: 0,
            dropped: false,
            round_dropped: 0,
            opponents: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn pointrate(&self) -> u32 {
        self.pointrate
    }

    pub fn tiebreaker1(&self) -> u32 {
        self.tiebreaker1
    }

    pub fn tiebreaker2(&self) -> u32 {
        self.tiebreaker2
    }

    /// Combined sortable tiebreaker. Points always dominate.
    pub fn tiebreaker(&self) -> u64 {
        combined_tiebreaker(self.points, self.tiebreaker1, self.tiebreaker2)
    }

    pub fn is_dropped(&self) -> bool {
        self.dropped
    }

    pub fn round_dropped(&self) -> u32 {
        self.round_dropped
    }

    /// Full opponent history in pairing order, byes included.
    pub fn opponents(&self) -> &[Opponent] {
        &self.opponents
    }

    /// Opponents that count toward the opponent averages.
    pub fn real_opponents(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.opponents.iter().filter_map(|opponent| opponent.player_id())
    }

    pub fn add_opponent(&mut self, opponent: Opponent) {
        self.opponents.push(opponent);
    }

    /// Marks the player as dropped. Dropping twice keeps the first round.
    pub fn drop_out(&mut self, round_nr: u32) {
        if self.dropped {
            return;
        }

        self.dropped = true;
        self.round_dropped = round_nr;
    }

    /// Brings a dropped player back, crediting each missed round as a bye
    /// won or lost.
    ///
    /// Missed rounds are replayed with local indices `1..=missed`, not the
    /// tournament's absolute round numbers.
    pub fn undo_drop(&mut self, round_nr: u32, win_bye: bool) {
        if !self.dropped {
            return;
        }

        self.dropped = false;
        let missed = round_nr.saturating_sub(self.round_dropped);
        self.backfill_byes(1..=missed, win_bye);
    }

    /// Records a bye for every round in `rounds`, as a win or a loss.
    pub(crate) fn backfill_byes(&mut self, rounds: RangeInclusive<u32>, win_bye: bool) {
        for round_nr in rounds {
            self.add_opponent(Opponent::Bye);
            if win_bye {
                self.add_win(round_nr);
            } else {
                self.add_loss(round_nr);
            }
            debug!(
                "{} backfilled with a bye {} for round {round_nr}",
                self.name,
                if win_bye { "win" } else { "loss" }
            );
        }
    }

    pub fn add_win(&mut self, round_nr: u32) {
        self.points += POINTS_PER_WIN;
        self.update_pointrate(round_nr);
    }

    pub fn add_loss(&mut self, round_nr: u32) {
        self.points += POINTS_PER_LOSS;
        self.update_pointrate(round_nr);
    }

    pub fn add_draw(&mut self, round_nr: u32) {
        self.points += POINTS_PER_DRAW;
        self.update_pointrate(round_nr);
    }

    /// Reverts a win reported for `round_nr`; the pointrate goes back to
    /// what it was before that round.
    pub fn remove_win(&mut self, round_nr: u32) {
        self.points = self.points.saturating_sub(POINTS_PER_WIN);
        self.update_pointrate(round_nr.saturating_sub(1));
    }

    pub fn remove_loss(&mut self, round_nr: u32) {
        self.points = self.points.saturating_sub(POINTS_PER_LOSS);
        self.update_pointrate(round_nr.saturating_sub(1));
    }

    pub fn remove_draw(&mut self, round_nr: u32) {
        self.points = self.points.saturating_sub(POINTS_PER_DRAW);
        self.update_pointrate(round_nr.saturating_sub(1));
    }

    pub fn update_pointrate(&mut self, round_nr: u32) {
        self.pointrate = pointrate(self.points, round_nr);
    }

    /// Recomputes the average pointrate of real opponents.
    ///
    /// `pointrate_of` must already reflect the current round for every
    /// opponent, so callers update all pointrates before any tiebreaker1.
    pub fn update_tiebreaker1<F>(&mut self, pointrate_of: F)
    where
        F: Fn(PlayerId) -> u32,
    {
        self.tiebreaker1 = average_rounded(self.real_opponents().map(pointrate_of));
    }

    /// Recomputes the average `tiebreaker1` of real opponents.
    pub fn update_tiebreaker2<F>(&mut self, tiebreaker1_of: F)
    where
        F: Fn(PlayerId) -> u32,
    {
        self.tiebreaker2 = average_rounded(self.real_opponents().map(tiebreaker1_of));
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.name, self.points, self.tiebreaker())
    }
}
