//! Result state machine for a single table.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::{PairingError, PairingResult};
use crate::player::{Opponent, Player, PlayerId, Roster};

/// Which side of the table a participant sits on.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Seat {
    One,
    Two,
}

impl Seat {
    pub fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }
}

/// Outcome of a match. Every reported state can be corrected into any other.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum MatchResult {
    #[default]
    Unplayed,
    Win(Seat),
    Draw,
    DoubleLoss,
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Unplayed => "unplayed",
            Self::Win(Seat::One) => "player 1 won",
            Self::Win(Seat::Two) => "player 2 won",
            Self::Draw => "draw",
            Self::DoubleLoss => "double loss",
        };
        write!(f, "{repr}")
    }
}

/// One pairing of a round.
///
/// The two participants and the round are fixed at creation; only the
/// result changes. Player stats live in the tournament's [`Roster`], so
/// every report takes the roster it mutates.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Match {
    round: u32,
    player1: PlayerId,
    player2: Opponent,
    result: MatchResult,
}

impl Match {
    /// Seats two participants and records them as each other's opponents.
    pub fn pair(
        round: u32,
        player1: PlayerId,
        player2: Opponent,
        roster: &mut Roster,
    ) -> PairingResult<Self> {
        let this = Self {
            round,
            player1,
            player2,
            result: MatchResult::Unplayed,
        };
        this.ensure_resolvable(roster)?;

        if let Some(player) = roster.get_mut(player1) {
            player.add_opponent(player2);
        }
        if let Some(player) = player2.player_id().and_then(|id| roster.get_mut(id)) {
            player.add_opponent(Opponent::Player(player1));
        }

        Ok(this)
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn player1(&self) -> PlayerId {
        self.player1
    }

    pub fn player2(&self) -> Opponent {
        self.player2
    }

    pub fn result(&self) -> MatchResult {
        self.result
    }

    pub fn is_finished(&self) -> bool {
        !matches!(self.result, MatchResult::Unplayed)
    }

    pub fn is_bye(&self) -> bool {
        self.player2.is_bye()
    }

    pub fn contains(&self, player: PlayerId) -> bool {
        self.seat_of(player).is_some()
    }

    pub fn seat_of(&self, player: PlayerId) -> Option<Seat> {
        if self.player1 == player {
            Some(Seat::One)
        } else if self.player2 == Opponent::Player(player) {
            Some(Seat::Two)
        } else {
            None
        }
    }

    /// Winner of the match, if it has one.
    #[must_use]
    pub fn winner(&self) -> Option<Opponent> {
        match self.result {
            MatchResult::Win(seat) => Some(self.occupant(seat)),
            _ => None,
        }
    }

    /// Reports `player` as the winner.
    pub fn report_win(
        &mut self,
        player: PlayerId,
        round_nr: u32,
        roster: &mut Roster,
    ) -> PairingResult<()> {
        let seat = self.validate(player, round_nr, roster)?;
        self.record(MatchResult::Win(seat), roster);
        Ok(())
    }

    /// Reports `player` as the loser; the other side wins.
    pub fn report_lose(
        &mut self,
        player: PlayerId,
        round_nr: u32,
        roster: &mut Roster,
    ) -> PairingResult<()> {
        let seat = self.validate(player, round_nr, roster)?;
        self.record(MatchResult::Win(seat.other()), roster);
        Ok(())
    }

    pub fn report_draw(&mut self, round_nr: u32, roster: &mut Roster) -> PairingResult<()> {
        self.validate_round(round_nr)?;
        self.ensure_resolvable(roster)?;
        self.record(MatchResult::Draw, roster);
        Ok(())
    }

    pub fn report_double_loss(&mut self, round_nr: u32, roster: &mut Roster) -> PairingResult<()> {
        self.validate_round(round_nr)?;
        self.ensure_resolvable(roster)?;
        self.record(MatchResult::DoubleLoss, roster);
        Ok(())
    }

    fn validate(
        &self,
        player: PlayerId,
        round_nr: u32,
        roster: &Roster,
    ) -> PairingResult<Seat> {
        let seat = self
            .seat_of(player)
            .ok_or(PairingError::PlayerNotInMatch { player })?;
        self.validate_round(round_nr)?;
        self.ensure_resolvable(roster)?;
        Ok(seat)
    }

    fn validate_round(&self, round_nr: u32) -> PairingResult<()> {
        if round_nr != self.round {
            return Err(PairingError::RoundMismatch {
                expected: self.round,
                actual: round_nr,
            });
        }
        Ok(())
    }

    fn ensure_resolvable(&self, roster: &Roster) -> PairingResult<()> {
        if !roster.contains(self.player1) {
            return Err(PairingError::UnknownPlayer(self.player1));
        }
        match self.player2 {
            Opponent::Player(id) if !roster.contains(id) => Err(PairingError::UnknownPlayer(id)),
            _ => Ok(()),
        }
    }

    /// Replaces the current result. Undo and redo happen in this one call,
    /// so nobody observes a half-corrected match.
    fn record(&mut self, result: MatchResult, roster: &mut Roster) {
        if self.is_finished() {
            debug!(
                "round {} correcting {} to {}",
                self.round, self.result, result
            );
            self.revert(roster);
        }

        let round = self.round;
        match result {
            MatchResult::Unplayed => {}
            MatchResult::Win(seat) => {
                self.apply(seat, roster, |p| p.add_win(round));
                self.apply(seat.other(), roster, |p| p.add_loss(round));
            }
            MatchResult::Draw => {
                self.apply(Seat::One, roster, |p| p.add_draw(round));
                self.apply(Seat::Two, roster, |p| p.add_draw(round));
            }
            MatchResult::DoubleLoss => {
                self.apply(Seat::One, roster, |p| p.add_loss(round));
                self.apply(Seat::Two, roster, |p| p.add_loss(round));
            }
        }

        debug!(
            "round {} {} vs {}: {}",
            round, self.player1, self.player2, result
        );
        self.result = result;
    }

    fn revert(&mut self, roster: &mut Roster) {
        let round = self.round;
        match self.result {
            MatchResult::Unplayed => {}
            MatchResult::Win(seat) => {
                self.apply(seat, roster, |p| p.remove_win(round));
                self.apply(seat.other(), roster, |p| p.remove_loss(round));
            }
            MatchResult::Draw => {
                self.apply(Seat::One, roster, |p| p.remove_draw(round));
                self.apply(Seat::Two, roster, |p| p.remove_draw(round));
            }
            MatchResult::DoubleLoss => {
                self.apply(Seat::One, roster, |p| p.remove_loss(round));
                self.apply(Seat::Two, roster, |p| p.remove_loss(round));
            }
        }
        self.result = MatchResult::Unplayed;
    }

    fn occupant(&self, seat: Seat) -> Opponent {
        match seat {
            Seat::One => Opponent::Player(self.player1),
            Seat::Two => self.player2,
        }
    }

    /// Applies `update` to whoever sits at `seat`. A bye has no stats.
    fn apply<F>(&self, seat: Seat, roster: &mut Roster, update: F)
    where
        F: FnOnce(&mut Player),
    {
        if let Some(player) = self
            .occupant(seat)
            .player_id()
            .and_then(|id| roster.get_mut(id))
        {
            update(player);
        }
    }
}
