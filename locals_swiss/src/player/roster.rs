//! Arena of every player in a tournament.

use log::debug;
use serde::{Deserialize, Serialize};

use super::models::{Player, PlayerId};

/// Append-only arena of players addressed by [`PlayerId`].
///
/// Players are never removed, so an id stays valid for the lifetime of the
/// roster. Names are not required to be unique.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            players: names
                .into_iter()
                .map(|name| Player::new(name.as_ref()))
                .collect(),
        }
    }

    pub fn push(&mut self, player: Player) -> PlayerId {
        self.players.push(player);
        PlayerId(self.players.len() - 1)
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.0)
    }

    pub fn get_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(id.0)
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        id.0 < self.players.len()
    }

    /// First player registered under `name`. With duplicate names the
    /// later registrations are unreachable by name.
    pub fn find_by_name(&self, name: &str) -> Option<PlayerId> {
        self.players
            .iter()
            .position(|player| player.name() == name)
            .map(PlayerId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players
            .iter()
            .enumerate()
            .map(|(idx, player)| (PlayerId(idx), player))
    }

    pub fn ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        (0..self.players.len()).map(PlayerId)
    }

    /// Players still taking part in pairings.
    pub fn active_ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.iter()
            .filter(|(_, player)| !player.is_dropped())
            .map(|(id, _)| id)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Brings every tiebreaker up to date for `round_nr`.
    ///
    /// Runs three full passes: all pointrates, then all opponent averages,
    /// then all opponents'-opponents averages. Each pass reads a snapshot
    /// of the previous one, never a half-updated roster.
    pub fn recompute_tiebreakers(&mut self, round_nr: u32) {
        for player in &mut self.players {
            player.update_pointrate(round_nr);
        }

        let pointrates: Vec<u32> = self.players.iter().map(Player::pointrate).collect();
        for player in &mut self.players {
            player.update_tiebreaker1(|id| pointrates.get(id.0).copied().unwrap_or(0));
        }

        let tiebreaker1s: Vec<u32> = self.players.iter().map(Player::tiebreaker1).collect();
        for player in &mut self.players {
            player.update_tiebreaker2(|id| tiebreaker1s.get(id.0).copied().unwrap_or(0));
        }

        debug!(
            "recomputed tiebreakers for {} players at round {round_nr}",
            self.players.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Opponent;

    fn pair(roster: &mut Roster, a: PlayerId, b: PlayerId) {
        roster.get_mut(a).unwrap().add_opponent(Opponent::Player(b));
        roster.get_mut(b).unwrap().add_opponent(Opponent::Player(a));
    }

    #[test]
    fn test_push_returns_sequential_ids() {
        let mut roster = Roster::new();
        let a = roster.push(Player::new("a"));
        let b = roster.push(Player::new("b"));
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(roster.len(), 2);
        assert!(roster.contains(b));
        assert!(!roster.contains(PlayerId(2)));
    }

    #[test]
    fn test_find_by_name_returns_first_match() {
        let roster = Roster::from_names(["alice", "bob", "alice"]);
        assert_eq!(roster.find_by_name("alice"), Some(PlayerId(0)));
        assert_eq!(roster.find_by_name("bob"), Some(PlayerId(1)));
        assert_eq!(roster.find_by_name("carol"), None);
    }

    #[test]
    fn test_active_ids_skip_dropped() {
        let mut roster = Roster::from_names(["a", "b", "c"]);
        roster.get_mut(PlayerId(1)).unwrap().drop_out(1);
        let active: Vec<_> = roster.active_ids().collect();
        assert_eq!(active, vec![PlayerId(0), PlayerId(2)]);
    }

    #[test]
    fn test_recompute_runs_passes_in_order() {
        // a beat b, c beat d, then a beat c and b beat d.
        let mut roster = Roster::from_names(["a", "b", "c", "d"]);
        let [a, b, c, d] = [PlayerId(0), PlayerId(1), PlayerId(2), PlayerId(3)];

        pair(&mut roster, a, b);
        pair(&mut roster, c, d);
        roster.get_mut(a).unwrap().add_win(1);
        roster.get_mut(b).unwrap().add_loss(1);
        roster.get_mut(c).unwrap().add_win(1);
        roster.get_mut(d).unwrap().add_loss(1);

        pair(&mut roster, a, c);
        pair(&mut roster, b, d);
        roster.get_mut(a).unwrap().add_win(2);
        roster.get_mut(c).unwrap().add_loss(2);
        roster.get_mut(b).unwrap().add_win(2);
        roster.get_mut(d).unwrap().add_loss(2);

        roster.recompute_tiebreakers(2);

        let rates: Vec<u32> = roster.iter().map(|(_, p)| p.pointrate()).collect();
        assert_eq!(rates, vec![999, 500, 500, 0]);

        // a: avg(b, c) = 500; b: avg(a, d) = 500; c: avg(d, a) = 500; d: avg(c, b) = 500
        let tb1: Vec<u32> = roster.iter().map(|(_, p)| p.tiebreaker1()).collect();
        assert_eq!(tb1, vec![500, 500, 500, 500]);

        let tb2: Vec<u32> = roster.iter().map(|(_, p)| p.tiebreaker2()).collect();
        assert_eq!(tb2, vec![500, 500, 500, 500]);

        assert_eq!(roster.get(a).unwrap().tiebreaker(), 6_500_500);
        assert_eq!(roster.get(d).unwrap().tiebreaker(), 500_500);
    }

    #[test]
    fn test_recompute_round_zero_zeroes_rates() {
        let mut roster = Roster::from_names(["a"]);
        roster.get_mut(PlayerId(0)).unwrap().add_win(1);
        roster.recompute_tiebreakers(0);
        assert_eq!(roster.get(PlayerId(0)).unwrap().pointrate(), 0);
    }
}
