//! Tournament orchestration: roster, round lifecycle, standings.

use log::{debug, info, warn};

use super::config::TournamentConfig;
use super::errors::{TournamentError, TournamentResult};
use super::standings::Standings;
use crate::pairing::{PairingResult, Round, TableNumber, TieShuffler};
use crate::player::{Player, PlayerId, Roster};

/// A Swiss event for one locals night.
///
/// Owns every player and the current round. All mutation goes through
/// `&mut self`, so reports, pairings and roster changes on one tournament
/// are serialized by construction.
#[derive(Debug, Clone)]
pub struct Tournament {
    config: TournamentConfig,
    roster: Roster,
    current_round: Option<Round>,
    shuffler: TieShuffler,
    // Ranks standings and winners; pairing draws never come from here.
    display_shuffler: TieShuffler,
}

impl Tournament {
    /// Create a tournament from a configuration and the initial player names
    pub fn new<I, S>(config: TournamentConfig, players: I) -> TournamentResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        config.validate()?;

        let shuffler = config.seed.map_or_else(TieShuffler::new, TieShuffler::seeded);
        let display_shuffler = config
            .seed
            .map(|seed| seed.wrapping_add(1))
            .map_or_else(TieShuffler::new, TieShuffler::seeded);
        let roster = Roster::from_names(players);
        info!(
            "created tournament {} with {} players",
            config.name,
            roster.len()
        );

        Ok(Self {
            config,
            roster,
            current_round: None,
            shuffler,
            display_shuffler,
        })
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    pub fn max_rounds(&self) -> Option<u32> {
        self.config.max_rounds
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Players in registration order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.roster.iter().map(|(_, player)| player)
    }

    /// First player registered under `name`.
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.roster
            .find_by_name(name)
            .and_then(|id| self.roster.get(id))
    }

    pub fn current_round(&self) -> Option<&Round> {
        self.current_round.as_ref()
    }

    /// Number of the current round, 0 before the first pairing.
    pub fn round_nr(&self) -> u32 {
        self.current_round.as_ref().map_or(0, Round::number)
    }

    /// Registers a player. Once a round exists the player is added late,
    /// with every past round backfilled as a bye.
    pub fn add_player(&mut self, name: &str, win_bye: bool) -> PlayerId {
        let round_nr = self.round_nr();
        if round_nr > 0 {
            return self.push_late(name, round_nr, win_bye);
        }

        debug!("registered {name}");
        self.roster.push(Player::new(name))
    }

    /// Registers a player after pairings started, crediting rounds
    /// `1..=round_nr` as bye wins or losses.
    pub fn add_player_late(&mut self, name: &str, win_bye: bool) -> TournamentResult<PlayerId> {
        let round_nr = self.round_nr();
        if round_nr == 0 {
            return Err(TournamentError::TournamentNotStarted);
        }

        Ok(self.push_late(name, round_nr, win_bye))
    }

    pub fn add_player_range<I, S>(&mut self, names: I, win_bye: bool) -> Vec<PlayerId>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| self.add_player(name.as_ref(), win_bye))
            .collect()
    }

    pub fn drop_player(&mut self, name: &str) -> TournamentResult<()> {
        let round_nr = self.round_nr();
        let player = self.player_mut(name)?;
        player.drop_out(round_nr);
        info!("{name} dropped in round {round_nr}");
        Ok(())
    }

    /// Brings a dropped player back; missed rounds count as byes.
    pub fn undo_drop(&mut self, name: &str, win_bye: bool) -> TournamentResult<()> {
        let round_nr = self.round_nr();
        let player = self.player_mut(name)?;
        let was_dropped = player.is_dropped();
        player.undo_drop(round_nr, win_bye);
        if was_dropped {
            info!("{name} returned in round {round_nr}");
        }
        Ok(())
    }

    /// Pairs the next round from the current ranking.
    ///
    /// Fails if the current round still has open tables or the cap is
    /// reached; in both cases nothing changes.
    pub fn pair_next_round(&mut self) -> TournamentResult<&Round> {
        if let Some(round) = self.current_round.as_ref().filter(|round| !round.is_finished()) {
            warn!("cannot pair: round {} is not finished", round.number());
            return Err(TournamentError::RoundNotFinished(round.number()));
        }

        let next = self.round_nr() + 1;
        if self.config.exceeds_max_rounds(next) {
            warn!("cannot pair round {next}: cap is {:?}", self.config.max_rounds);
            return Err(TournamentError::MaxRoundsReached(next));
        }

        // Rates are measured against the round about to be played.
        self.roster.recompute_tiebreakers(next);
        let round = Round::pair(next, &mut self.roster, &mut self.shuffler)?;
        Ok(&*self.current_round.insert(round))
    }

    pub fn report_win(&mut self, name: &str) -> TournamentResult<()> {
        let player = self.resolve(name)?;
        self.with_round(|round, roster| round.report_win(player, roster))
    }

    pub fn report_lose(&mut self, name: &str) -> TournamentResult<()> {
        let player = self.resolve(name)?;
        self.with_round(|round, roster| round.report_lose(player, roster))
    }

    /// Reports a draw at the table seating `name`.
    pub fn report_draw(&mut self, name: &str) -> TournamentResult<()> {
        let player = self.resolve(name)?;
        self.with_round(|round, roster| round.report_draw(player, roster))
    }

    pub fn report_draw_at(&mut self, table: TableNumber) -> TournamentResult<()> {
        self.with_round(|round, roster| round.report_draw_at(table, roster))
    }

    pub fn report_double_loss(&mut self, table: TableNumber) -> TournamentResult<()> {
        self.with_round(|round, roster| round.report_double_loss_at(table, roster))
    }

    /// Current round's tables as text lines, empty before round 1.
    #[must_use]
    pub fn pairings(&self) -> Vec<String> {
        self.current_round
            .as_ref()
            .map(|round| round.pairing_lines(&self.roster))
            .unwrap_or_default()
    }

    /// Standings of every player, dropped ones included.
    ///
    /// Empty until the current round has all its results in.
    pub fn standings(&mut self) -> Standings {
        match &self.current_round {
            Some(round) if round.is_finished() => {}
            _ => return Standings::default(),
        }

        let ranked = self.ranked_players();
        Standings::from_ranked(ranked.iter().filter_map(|&id| self.roster.get(id)))
    }

    /// Summary lines (`name\tpoints\ttiebreaker`) of every player sharing
    /// the top tiebreaker. Empty for an empty roster.
    pub fn get_winner(&mut self) -> Vec<String> {
        let ranked: Vec<&Player> = self
            .ranked_players()
            .into_iter()
            .filter_map(|id| self.roster.get(id))
            .collect();

        let Some(top) = ranked.first().map(|player| player.tiebreaker()) else {
            return Vec::new();
        };

        ranked
            .into_iter()
            .take_while(|player| player.tiebreaker() >= top)
            .map(ToString::to_string)
            .collect()
    }

    /// Recomputes tiebreakers for the current round and ranks everyone.
    fn ranked_players(&mut self) -> Vec<PlayerId> {
        let round_nr = self.round_nr();
        if round_nr > 0 {
            self.roster.recompute_tiebreakers(round_nr);
        }
        let ids = self.roster.ids().collect();
        self.display_shuffler.rank(&self.roster, ids)
    }

    fn push_late(&mut self, name: &str, round_nr: u32, win_bye: bool) -> PlayerId {
        let mut player = Player::new(name);
        player.backfill_byes(1..=round_nr, win_bye);
        info!("{name} joined late in round {round_nr}");
        self.roster.push(player)
    }

    fn resolve(&self, name: &str) -> TournamentResult<PlayerId> {
        self.roster
            .find_by_name(name)
            .ok_or_else(|| TournamentError::PlayerNotFound(name.to_string()))
    }

    fn player_mut(&mut self, name: &str) -> TournamentResult<&mut Player> {
        let id = self.resolve(name)?;
        self.roster
            .get_mut(id)
            .ok_or_else(|| TournamentError::PlayerNotFound(name.to_string()))
    }

    /// Runs a report against the current round and the roster it mutates.
    fn with_round<F>(&mut self, report: F) -> TournamentResult<()>
    where
        F: FnOnce(&mut Round, &mut Roster) -> PairingResult<()>,
    {
        let round = self
            .current_round
            .as_mut()
            .ok_or(TournamentError::NoActiveRound)?;
        report(round, &mut self.roster)?;
        Ok(())
    }
}
