//! Round creation (rank-adjacent pairing) and result routing.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::errors::{PairingError, PairingResult};
use super::matches::Match;
use super::shuffler::TieShuffler;
use crate::constants::BYE_NAME;
use crate::player::{Opponent, PlayerId, Roster};

/// Table number within a round, starting at 1.
pub type TableNumber = u32;

/// One round of the event: a fixed set of numbered tables.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Round {
    number: u32,
    tables: BTreeMap<TableNumber, Match>,
}

impl Round {
    /// Pairs every active player in `roster` for round `number`.
    ///
    /// Players are ranked by tiebreaker (ties shuffled), then seated in
    /// adjacent pairs: 1st vs 2nd, 3rd vs 4th, and so on. With an odd count
    /// the last player gets a bye, already reported as a win.
    pub fn pair(
        number: u32,
        roster: &mut Roster,
        shuffler: &mut TieShuffler,
    ) -> PairingResult<Self> {
        let active: Vec<PlayerId> = roster.active_ids().collect();
        let ranked = shuffler.rank(roster, active);

        let mut tables = BTreeMap::new();
        let mut next_table: TableNumber = 1;

        let mut pairs = ranked.chunks_exact(2);
        for pair in &mut pairs {
            let game = Match::pair(number, pair[0], Opponent::Player(pair[1]), roster)?;
            tables.insert(next_table, game);
            next_table += 1;
        }

        if let [last] = *pairs.remainder() {
            let mut game = Match::pair(number, last, Opponent::Bye, roster)?;
            game.report_win(last, number, roster)?;
            debug!("round {number}: {last} receives the bye at table {next_table}");
            tables.insert(next_table, game);
        }

        info!(
            "paired round {number}: {} tables for {} players",
            tables.len(),
            ranked.len()
        );

        Ok(Self { number, tables })
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    /// Tables in numeric order.
    pub fn tables(&self) -> &BTreeMap<TableNumber, Match> {
        &self.tables
    }

    pub fn table(&self, table: TableNumber) -> Option<&Match> {
        self.tables.get(&table)
    }

    /// Table seating `player`, if any.
    #[must_use]
    pub fn table_of(&self, player: PlayerId) -> Option<TableNumber> {
        self.tables
            .iter()
            .find(|(_, game)| game.contains(player))
            .map(|(&table, _)| table)
    }

    pub fn is_finished(&self) -> bool {
        self.tables.values().all(Match::is_finished)
    }

    pub fn report_win(&mut self, player: PlayerId, roster: &mut Roster) -> PairingResult<()> {
        let round = self.number;
        self.match_of(player)?.report_win(player, round, roster)
    }

    pub fn report_lose(&mut self, player: PlayerId, roster: &mut Roster) -> PairingResult<()> {
        let round = self.number;
        self.match_of(player)?.report_lose(player, round, roster)
    }

    /// Reports a draw at the table seating `player`.
    pub fn report_draw(&mut self, player: PlayerId, roster: &mut Roster) -> PairingResult<()> {
        let round = self.number;
        self.match_of(player)?.report_draw(round, roster)
    }

    pub fn report_draw_at(
        &mut self,
        table: TableNumber,
        roster: &mut Roster,
    ) -> PairingResult<()> {
        let round = self.number;
        self.match_at(table)?.report_draw(round, roster)
    }

    pub fn report_double_loss_at(
        &mut self,
        table: TableNumber,
        roster: &mut Roster,
    ) -> PairingResult<()> {
        let round = self.number;
        self.match_at(table)?.report_double_loss(round, roster)
    }

    /// One line per table: `Table {n}:\t{player1}\tvs.\t{player2}`.
    #[must_use]
    pub fn pairing_lines(&self, roster: &Roster) -> Vec<String> {
        self.tables
            .iter()
            .map(|(table, game)| {
                format!(
                    "Table {table}:\t{}\tvs.\t{}",
                    display_name(roster, Opponent::Player(game.player1())),
                    display_name(roster, game.player2())
                )
            })
            .collect()
    }

    fn match_of(&mut self, player: PlayerId) -> PairingResult<&mut Match> {
        let round = self.number;
        self.tables
            .values_mut()
            .find(|game| game.contains(player))
            .ok_or(PairingError::PlayerNotInRound { player, round })
    }

    fn match_at(&mut self, table: TableNumber) -> PairingResult<&mut Match> {
        let round = self.number;
        self.tables
            .get_mut(&table)
            .ok_or(PairingError::TableNotFound { table, round })
    }
}

fn display_name(roster: &Roster, opponent: Opponent) -> &str {
    match opponent {
        Opponent::Player(id) => roster.get(id).map_or("?", |player| player.name()),
        Opponent::Bye => BYE_NAME,
    }
}
