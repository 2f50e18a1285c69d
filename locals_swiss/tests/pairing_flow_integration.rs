//! Integration tests for round pairing
//!
//! These tests build rosters with known rankings and check how a round
//! seats them, hands out the bye, and routes results.

use locals_swiss::{
    MatchResult, Opponent, PairingError, Player, PlayerId, Roster, Round, TieShuffler,
    pairing::Seat,
};

/// Roster where `names[0]` is ranked first, `names[1]` second, and so on.
fn ranked_roster(names: &[&str]) -> (Roster, Vec<PlayerId>) {
    let mut roster = Roster::new();
    let mut ids = Vec::new();
    let count = names.len() as u32;
    for (idx, name) in names.iter().enumerate() {
        let mut player = Player::new(name);
        for round in 1..=(count - idx as u32) {
            player.add_win(round);
        }
        ids.push(roster.push(player));
    }
    (roster, ids)
}

#[test]
fn test_five_ranked_players() {
    let (mut roster, ids) = ranked_roster(&["A", "B", "C", "D", "E"]);
    let round = Round::pair(1, &mut roster, &mut TieShuffler::seeded(0)).unwrap();

    let seating: Vec<(PlayerId, Opponent)> = round
        .tables()
        .values()
        .map(|game| (game.player1(), game.player2()))
        .collect();
    assert_eq!(
        seating,
        vec![
            (ids[0], Opponent::Player(ids[1])),
            (ids[2], Opponent::Player(ids[3])),
            (ids[4], Opponent::Bye),
        ]
    );

    let bye = round.table(3).unwrap();
    assert_eq!(bye.result(), MatchResult::Win(Seat::One));
    assert_eq!(roster.get(ids[4]).unwrap().points(), 3 + 3);

    assert_eq!(
        round.pairing_lines(&roster),
        vec![
            "Table 1:\tA\tvs.\tB",
            "Table 2:\tC\tvs.\tD",
            "Table 3:\tE\tvs.\tBYE",
        ]
    );
}

#[test]
fn test_even_field_has_no_bye() {
    let (mut roster, _) = ranked_roster(&["A", "B", "C", "D", "E", "F"]);
    let round = Round::pair(4, &mut roster, &mut TieShuffler::seeded(0)).unwrap();
    assert_eq!(round.number(), 4);
    assert_eq!(round.tables().len(), 3);
    assert!(round.tables().values().all(|game| !game.is_bye()));
}

#[test]
fn test_a_player_named_bye_is_a_real_opponent() {
    let (mut roster, ids) = ranked_roster(&["BYE", "A"]);
    let mut round = Round::pair(1, &mut roster, &mut TieShuffler::seeded(0)).unwrap();
    let game = round.table(1).unwrap();
    assert!(!game.is_bye());
    assert!(!game.is_finished());

    round.report_win(ids[1], &mut roster).unwrap();
    roster.recompute_tiebreakers(1);
    // "A" faced a real opponent, so its opponent average is not zero.
    assert!(roster.get(ids[1]).unwrap().tiebreaker1() > 0);
}

#[test]
fn test_round_finishes_once_every_table_reports() {
    let (mut roster, ids) = ranked_roster(&["A", "B", "C", "D", "E"]);
    let mut round = Round::pair(1, &mut roster, &mut TieShuffler::seeded(0)).unwrap();
    assert!(!round.is_finished());

    round.report_win(ids[0], &mut roster).unwrap();
    assert!(!round.is_finished());

    round.report_draw(ids[3], &mut roster).unwrap();
    assert!(round.is_finished());

    // Corrections are still accepted after the round is complete.
    round.report_lose(ids[0], &mut roster).unwrap();
    assert_eq!(round.table(1).unwrap().winner(), Some(Opponent::Player(ids[1])));
    assert!(round.is_finished());
}

#[test]
fn test_routing_errors_leave_round_untouched() {
    let (mut roster, _) = ranked_roster(&["A", "B"]);
    let outsider = roster.push(Player::new("Z"));
    roster.get_mut(outsider).unwrap().drop_out(0);

    let mut round = Round::pair(1, &mut roster, &mut TieShuffler::seeded(0)).unwrap();
    let snapshot = roster.clone();

    assert_eq!(
        round.report_lose(outsider, &mut roster),
        Err(PairingError::PlayerNotInRound {
            player: outsider,
            round: 1
        })
    );
    assert_eq!(
        round.report_double_loss_at(2, &mut roster),
        Err(PairingError::TableNotFound { table: 2, round: 1 })
    );
    assert_eq!(roster, snapshot);
    assert!(!round.is_finished());
}
