//! Locals Night Example
//!
//! Runs a small three-round event end to end: pairing, reporting, a
//! correction, a drop, a late entry, and final standings.
//!
//! Run with `RUST_LOG=debug` to see the engine's trace.

use locals_swiss::{Tournament, TournamentConfig, TournamentResult};

fn print_pairings(tournament: &Tournament) {
    println!("--- Round {} pairings ---", tournament.round_nr());
    for line in tournament.pairings() {
        println!("{line}");
    }
    println!();
}

/// Lets the first-seated player win every open table.
fn play_out_round(tournament: &mut Tournament) -> TournamentResult<()> {
    let winners: Vec<String> = match tournament.current_round() {
        Some(round) => round
            .tables()
            .values()
            .filter(|game| !game.is_finished())
            .filter_map(|game| tournament.roster().get(game.player1()))
            .map(|player| player.name().to_string())
            .collect(),
        None => Vec::new(),
    };

    for name in winners {
        tournament.report_win(&name)?;
    }
    Ok(())
}

fn main() -> TournamentResult<()> {
    env_logger::init();

    println!("=== Locals Night Example ===\n");

    let config = TournamentConfig::new("Friday Locals")
        .with_max_rounds(3)
        .with_seed(2024);
    let mut tournament = Tournament::new(config, ["Yugi", "Kaiba", "Joey", "Mai", "Bakura"])?;

    // Round 1: five players, so somebody gets the bye.
    tournament.pair_next_round()?;
    print_pairings(&tournament);
    play_out_round(&mut tournament)?;

    // A judge fixes a misreported table.
    if let Some(name) = tournament
        .current_round()
        .and_then(|round| round.table(1))
        .and_then(|game| tournament.roster().get(game.player1()))
        .map(|player| player.name().to_string())
    {
        println!("Correcting table 1: {name} actually lost\n");
        tournament.report_lose(&name)?;
    }

    println!("--- Standings after round 1 ---");
    print!("{}", tournament.standings());
    println!();

    // Round 2: one drop, one late entry.
    tournament.drop_player("Bakura")?;
    tournament.add_player("Tea", false);
    tournament.pair_next_round()?;
    print_pairings(&tournament);
    tournament.report_double_loss(1)?;
    play_out_round(&mut tournament)?;

    // Round 3
    tournament.pair_next_round()?;
    print_pairings(&tournament);
    tournament.report_draw_at(1)?;
    play_out_round(&mut tournament)?;

    println!("--- Final standings ---");
    print!("{}", tournament.standings());
    println!();

    if let Err(err) = tournament.pair_next_round() {
        println!("No round 4: {}\n", err.client_message());
    }

    println!("Winner(s):");
    for line in tournament.get_winner() {
        println!("  {line}");
    }

    Ok(())
}
