/// Property-based tests for scoring using proptest
///
/// These tests check the invariants the tiebreaker encoding and the match
/// correction path rely on, across random inputs.
use locals_swiss::{
    Match, Opponent, PlayerId, Roster,
    constants::MAX_POINTRATE,
    player::{average_rounded, combined_tiebreaker, pointrate},
};
use proptest::prelude::*;

#[derive(Clone, Copy, Debug)]
enum Report {
    WinFirst,
    WinSecond,
    LoseFirst,
    LoseSecond,
    Draw,
    DoubleLoss,
}

fn report_strategy() -> impl Strategy<Value = Report> {
    prop_oneof![
        Just(Report::WinFirst),
        Just(Report::WinSecond),
        Just(Report::LoseFirst),
        Just(Report::LoseSecond),
        Just(Report::Draw),
        Just(Report::DoubleLoss),
    ]
}

fn fresh_match(round: u32) -> (Roster, Match) {
    let mut roster = Roster::from_names(["first", "second"]);
    let first = roster.find_by_name("first").unwrap();
    let second = roster.find_by_name("second").unwrap();
    let game = Match::pair(round, first, Opponent::Player(second), &mut roster).unwrap();
    (roster, game)
}

fn apply(report: Report, round: u32, roster: &mut Roster, game: &mut Match) {
    let first = game.player1();
    let second: PlayerId = game.player2().player_id().unwrap();
    match report {
        Report::WinFirst => game.report_win(first, round, roster),
        Report::WinSecond => game.report_win(second, round, roster),
        Report::LoseFirst => game.report_lose(first, round, roster),
        Report::LoseSecond => game.report_lose(second, round, roster),
        Report::Draw => game.report_draw(round, roster),
        Report::DoubleLoss => game.report_double_loss(round, roster),
    }
    .unwrap();
}

proptest! {
    #[test]
    fn test_pointrate_monotonic_in_points(
        a in 0u32..500,
        b in 0u32..500,
        round in 1u32..60,
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(pointrate(low, round) <= pointrate(high, round));
    }

    #[test]
    fn test_pointrate_is_clamped(points in any::<u32>(), round in 0u32..100) {
        prop_assert!(pointrate(points, round) <= MAX_POINTRATE);
    }

    #[test]
    fn test_points_dominate_tiebreaker(
        low in 0u32..1000,
        gap in 1u32..1000,
        tb1_low in 0u32..=999,
        tb2_low in 0u32..=999,
        tb1_high in 0u32..=999,
        tb2_high in 0u32..=999,
    ) {
        let high = low + gap;
        prop_assert!(
            combined_tiebreaker(high, tb1_high, tb2_high)
                > combined_tiebreaker(low, tb1_low, tb2_low)
        );
    }

    #[test]
    fn test_average_within_bounds(values in prop::collection::vec(0u32..=999, 1..20)) {
        let avg = average_rounded(values.iter().copied());
        let min = *values.iter().min().unwrap();
        let max = *values.iter().max().unwrap();
        prop_assert!(avg >= min && avg <= max);
    }

    #[test]
    fn test_corrections_equal_last_report(
        reports in prop::collection::vec(report_strategy(), 1..12),
        round in 1u32..10,
    ) {
        let (mut corrected_roster, mut corrected) = fresh_match(round);
        for &report in &reports {
            apply(report, round, &mut corrected_roster, &mut corrected);
        }

        let (mut direct_roster, mut direct) = fresh_match(round);
        apply(*reports.last().unwrap(), round, &mut direct_roster, &mut direct);

        prop_assert_eq!(corrected.result(), direct.result());
        prop_assert_eq!(corrected_roster, direct_roster);
    }
}
