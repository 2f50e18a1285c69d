//! Pure scoring arithmetic.
//!
//! Every tiebreaker component is an integer in `0..=999`, so the combined
//! value can pack match points and both opponent averages into disjoint
//! decimal places of a single sortable integer.

use crate::constants::{
    MAX_POINTRATE, POINTRATE_SCALE, POINTS_PER_WIN, POINTS_WEIGHT, TIEBREAKER1_WEIGHT,
};

/// Points normalized against the maximum obtainable after `round_nr` rounds,
/// scaled to `0..=999`.
///
/// A round number of zero means nothing has been played yet, so the rate
/// is zero rather than undefined.
#[must_use]
pub fn pointrate(points: u32, round_nr: u32) -> u32 {
    if round_nr == 0 {
        return 0;
    }

    let max_points = f64::from(round_nr) * f64::from(POINTS_PER_WIN);
    let rate = (f64::from(points) / max_points * POINTRATE_SCALE).round_ties_even();
    // Float-to-int casts saturate, so the clamp also covers huge ratios.
    (rate as u32).min(MAX_POINTRATE)
}

/// Mean of `values` rounded to the nearest integer (ties to even), or zero
/// for an empty input.
#[must_use]
pub fn average_rounded<I>(values: I) -> u32
where
    I: IntoIterator<Item = u32>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0u64, 0u64), |(sum, count), value| {
            (sum + u64::from(value), count + 1)
        });

    if count == 0 {
        return 0;
    }

    (sum as f64 / count as f64).round_ties_even() as u32
}

/// Packs points and the two opponent averages into one sortable value:
/// `points * 10^6 + tiebreaker1 * 10^3 + tiebreaker2`.
#[must_use]
pub const fn combined_tiebreaker(points: u32, tiebreaker1: u32, tiebreaker2: u32) -> u64 {
    points as u64 * POINTS_WEIGHT + tiebreaker1 as u64 * TIEBREAKER1_WEIGHT + tiebreaker2 as u64
}
