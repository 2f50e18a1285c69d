//! Scoring constants shared by the player, pairing and tournament modules.

/// Match points awarded for a win.
pub const POINTS_PER_WIN: u32 = 3;

/// Match points awarded for a draw.
pub const POINTS_PER_DRAW: u32 = 1;

/// Match points awarded for a loss.
pub const POINTS_PER_LOSS: u32 = 0;

/// Scale applied to the points / max-points ratio.
pub const POINTRATE_SCALE: f64 = 1000.0;

/// Upper clamp for a pointrate (and therefore for both opponent averages).
/// Keeps every tiebreaker component within three decimal digits.
pub const MAX_POINTRATE: u32 = 999;

/// Weight of match points in the combined tiebreaker.
pub const POINTS_WEIGHT: u64 = 1_000_000;

/// Weight of the opponents' average pointrate in the combined tiebreaker.
pub const TIEBREAKER1_WEIGHT: u64 = 1_000;

/// Two standings rows whose tiebreakers differ by less than this share a rank.
pub const STANDINGS_EPSILON: f64 = 0.1;

/// Round cap historically used to mean "unbounded". `TournamentConfig`
/// models the absence of a cap as `None`; this value is kept for callers
/// that need a number.
pub const DEFAULT_MAX_ROUNDS: u32 = 9999;

/// Name rendered for the synthetic bye opponent.
pub const BYE_NAME: &str = "BYE";
