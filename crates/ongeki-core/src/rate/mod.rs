//! Bidirectional rate/score conversion engine.
//!
//! Two pure functions share one tier table: [`score_to_rate`] maps a
//! technical score to the rate it is worth on a chart, and [`rate_to_score`]
//! inverts it, returning the smallest score that reaches a target rate (or a
//! typed out-of-range outcome). Both are O(1) and reentrant.

mod convert;
mod tier;

pub use convert::{RateOutOfRange, ScoreTarget, rate_to_score, score_to_rate};
pub use tier::{
    MAX_RANK_BONUS, MAX_SCORE, RATE_STEP, TECHNICAL_MAX, TIERS, Tier, tier_for_bonus,
    tier_for_score,
};

/// Round to the 3-decimal precision rate values carry.
///
/// Applied to every intermediate term, not only the final sum, so the two
/// conversion directions stay consistent with each other. Dropping any of
/// the intermediate roundings reintroduces one-step overshoot in the
/// inversion near exact step boundaries.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round3() {
        assert_eq!(round3(1.2834), 1.283);
        assert_eq!(round3(1.2835), 1.284);
        assert_eq!(round3(15.483000000000001), 15.483);
        assert_eq!(round3(0.0), 0.0);
    }
}
