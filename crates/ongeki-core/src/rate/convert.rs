use thiserror::Error;

use super::round3;
use super::tier::{
    MAX_RANK_BONUS, MAX_SCORE, RATE_STEP, TECHNICAL_MAX, tier_for_bonus, tier_for_score,
};

/// Outcome of a successful inversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreTarget {
    /// Smallest score reaching the requested rate.
    Score(u32),
    /// The requested rate is reachable only with a perfect 1,010,000.
    Max,
}

impl ScoreTarget {
    pub fn score(self) -> u32 {
        match self {
            Self::Score(score) => score,
            Self::Max => MAX_SCORE,
        }
    }

    pub fn is_max(self) -> bool {
        matches!(self, Self::Max)
    }
}

/// The target rate cannot be reached on this chart with these bonuses.
///
/// This is an expected domain outcome carrying the boundary value for
/// display, not a defect; callers render it, they do not retry it.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RateOutOfRange {
    #[error("target rate exceeds the reachable maximum ({max:.3})")]
    TooHigh { max: f64 },

    #[error("target rate is below the reachable minimum ({min:.3})")]
    TooLow { min: f64 },
}

/// Calculate the rate a score is worth on a chart.
///
/// `constant` is the chart's difficulty constant, `lamp_bonus` and
/// `full_bell_bonus` are the flat bonuses the play earned. Callers are
/// expected to pass a validated score in `[0, 1_010_000]` and a finite
/// constant; range checks belong to the input layer.
pub fn score_to_rate(constant: f64, score: u32, lamp_bonus: f64, full_bell_bonus: f64) -> f64 {
    let (technical, rank_bonus) = match tier_for_score(score) {
        None => (0.0, 0.0),
        Some(tier) => {
            let technical = if score >= MAX_SCORE {
                TECHNICAL_MAX
            } else {
                let steps = ((score - tier.threshold) as f64 / tier.points_per_step).floor();
                tier.technical_base + steps * RATE_STEP
            };
            // Cap guards floating drift near the boundary; the exact MAX
            // case never goes through the step formula at all.
            (technical.min(TECHNICAL_MAX), tier.rank_bonus)
        }
    };

    let rate = round3(constant)
        + round3(technical)
        + round3(rank_bonus)
        + round3(lamp_bonus)
        + round3(full_bell_bonus);
    round3(rate.max(0.0))
}

/// Invert [`score_to_rate`]: the smallest score whose rate is at least
/// `target_rate`, or the boundary the target falls outside of.
///
/// Ceiling semantics throughout: the result never undershoots the requested
/// rate. A target equal to the reachable maximum returns the MAX-tagged
/// result; a target at the base rate (no technical or rank bonus required)
/// clamps up to the S threshold.
pub fn rate_to_score(
    constant: f64,
    target_rate: f64,
    lamp_bonus: f64,
    full_bell_bonus: f64,
) -> Result<ScoreTarget, RateOutOfRange> {
    let constant = round3(constant);
    let target = round3(target_rate);
    let lamp = round3(lamp_bonus);
    let bell = round3(full_bell_bonus);

    let max_rate = round3(constant + TECHNICAL_MAX + MAX_RANK_BONUS + lamp + bell);
    let base_rate = round3(constant + lamp + bell);

    if target > max_rate {
        return Err(RateOutOfRange::TooHigh { max: max_rate });
    }
    // Unreachable for non-negative bonuses, but the bonuses are
    // caller-supplied so the bound is checked explicitly.
    if target < base_rate {
        return Err(RateOutOfRange::TooLow { min: base_rate });
    }
    if target == max_rate {
        return Ok(ScoreTarget::Max);
    }

    let required_total = round3(target - base_rate);
    let tier = tier_for_bonus(required_total);
    let required_technical = round3((required_total - tier.rank_bonus).max(0.0));

    // Each intermediate difference is re-rounded to 3 decimals before the
    // division so the quotient sits on an exact step count; without that,
    // subtraction noise pushes the ceiling one step past the boundary.
    let steps = (round3((required_technical - tier.technical_base).max(0.0)) / RATE_STEP).ceil();

    // Fractional scores are impossible and the S band's step size (80/3) is
    // non-integral, so the sum takes a ceiling of its own before clamping.
    let raw = (tier.threshold as f64 + steps * tier.points_per_step).ceil();
    let score = (raw as u32).max(tier.threshold).min(MAX_SCORE);
    Ok(ScoreTarget::Score(score))
}
