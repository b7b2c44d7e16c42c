use crate::score::Rank;

use super::round3;

/// Highest attainable technical score.
pub const MAX_SCORE: u32 = 1_010_000;

/// Technical bonus granted at [`MAX_SCORE`]. The step formula would slightly
/// overshoot this at the boundary, so the MAX case is handled as an explicit
/// override rather than derived.
pub const TECHNICAL_MAX: f64 = 2.000;

/// Rank bonus in the MAX band (same band as SSS+).
pub const MAX_RANK_BONUS: f64 = 0.300;

/// Rate gained per technical step.
pub const RATE_STEP: f64 = 0.001;

/// One band of the scoring table: from `threshold` upward the technical
/// bonus starts at `technical_base` and grows by [`RATE_STEP`] for every
/// `points_per_step` score points, on top of a flat `rank_bonus`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    pub rank: Rank,
    pub threshold: u32,
    pub technical_base: f64,
    pub points_per_step: f64,
    pub rank_bonus: f64,
}

impl Tier {
    /// Combined bonus floor of this band (technical base + rank bonus),
    /// used when inverting a required bonus back into a band.
    pub fn combined_base(&self) -> f64 {
        round3(self.technical_base + self.rank_bonus)
    }
}

/// Scored bands in ascending threshold order. Below the S threshold both
/// the technical and the rank bonus are zero.
///
/// The S band's step size is non-integral (80/3), so step arithmetic in
/// that band must divide in real arithmetic before flooring.
pub static TIERS: [Tier; 4] = [
    Tier {
        rank: Rank::S,
        threshold: 970_000,
        technical_base: 0.000,
        points_per_step: 80.0 / 3.0,
        rank_bonus: 0.000,
    },
    Tier {
        rank: Rank::Ss,
        threshold: 990_000,
        technical_base: 0.750,
        points_per_step: 20.0,
        rank_bonus: 0.100,
    },
    Tier {
        rank: Rank::Sss,
        threshold: 1_000_000,
        technical_base: 1.250,
        points_per_step: 15.0,
        rank_bonus: 0.200,
    },
    Tier {
        rank: Rank::SssPlus,
        threshold: 1_007_500,
        technical_base: 1.750,
        points_per_step: 10.0,
        rank_bonus: 0.300,
    },
];

/// The band a score falls into: highest tier whose threshold is <= `score`,
/// or `None` below the S threshold.
pub fn tier_for_score(score: u32) -> Option<&'static Tier> {
    TIERS.iter().rev().find(|tier| score >= tier.threshold)
}

/// The band a required combined bonus falls into: highest tier whose
/// combined base is <= `required_bonus`. Falls back to the S band, whose
/// combined base is zero.
pub fn tier_for_bonus(required_bonus: f64) -> &'static Tier {
    TIERS
        .iter()
        .rev()
        .find(|tier| required_bonus >= tier.combined_base())
        .unwrap_or(&TIERS[0])
}
