//! Input range validation for calculator commands.
//!
//! The conversion engine documents these ranges as caller preconditions;
//! this is the calling layer, so they are enforced here.

use anyhow::{Result, bail};
use ongeki_core::MAX_SCORE;

pub const CONSTANT_MIN: f64 = 1.0;
pub const CONSTANT_MAX: f64 = 15.7;

pub fn check_constant(constant: f64) -> Result<()> {
    if !constant.is_finite() || !(CONSTANT_MIN..=CONSTANT_MAX).contains(&constant) {
        bail!("chart constant must be between {CONSTANT_MIN} and {CONSTANT_MAX}");
    }
    Ok(())
}

pub fn check_score(score: u32) -> Result<()> {
    if score > MAX_SCORE {
        bail!("score must be between 0 and {MAX_SCORE}");
    }
    Ok(())
}

pub fn check_target_rate(target: f64) -> Result<()> {
    if !target.is_finite() || target < 0.0 {
        bail!("target rate must be a non-negative number");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_bounds() {
        assert!(check_constant(1.0).is_ok());
        assert!(check_constant(15.7).is_ok());
        assert!(check_constant(0.9).is_err());
        assert!(check_constant(15.8).is_err());
        assert!(check_constant(f64::NAN).is_err());
    }

    #[test]
    fn test_score_bounds() {
        assert!(check_score(0).is_ok());
        assert!(check_score(1_010_000).is_ok());
        assert!(check_score(1_010_001).is_err());
    }

    #[test]
    fn test_target_rate_bounds() {
        assert!(check_target_rate(0.0).is_ok());
        assert!(check_target_rate(18.0).is_ok());
        assert!(check_target_rate(-0.001).is_err());
        assert!(check_target_rate(f64::INFINITY).is_err());
    }
}
