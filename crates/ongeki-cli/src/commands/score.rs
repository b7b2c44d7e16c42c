//! Rate → score command.

use anyhow::Result;
use ongeki_core::{FULL_BELL_BONUS, Lamp, RateOutOfRange, rate_to_score};
use owo_colors::OwoColorize;

use crate::format::format_score;
use crate::validation::{check_constant, check_target_rate};

/// Run the score command
///
/// An unreachable target is a normal outcome, not a failure: the boundary
/// is printed and the process still exits cleanly.
pub fn run(constant: f64, target: f64, lamp: Lamp, full_bell: bool, json: bool) -> Result<()> {
    check_constant(constant)?;
    check_target_rate(target)?;

    let bell_bonus = if full_bell { FULL_BELL_BONUS } else { 0.0 };
    match rate_to_score(constant, target, lamp.bonus(), bell_bonus) {
        Ok(result) => {
            if json {
                let out = serde_json::json!({
                    "constant": constant,
                    "target": target,
                    "lamp": lamp.short_name(),
                    "full_bell": full_bell,
                    "score": result.score(),
                    "max": result.is_max(),
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else if result.is_max() {
                println!("Score: {} (MAX)", format_score(result.score()).bold());
            } else {
                println!("Score: {}", format_score(result.score()).bold());
            }
        }
        Err(outcome) => {
            if json {
                let (kind, bound) = match outcome {
                    RateOutOfRange::TooHigh { max } => ("too_high", max),
                    RateOutOfRange::TooLow { min } => ("too_low", min),
                };
                let out = serde_json::json!({
                    "constant": constant,
                    "target": target,
                    "error": kind,
                    "bound": bound,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{}", outcome.to_string().yellow());
            }
        }
    }
    Ok(())
}
