//! Score → rate command.

use anyhow::Result;
use ongeki_core::{FULL_BELL_BONUS, Lamp, Rank, score_to_rate};
use owo_colors::OwoColorize;

use crate::format::{colored_rank, format_score};
use crate::validation::{check_constant, check_score};

/// Run the rate command
pub fn run(constant: f64, score: u32, lamp: Lamp, full_bell: bool, json: bool) -> Result<()> {
    check_constant(constant)?;
    check_score(score)?;

    let bell_bonus = if full_bell { FULL_BELL_BONUS } else { 0.0 };
    let rate = score_to_rate(constant, score, lamp.bonus(), bell_bonus);
    let rank = Rank::from_score(score);

    if json {
        let out = serde_json::json!({
            "constant": constant,
            "score": score,
            "lamp": lamp.short_name(),
            "full_bell": full_bell,
            "rank": rank.short_name(),
            "rate": rate,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        let mut label = format!("{} [{}]", format_score(score), colored_rank(rank));
        if lamp != Lamp::None {
            label.push_str(&format!(" {}", lamp.expand_name()));
        }
        if full_bell {
            label.push_str(" FULL BELL");
        }
        println!("{label}");
        println!("Rate: {}", format!("{rate:.3}").bold());
    }
    Ok(())
}
