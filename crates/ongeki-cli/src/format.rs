//! Presentation helpers: separators and colored labels.

use ongeki_core::{Difficulty, Rank};
use owo_colors::OwoColorize;

/// Format a score with thousands separators (e.g. "1,007,500").
pub fn format_score(score: u32) -> String {
    let digits = score.to_string();
    let mut out = String::with_capacity(digits.len() + 3);
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn colored_rank(rank: Rank) -> String {
    let name = rank.short_name();
    match rank {
        Rank::SssPlus | Rank::Sss => name.bright_yellow().to_string(),
        Rank::Ss | Rank::S => name.yellow().to_string(),
        Rank::Aaa | Rank::Aa | Rank::A => name.red().to_string(),
        _ => name.to_string(),
    }
}

pub fn colored_difficulty(difficulty: Difficulty) -> String {
    let name = difficulty.short_name();
    match difficulty {
        Difficulty::Basic => name.green().to_string(),
        Difficulty::Advanced => name.yellow().to_string(),
        Difficulty::Expert => name.red().to_string(),
        Difficulty::Master => name.purple().to_string(),
        Difficulty::Lunatic => name.bright_white().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(0), "0");
        assert_eq!(format_score(970), "970");
        assert_eq!(format_score(1_000), "1,000");
        assert_eq!(format_score(970_000), "970,000");
        assert_eq!(format_score(1_007_500), "1,007,500");
        assert_eq!(format_score(1_010_000), "1,010,000");
    }
}
