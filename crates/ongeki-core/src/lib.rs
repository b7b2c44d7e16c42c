//! # ongeki-core
//!
//! Core library for the ONGEKI rating calculator.
//!
//! This crate provides:
//! - The bidirectional score/rate conversion engine (score → rate and
//!   rate → required score, sharing one tier table)
//! - Score domain types (ranks, clear lamps and their rating bonuses)
//! - Song catalog loading, normalization, and search
//!
//! The engine itself is purely functional: no I/O, no shared mutable state,
//! safe to call from any thread.

pub mod catalog;
pub mod error;
pub mod rate;
pub mod score;

// Re-export from rate module
pub use rate::{
    MAX_SCORE, RATE_STEP, RateOutOfRange, ScoreTarget, TECHNICAL_MAX, Tier, rate_to_score,
    score_to_rate, tier_for_bonus, tier_for_score,
};

// Re-export from score module
pub use score::{FULL_BELL_BONUS, Lamp, Rank};

// Re-export from catalog module
pub use catalog::{Catalog, ChartEntry, Difficulty, SongEntry};

// Re-export from error module
pub use error::{Error, Result};
