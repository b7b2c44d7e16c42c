//! CLI command implementations.

pub mod rate;
pub mod score;
pub mod search;
