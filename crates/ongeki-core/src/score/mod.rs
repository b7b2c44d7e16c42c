//! Score domain types: the rank ladder and clear lamps.

mod lamp;
mod rank;

pub use lamp::{FULL_BELL_BONUS, Lamp};
pub use rank::Rank;
