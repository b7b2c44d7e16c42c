//! Song/chart catalog: loading, normalization, and search.
//!
//! The raw feed (`ongeki_all.json`) is a list of songs with per-difficulty
//! chart constants. Loading normalizes it into flat entries (one per
//! standard song plus one per LUNATIC sheet) that the calculator can search
//! and pick constants from. Fetching the feed is out of scope; callers hand
//! over a local file or bytes.

mod search;
mod song;

pub use search::DEFAULT_SEARCH_LIMIT;
pub use song::{Catalog, ChartEntry, Difficulty, SongEntry};
