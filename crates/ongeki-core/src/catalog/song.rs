use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use strum::{EnumString, FromRepr, IntoStaticStr};
use tracing::{debug, info};

use crate::error::{Error, Result};

use super::search;

/// Difficulty slot of a chart, in feed-key notation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    FromRepr,
    EnumString,
    IntoStaticStr,
)]
#[repr(u8)]
pub enum Difficulty {
    #[strum(serialize = "BAS")]
    Basic = 0,
    #[strum(serialize = "ADV")]
    Advanced = 1,
    #[strum(serialize = "EXP")]
    Expert = 2,
    #[strum(serialize = "MAS")]
    Master = 3,
    #[strum(serialize = "LUN")]
    Lunatic = 4,
}

impl Difficulty {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    /// Get the expanded difficulty name (e.g., "EXPERT", "MASTER")
    pub fn expand_name(&self) -> &'static str {
        match self {
            Self::Basic => "BASIC",
            Self::Advanced => "ADVANCED",
            Self::Expert => "EXPERT",
            Self::Master => "MASTER",
            Self::Lunatic => "LUNATIC",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// One chart of a song, with its difficulty constant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartEntry {
    pub difficulty: Difficulty,
    pub constant: f64,
    /// The feed sometimes carries a provisional constant; the flag marks it
    /// so the UI can render a trailing `?`.
    pub constant_unknown: bool,
}

/// A searchable catalog entry: one standard song, or one LUNATIC sheet.
#[derive(Debug, Clone, Serialize)]
pub struct SongEntry {
    /// `{feed id}_STD` or `{feed id}_LUN`.
    pub internal_id: String,
    pub title: String,
    pub artist: String,
    pub lunatic: bool,
    /// Charts in BAS → LUN order.
    pub charts: Vec<ChartEntry>,
}

// Raw feed shape.

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum SongId {
    Number(u64),
    Text(String),
}

impl std::fmt::Display for SongId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawMeta {
    id: Option<SongId>,
    title: Option<String>,
    #[serde(default)]
    artist: Option<String>,
    #[serde(default)]
    is_bonus: bool,
}

#[derive(Debug, Deserialize)]
struct RawSheet {
    #[serde(rename = "const")]
    constant: Option<f64>,
    #[serde(default)]
    is_const_unknown: bool,
}

#[derive(Debug, Deserialize)]
struct RawSong {
    meta: Option<RawMeta>,
    // BTreeMap keeps unknown keys harmless and iteration deterministic.
    #[serde(default)]
    data: BTreeMap<String, RawSheet>,
}

/// The normalized song catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    songs: Vec<SongEntry>,
}

impl Catalog {
    /// Load and normalize a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let catalog = Self::from_reader(BufReader::new(file))?;
        info!(
            "Loaded {} song entries from {}",
            catalog.len(),
            path.as_ref().display()
        );
        Ok(catalog)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: Vec<RawSong> = serde_json::from_reader(reader)?;
        Self::from_raw(raw)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let raw: Vec<RawSong> = serde_json::from_slice(bytes)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: Vec<RawSong>) -> Result<Self> {
        let total = raw.len();
        let mut songs = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for song in raw {
            // Skip bonus tracks and incomplete entries.
            let Some(meta) = song.meta else {
                continue;
            };
            let (Some(id), Some(title)) = (meta.id, meta.title) else {
                continue;
            };
            if meta.is_bonus || song.data.is_empty() {
                continue;
            }
            let artist = meta.artist.unwrap_or_else(|| "Unknown Artist".into());

            // A LUNATIC sheet becomes its own entry.
            if let Some(sheet) = song.data.get(Difficulty::Lunatic.short_name()) {
                if let Some(chart) = normalize_sheet(Difficulty::Lunatic, sheet) {
                    let internal_id = format!("{id}_LUN");
                    if seen.insert(internal_id.clone()) {
                        songs.push(SongEntry {
                            internal_id,
                            title: title.clone(),
                            artist: artist.clone(),
                            lunatic: true,
                            charts: vec![chart],
                        });
                    }
                } else {
                    debug!("Skipping LUNATIC sheet without constant: {title}");
                }
            }

            // Standard difficulties collapse into one entry, BAS → MAS.
            let mut charts: Vec<ChartEntry> = song
                .data
                .iter()
                .filter_map(|(key, sheet)| {
                    let difficulty: Difficulty = key.parse().ok()?;
                    if difficulty == Difficulty::Lunatic {
                        return None;
                    }
                    normalize_sheet(difficulty, sheet)
                })
                .collect();
            charts.sort_by_key(|chart| chart.difficulty);

            if !charts.is_empty() {
                let internal_id = format!("{id}_STD");
                if seen.insert(internal_id.clone()) {
                    songs.push(SongEntry {
                        internal_id,
                        title,
                        artist,
                        lunatic: false,
                        charts,
                    });
                }
            }
        }

        if songs.is_empty() {
            return Err(Error::CatalogEmpty);
        }

        // Title order, standard entry before its LUNATIC counterpart.
        songs.sort_by(|a, b| a.title.cmp(&b.title).then(a.lunatic.cmp(&b.lunatic)));

        debug!("Normalized {} of {} feed entries", songs.len(), total);
        Ok(Self { songs })
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn songs(&self) -> &[SongEntry] {
        &self.songs
    }

    pub fn get(&self, internal_id: &str) -> Option<&SongEntry> {
        self.songs.iter().find(|s| s.internal_id == internal_id)
    }

    /// Search by title fragment or exact one-decimal chart constant.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&SongEntry> {
        search::search(&self.songs, query, limit)
    }
}

fn normalize_sheet(difficulty: Difficulty, sheet: &RawSheet) -> Option<ChartEntry> {
    let constant = sheet.constant?;
    Some(ChartEntry {
        difficulty,
        constant,
        constant_unknown: sheet.is_const_unknown,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use std::io::Write as _;

    use super::*;

    pub(crate) const FEED: &str = r#"[
        {
            "meta": { "id": 8, "title": "Titania", "artist": "xi", "is_bonus": false },
            "data": {
                "BAS": { "const": 4.0, "is_const_unknown": false },
                "ADV": { "const": 7.5, "is_const_unknown": false },
                "EXP": { "const": 12.7, "is_const_unknown": false },
                "MAS": { "const": 14.4, "is_const_unknown": false }
            }
        },
        {
            "meta": { "id": 9, "title": "Apollo", "artist": "sasakure.UK", "is_bonus": false },
            "data": {
                "EXP": { "const": 12.9, "is_const_unknown": false },
                "MAS": { "const": 14.7, "is_const_unknown": true },
                "LUN": { "const": 15.0, "is_const_unknown": false }
            }
        },
        {
            "meta": { "id": 10, "title": "Lunatic Only", "artist": "someone", "is_bonus": false },
            "data": {
                "LUN": { "const": 14.9, "is_const_unknown": false }
            }
        },
        {
            "meta": { "id": 11, "title": "Bonus Track", "is_bonus": true },
            "data": {
                "MAS": { "const": 13.0, "is_const_unknown": false }
            }
        },
        {
            "meta": { "id": 12, "title": "No Constants" },
            "data": {
                "LUN": { "const": null, "is_const_unknown": true }
            }
        }
    ]"#;

    #[test]
    fn test_feed_normalization() {
        let catalog = Catalog::from_slice(FEED.as_bytes()).unwrap();

        // Titania STD, Apollo STD, Apollo LUN, Lunatic Only LUN.
        assert_eq!(catalog.len(), 4);
        assert!(catalog.get("11_STD").is_none(), "bonus track kept");
        assert!(catalog.get("12_LUN").is_none(), "null constant kept");

        let titania = catalog.get("8_STD").unwrap();
        assert_eq!(titania.charts.len(), 4);
        assert_eq!(titania.charts[0].difficulty, Difficulty::Basic);
        assert_eq!(titania.charts[3].difficulty, Difficulty::Master);
        assert_eq!(titania.charts[3].constant, 14.4);
        assert!(!titania.lunatic);

        let apollo_lun = catalog.get("9_LUN").unwrap();
        assert!(apollo_lun.lunatic);
        assert_eq!(apollo_lun.charts.len(), 1);
        assert_eq!(apollo_lun.charts[0].constant, 15.0);

        let apollo_std = catalog.get("9_STD").unwrap();
        assert_eq!(apollo_std.charts.len(), 2);
        assert!(apollo_std.charts[1].constant_unknown);
    }

    #[test]
    fn test_sorted_by_title_standard_first() {
        let catalog = Catalog::from_slice(FEED.as_bytes()).unwrap();
        let ids: Vec<&str> = catalog
            .songs()
            .iter()
            .map(|s| s.internal_id.as_str())
            .collect();
        assert_eq!(ids, ["9_STD", "9_LUN", "10_LUN", "8_STD"]);
    }

    #[test]
    fn test_empty_feed_is_an_error() {
        assert!(matches!(
            Catalog::from_slice(b"[]"),
            Err(Error::CatalogEmpty)
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FEED.as_bytes()).unwrap();
        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_difficulty_parsing() {
        assert_eq!("BAS".parse(), Ok(Difficulty::Basic));
        assert_eq!("LUN".parse(), Ok(Difficulty::Lunatic));
        assert!("WORLD'S END".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::Expert.expand_name(), "EXPERT");
        assert_eq!(Difficulty::Master.short_name(), "MAS");
    }
}
