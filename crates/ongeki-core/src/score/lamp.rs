use serde::{Deserialize, Serialize};
use strum::{FromRepr, IntoStaticStr};

/// Flat rating bonus for clearing every bell in a chart.
pub const FULL_BELL_BONUS: f64 = 0.050;

/// Clear lamp of a play. Each lamp above a plain clear grants a flat
/// rating bonus on top of the technical and rank bonuses.
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
    Default,
    FromRepr,
    IntoStaticStr,
)]
#[repr(u8)]
pub enum Lamp {
    #[default]
    #[strum(serialize = "-")]
    None = 0,
    #[strum(serialize = "FC")]
    FullCombo = 1,
    #[strum(serialize = "AB")]
    AllBreak = 2,
    #[strum(serialize = "AB+")]
    AllBreakPlus = 3,
}

impl Lamp {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    /// Rating bonus this lamp grants.
    pub fn bonus(&self) -> f64 {
        match self {
            Self::None => 0.000,
            Self::FullCombo => 0.100,
            Self::AllBreak => 0.300,
            Self::AllBreakPlus => 0.350,
        }
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    /// Get the expanded lamp name (for display and export)
    pub fn expand_name(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::FullCombo => "FULL COMBO",
            Self::AllBreak => "ALL BREAK",
            Self::AllBreakPlus => "ALL BREAK+",
        }
    }
}

impl std::fmt::Display for Lamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
