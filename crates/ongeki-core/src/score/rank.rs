use serde::{Deserialize, Serialize};
use strum::{FromRepr, IntoStaticStr};

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
pub enum Rank {
    #[default]
    D = 0,
    C = 1,
    B = 2,
    #[strum(serialize = "BB")]
    Bb = 3,
    #[strum(serialize = "BBB")]
    Bbb = 4,
    A = 5,
    #[strum(serialize = "AA")]
    Aa = 6,
    #[strum(serialize = "AAA")]
    Aaa = 7,
    S = 8,
    #[strum(serialize = "SS")]
    Ss = 9,
    #[strum(serialize = "SSS")]
    Sss = 10,
    #[strum(serialize = "SSS+")]
    SssPlus = 11,
}

impl Rank {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    pub fn from_score(score: u32) -> Self {
        if score >= 1_007_500 {
            Self::SssPlus
        } else if score >= 1_000_000 {
            Self::Sss
        } else if score >= 990_000 {
            Self::Ss
        } else if score >= 970_000 {
            Self::S
        } else if score >= 940_000 {
            Self::Aaa
        } else if score >= 900_000 {
            Self::Aa
        } else if score >= 850_000 {
            Self::A
        } else if score >= 800_000 {
            Self::Bbb
        } else if score >= 750_000 {
            Self::Bb
        } else if score >= 700_000 {
            Self::B
        } else if score >= 500_000 {
            Self::C
        } else {
            Self::D
        }
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_from_score() {
        assert_eq!(Rank::from_score(0), Rank::D);
        assert_eq!(Rank::from_score(499_999), Rank::D);
        assert_eq!(Rank::from_score(500_000), Rank::C);
        assert_eq!(Rank::from_score(700_000), Rank::B);
        assert_eq!(Rank::from_score(850_000), Rank::A);
        assert_eq!(Rank::from_score(940_000), Rank::Aaa);
        assert_eq!(Rank::from_score(969_999), Rank::Aaa);
        assert_eq!(Rank::from_score(970_000), Rank::S);
        assert_eq!(Rank::from_score(990_000), Rank::Ss);
        assert_eq!(Rank::from_score(1_000_000), Rank::Sss);
        assert_eq!(Rank::from_score(1_007_500), Rank::SssPlus);
        assert_eq!(Rank::from_score(1_010_000), Rank::SssPlus);
    }

    #[test]
    fn test_rank_ordering() {
        assert!(Rank::SssPlus > Rank::Sss);
        assert!(Rank::Sss > Rank::Ss);
        assert!(Rank::S > Rank::Aaa);
        assert!(Rank::D < Rank::C);
    }

    #[test]
    fn test_rank_short_name() {
        assert_eq!(Rank::SssPlus.short_name(), "SSS+");
        assert_eq!(Rank::Ss.short_name(), "SS");
        assert_eq!(Rank::S.short_name(), "S");
        assert_eq!(Rank::Bb.short_name(), "BB");
    }
}
