//! Binary size units used to classify and filter entries.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

const KIB: u64 = 1 << 10;
const MIB: u64 = 1 << 20;
const GIB: u64 = 1 << 30;
const TIB: u64 = 1 << 40;
const PIB: u64 = 1 << 50;

/// Size unit of an entry, in 1024 steps.
///
/// `Unbounded` is not a real unit: it is the filter value that admits
/// every other unit.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum SizeUnit {
    B,
    KB,
    MB,
    GB,
    TB,
    PB,
    #[default]
    Unbounded,
}

impl SizeUnit {
    /// Pick the largest unit in which `bytes` is at least 1.
    pub fn classify(bytes: u64) -> Self {
        match bytes {
            0..KIB => Self::B,
            KIB..MIB => Self::KB,
            MIB..GIB => Self::MB,
            GIB..TIB => Self::GB,
            TIB..PIB => Self::TB,
            _ => Self::PB,
        }
    }

    /// Number of bytes in one of this unit. `Unbounded` counts as bytes.
    pub fn base(self) -> u64 {
        match self {
            Self::B | Self::Unbounded => 1,
            Self::KB => KIB,
            Self::MB => MIB,
            Self::GB => GIB,
            Self::TB => TIB,
            Self::PB => PIB,
        }
    }

    /// Express `bytes` in this unit, rounding down.
    pub fn scale(self, bytes: u64) -> u64 {
        bytes / self.base()
    }

    /// Check if an entry of unit `other` passes this filter.
    pub fn admits(self, other: SizeUnit) -> bool {
        self == Self::Unbounded || self == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(SizeUnit::classify(0), SizeUnit::B);
        assert_eq!(SizeUnit::classify(1023), SizeUnit::B);
        assert_eq!(SizeUnit::classify(1024), SizeUnit::KB);
        assert_eq!(SizeUnit::classify(MIB - 1), SizeUnit::KB);
        assert_eq!(SizeUnit::classify(MIB), SizeUnit::MB);
        assert_eq!(SizeUnit::classify(3 * GIB), SizeUnit::GB);
        assert_eq!(SizeUnit::classify(TIB), SizeUnit::TB);
        assert_eq!(SizeUnit::classify(u64::MAX), SizeUnit::PB);
    }

    #[test]
    fn test_scale() {
        assert_eq!(SizeUnit::B.scale(700), 700);
        assert_eq!(SizeUnit::KB.scale(4096), 4);
        assert_eq!(SizeUnit::MB.scale(MIB + 1), 1);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("kb".parse::<SizeUnit>().unwrap(), SizeUnit::KB);
        assert_eq!("MB".parse::<SizeUnit>().unwrap(), SizeUnit::MB);
        assert_eq!("Unbounded".parse::<SizeUnit>().unwrap(), SizeUnit::Unbounded);
        assert!("xb".parse::<SizeUnit>().is_err());
        assert_eq!(SizeUnit::GB.to_string(), "gb");
    }

    #[test]
    fn test_admits() {
        assert!(SizeUnit::Unbounded.admits(SizeUnit::TB));
        assert!(SizeUnit::KB.admits(SizeUnit::KB));
        assert!(!SizeUnit::KB.admits(SizeUnit::B));
    }
}
