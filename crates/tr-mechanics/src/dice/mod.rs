//! Dice types, pools, and rolling.
//!
//! The dice catalog is the fixed polyhedral set (d4 through d100). A [`Die`]
//! pairs a catalog entry with a minimum-roll floor, and a [`DicePool`] rolls
//! any number of them together. The d20 advantage protocol lives in
//! [`roll_d20`].

pub mod pool;
pub mod roll;

pub use pool::DicePool;
pub use roll::{D20Roll, PoolRoll, roll_d20};

use std::str::FromStr;

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

/// Most dice a single roll or damage expression may use.
pub const MAX_DICE: u32 = 1000;

/// A polyhedral die type from the dice catalog.
///
/// Serialized as its label (`"d20"`), which is also the `dice_type` field of
/// persisted rolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DieType {
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die.
    #[default]
    D20,
    /// Percentile die (1-100).
    D100,
}

impl DieType {
    /// Every catalogued die, smallest first.
    pub const ALL: [DieType; 7] = [
        Self::D4,
        Self::D6,
        Self::D8,
        Self::D10,
        Self::D12,
        Self::D20,
        Self::D100,
    ];

    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::D100 => 100,
        }
    }

    /// The catalog label, e.g. `"d20"`.
    pub fn label(self) -> &'static str {
        match self {
            Self::D4 => "d4",
            Self::D6 => "d6",
            Self::D8 => "d8",
            Self::D10 => "d10",
            Self::D12 => "d12",
            Self::D20 => "d20",
            Self::D100 => "d100",
        }
    }

    /// Look up a die by its number of sides.
    pub fn from_sides(sides: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.sides() == sides)
    }

    /// Labels of the whole catalog in order.
    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|d| d.label()).collect()
    }
}

impl FromStr for DieType {
    type Err = MechError;

    fn from_str(s: &str) -> MechResult<Self> {
        let s = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|d| d.label() == s)
            .ok_or(MechError::InvalidDieType(s))
    }
}

impl TryFrom<String> for DieType {
    type Error = MechError;

    fn try_from(value: String) -> MechResult<Self> {
        value.parse()
    }
}

impl From<DieType> for String {
    fn from(die: DieType) -> Self {
        die.label().to_string()
    }
}

impl std::fmt::Display for DieType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single die with a minimum-roll floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Die {
    /// Which catalogued die this is.
    pub die_type: DieType,
    /// Lowest value this die can produce (normally 1).
    pub min_roll: u32,
}

impl Die {
    /// A standard die rolling `1..=sides`.
    pub fn new(die_type: DieType) -> Self {
        Self {
            die_type,
            min_roll: 1,
        }
    }

    /// A die that never rolls below `min_roll`.
    pub fn with_min_roll(die_type: DieType, min_roll: u32) -> Self {
        Self { die_type, min_roll }
    }

    /// Number of sides on the underlying die.
    pub fn sides(&self) -> u32 {
        self.die_type.sides()
    }

    /// Roll uniformly in `min_roll..=sides`.
    pub fn roll(&self, rng: &mut StdRng) -> MechResult<u32> {
        let sides = self.sides();
        if self.min_roll > sides {
            return Err(MechError::InvalidRange {
                min: self.min_roll,
                sides,
            });
        }
        Ok(rng.random_range(self.min_roll..=sides))
    }
}

/// How a d20 is rolled: once, or twice keeping the better or worse die.
///
/// Persisted under the `advantage` key as `normal_roll`, `advantage_roll`,
/// or `disadvantage_roll`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AdvantageMode {
    /// A single d20.
    #[default]
    #[serde(rename = "normal_roll")]
    Normal,
    /// Two d20s, keep the highest.
    #[serde(rename = "advantage_roll")]
    Advantage,
    /// Two d20s, keep the lowest.
    #[serde(rename = "disadvantage_roll")]
    Disadvantage,
}

impl AdvantageMode {
    /// Build a mode from a pair of flags. Both set cancel out.
    pub fn from_flags(advantage: bool, disadvantage: bool) -> Self {
        match (advantage, disadvantage) {
            (true, false) => Self::Advantage,
            (false, true) => Self::Disadvantage,
            _ => Self::Normal,
        }
    }
}

impl std::fmt::Display for AdvantageMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Advantage => write!(f, "advantage"),
            Self::Disadvantage => write!(f, "disadvantage"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn die_sides() {
        assert_eq!(DieType::D4.sides(), 4);
        assert_eq!(DieType::D6.sides(), 6);
        assert_eq!(DieType::D8.sides(), 8);
        assert_eq!(DieType::D10.sides(), 10);
        assert_eq!(DieType::D12.sides(), 12);
        assert_eq!(DieType::D20.sides(), 20);
        assert_eq!(DieType::D100.sides(), 100);
    }

    #[test]
    fn die_from_str() {
        assert_eq!("d20".parse::<DieType>().unwrap(), DieType::D20);
        assert_eq!("D6".parse::<DieType>().unwrap(), DieType::D6);
        assert_eq!(" d100 ".parse::<DieType>().unwrap(), DieType::D100);
        assert!(matches!(
            "d30".parse::<DieType>(),
            Err(MechError::InvalidDieType(_))
        ));
        assert!("foo".parse::<DieType>().is_err());
    }

    #[test]
    fn catalog_order_and_default() {
        assert_eq!(
            DieType::labels(),
            vec!["d4", "d6", "d8", "d10", "d12", "d20", "d100"]
        );
        assert_eq!(DieType::default(), DieType::D20);
        assert_eq!(DieType::from_sides(12), Some(DieType::D12));
        assert_eq!(DieType::from_sides(7), None);
    }

    #[test]
    fn die_type_serializes_as_label() {
        let json = serde_json::to_string(&DieType::D8).unwrap();
        assert_eq!(json, "\"d8\"");
        let back: DieType = serde_json::from_str("\"d12\"").unwrap();
        assert_eq!(back, DieType::D12);
        assert!(serde_json::from_str::<DieType>("\"d7\"").is_err());
    }

    #[test]
    fn floored_die_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let die = Die::with_min_roll(DieType::D6, 3);
        for _ in 0..500 {
            let v = die.roll(&mut rng).unwrap();
            assert!((3..=6).contains(&v));
        }
    }

    #[test]
    fn min_equal_to_sides_always_max() {
        let mut rng = StdRng::seed_from_u64(1);
        let die = Die::with_min_roll(DieType::D4, 4);
        assert_eq!(die.roll(&mut rng).unwrap(), 4);
    }

    #[test]
    fn min_above_sides_is_invalid_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let die = Die::with_min_roll(DieType::D4, 5);
        assert!(matches!(
            die.roll(&mut rng),
            Err(MechError::InvalidRange { min: 5, sides: 4 })
        ));
    }

    #[test]
    fn advantage_mode_serde_tags() {
        assert_eq!(
            serde_json::to_string(&AdvantageMode::Normal).unwrap(),
            "\"normal_roll\""
        );
        assert_eq!(
            serde_json::to_string(&AdvantageMode::Advantage).unwrap(),
            "\"advantage_roll\""
        );
        assert_eq!(
            serde_json::to_string(&AdvantageMode::Disadvantage).unwrap(),
            "\"disadvantage_roll\""
        );
    }

    #[test]
    fn advantage_mode_from_flags() {
        assert_eq!(AdvantageMode::from_flags(true, false), AdvantageMode::Advantage);
        assert_eq!(
            AdvantageMode::from_flags(false, true),
            AdvantageMode::Disadvantage
        );
        assert_eq!(AdvantageMode::from_flags(true, true), AdvantageMode::Normal);
        assert_eq!(AdvantageMode::from_flags(false, false), AdvantageMode::Normal);
    }
}
