//! Roll configurations, executed results, and their collections.
//!
//! A [`Roll`] is a reusable configuration (a preset); a [`RollResult`] is a
//! roll that has been made. Both are kept in a [`RollManager`], which also
//! handles JSON persistence.

pub mod manager;

pub use manager::RollManager;

use std::str::FromStr;

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::dice::{AdvantageMode, DicePool, DieType, MAX_DICE, roll_d20};
use crate::error::{MechError, MechResult};

/// Optional tag used to filter preset collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RollCategory {
    /// A skill check.
    Skill,
    /// A saving throw.
    Save,
    /// A raw ability check.
    Ability,
    /// A weapon attack.
    Attack,
    /// Anything else.
    Custom,
}

impl RollCategory {
    /// Lowercase label, as stored in JSON.
    pub fn label(self) -> &'static str {
        match self {
            Self::Skill => "skill",
            Self::Save => "save",
            Self::Ability => "ability",
            Self::Attack => "attack",
            Self::Custom => "custom",
        }
    }
}

impl FromStr for RollCategory {
    type Err = MechError;

    fn from_str(s: &str) -> MechResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "skill" => Ok(Self::Skill),
            "save" => Ok(Self::Save),
            "ability" => Ok(Self::Ability),
            "attack" => Ok(Self::Attack),
            "custom" => Ok(Self::Custom),
            other => Err(MechError::UnknownCategory(other.to_string())),
        }
    }
}

impl std::fmt::Display for RollCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A named roll configuration.
///
/// Serializes to exactly `name`, `num_dice`, `dice_type`, `dice_modifier`,
/// and `advantage`, plus `category` when one is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roll {
    /// Display name.
    pub name: String,
    /// How many dice to roll.
    pub num_dice: u32,
    /// Which die.
    pub dice_type: DieType,
    /// Added to the dice total.
    pub dice_modifier: i32,
    /// Advantage mode, meaningful for a single d20.
    #[serde(rename = "advantage")]
    pub advantage_mode: AdvantageMode,
    /// Optional filter tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<RollCategory>,
}

impl Roll {
    /// A normal roll with no category.
    pub fn new(
        name: impl Into<String>,
        num_dice: u32,
        dice_type: DieType,
        dice_modifier: i32,
    ) -> Self {
        Self {
            name: name.into(),
            num_dice,
            dice_type,
            dice_modifier,
            advantage_mode: AdvantageMode::Normal,
            category: None,
        }
    }

    /// Set the advantage mode.
    pub fn with_mode(mut self, mode: AdvantageMode) -> Self {
        self.advantage_mode = mode;
        self
    }

    /// Tag the roll with a category.
    pub fn with_category(mut self, category: RollCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Whether this roll goes through the d20 advantage protocol.
    pub fn is_single_d20(&self) -> bool {
        self.num_dice == 1 && self.dice_type == DieType::D20
    }

    /// Dice notation with signed modifier, e.g. `1d20+5`.
    pub fn shorthand(&self) -> String {
        format!(
            "{}{}{}",
            self.num_dice,
            self.dice_type,
            signed(self.dice_modifier)
        )
    }

    /// Make the roll.
    ///
    /// A single d20 honours the advantage mode; anything else rolls
    /// `num_dice` dice and sums them. More than [`MAX_DICE`] dice is an error.
    pub fn execute(&self, rng: &mut StdRng) -> MechResult<RollResult> {
        if self.num_dice > MAX_DICE {
            return Err(MechError::TooManyDice {
                count: self.num_dice,
                max: MAX_DICE,
            });
        }
        if self.is_single_d20() {
            let d20 = roll_d20(self.advantage_mode, rng);
            return Ok(RollResult::new(self.clone(), d20.rolls, d20.selected));
        }
        let pool = DicePool::new().add(self.dice_type, self.num_dice);
        let rolled = pool.total_roll(rng)?;
        let total = rolled.total();
        Ok(RollResult::new(self.clone(), rolled.values, total))
    }
}

impl AsRef<Roll> for Roll {
    fn as_ref(&self) -> &Roll {
        self
    }
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.shorthand())?;
        if self.advantage_mode != AdvantageMode::Normal {
            write!(f, " ({})", self.advantage_mode)?;
        }
        Ok(())
    }
}

/// A roll that has been made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    /// The configuration that was rolled.
    #[serde(flatten)]
    pub roll: Roll,
    /// Raw dice values. Both dice for an advantage/disadvantage d20.
    pub dice_rolls: Vec<u32>,
    /// Dice total before the modifier (the kept die for a d20).
    pub dice_total: u32,
    /// `dice_total + dice_modifier`.
    pub total: i32,
}

impl RollResult {
    /// Record a result, computing the final total.
    pub fn new(roll: Roll, dice_rolls: Vec<u32>, dice_total: u32) -> Self {
        let total = dice_total as i32 + roll.dice_modifier;
        Self {
            roll,
            dice_rolls,
            dice_total,
            total,
        }
    }
}

impl AsRef<Roll> for RollResult {
    fn as_ref(&self) -> &Roll {
        &self.roll
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.roll.name.is_empty() {
            write!(f, "{} ", self.roll.name)?;
        }
        write!(f, "{}: ", self.roll.shorthand())?;
        if self.dice_rolls.len() > 1 {
            let values: Vec<String> = self.dice_rolls.iter().map(|v| v.to_string()).collect();
            write!(f, "[{}] ", values.join(", "))?;
        }
        write!(
            f,
            "{}{} = {}",
            self.dice_total,
            signed(self.roll.dice_modifier),
            self.total
        )?;
        if self.roll.is_single_d20() && self.roll.advantage_mode != AdvantageMode::Normal {
            write!(f, " ({})", self.roll.advantage_mode)?;
        }
        Ok(())
    }
}

fn signed(n: i32) -> String {
    if n >= 0 {
        format!("+{n}")
    } else {
        format!("-{}", n.unsigned_abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn roll_display() {
        let r = Roll::new("My Roll", 2, DieType::D20, 2);
        assert_eq!(r.to_string(), "My Roll: 2d20+2");
        let r = Roll::new("Sneak", 1, DieType::D20, -2).with_mode(AdvantageMode::Disadvantage);
        assert_eq!(r.to_string(), "Sneak: 1d20-2 (disadvantage)");
    }

    #[test]
    fn result_total_applies_modifier() {
        let r = RollResult::new(Roll::new("Fire", 3, DieType::D6, -4), vec![1, 2, 3], 6);
        assert_eq!(r.total, 2);
    }

    #[test]
    fn result_display_single_die() {
        let r = RollResult::new(Roll::new("", 1, DieType::D20, 3), vec![15], 15);
        assert_eq!(r.to_string(), "1d20+3: 15+3 = 18");
    }

    #[test]
    fn result_display_pool() {
        let r = RollResult::new(Roll::new("Fireball", 8, DieType::D6, 0), vec![3, 5], 8);
        assert_eq!(r.to_string(), "Fireball 8d6+0: [3, 5] 8+0 = 8");
    }

    #[test]
    fn result_display_advantage() {
        let roll =
            Roll::new("Athletics", 1, DieType::D20, 10).with_mode(AdvantageMode::Advantage);
        let r = RollResult::new(roll, vec![15, 8], 15);
        assert_eq!(r.to_string(), "Athletics 1d20+10: [15, 8] 15+10 = 25 (advantage)");
    }

    #[test]
    fn execute_single_d20_with_advantage() {
        let mut rng = StdRng::seed_from_u64(17);
        let roll = Roll::new("Check", 1, DieType::D20, 5).with_mode(AdvantageMode::Advantage);
        let result = roll.execute(&mut rng).unwrap();
        assert_eq!(result.dice_rolls.len(), 2);
        assert_eq!(result.dice_total, *result.dice_rolls.iter().max().unwrap());
        assert_eq!(result.total, result.dice_total as i32 + 5);
    }

    #[test]
    fn execute_pool_ignores_mode() {
        let mut rng = StdRng::seed_from_u64(17);
        let roll = Roll::new("Damage", 3, DieType::D8, 2).with_mode(AdvantageMode::Advantage);
        let result = roll.execute(&mut rng).unwrap();
        assert_eq!(result.dice_rolls.len(), 3);
        assert_eq!(result.dice_total, result.dice_rolls.iter().sum::<u32>());
        assert!(result.dice_rolls.iter().all(|v| (1..=8).contains(v)));
    }

    #[test]
    fn execute_rejects_too_many_dice() {
        let mut rng = StdRng::seed_from_u64(17);
        let roll = Roll::new("Avalanche", 4_000_000_000, DieType::D6, 0);
        assert!(matches!(
            roll.execute(&mut rng),
            Err(MechError::TooManyDice {
                count: 4_000_000_000,
                max: MAX_DICE
            })
        ));
        let at_cap = Roll::new("Swarm", MAX_DICE, DieType::D4, 0);
        assert_eq!(at_cap.execute(&mut rng).unwrap().dice_rolls.len(), 1000);
    }

    #[test]
    fn serialized_field_set() {
        let roll = Roll::new("My Other Roll", 1, DieType::D20, -2);
        let value = serde_json::to_value(&roll).unwrap();
        let obj = value.as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["advantage", "dice_modifier", "dice_type", "name", "num_dice"]
        );
        assert_eq!(obj["advantage"], "normal_roll");
        assert_eq!(obj["dice_type"], "d20");
        assert_eq!(obj["dice_modifier"], -2);
    }

    #[test]
    fn category_round_trip_and_parse() {
        let roll = Roll::new("Stealth", 1, DieType::D20, 4).with_category(RollCategory::Skill);
        let json = serde_json::to_string(&roll).unwrap();
        assert!(json.contains("\"category\":\"skill\""));
        let back: Roll = serde_json::from_str(&json).unwrap();
        assert_eq!(back, roll);

        assert_eq!("SAVE".parse::<RollCategory>().unwrap(), RollCategory::Save);
        assert!(matches!(
            "spell".parse::<RollCategory>(),
            Err(MechError::UnknownCategory(_))
        ));
    }
}
