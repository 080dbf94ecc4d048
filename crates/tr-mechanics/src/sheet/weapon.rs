//! Weapons and their damage profiles.

use serde::{Deserialize, Serialize};

use crate::combat::parse_damage;
use crate::dice::DieType;
use crate::error::MechResult;
use crate::sheet::Ability;

/// Weight class of a weapon. Heavy weapons get a damage floor and bonus.
///
/// Stored as a free string: `"Heavy"` in any case is heavy, and every other
/// label (`"Normal"`, `"Light"`, `"Finesse"`, ...) is a normal weapon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WeightClass {
    /// A heavy weapon.
    Heavy,
    /// Anything that isn't heavy.
    #[default]
    Normal,
}

impl From<String> for WeightClass {
    fn from(label: String) -> Self {
        if label.trim().eq_ignore_ascii_case("heavy") {
            Self::Heavy
        } else {
            Self::Normal
        }
    }
}

impl From<WeightClass> for String {
    fn from(weight: WeightClass) -> Self {
        weight.to_string()
    }
}

impl std::fmt::Display for WeightClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Heavy => write!(f, "Heavy"),
            Self::Normal => write!(f, "Normal"),
        }
    }
}

fn default_crit_score() -> u32 {
    20
}

/// A weapon's static damage profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    /// Weapon name, used to select it for attacks.
    pub name: String,
    /// Descriptive category such as "martial" or "simple".
    pub category: String,
    /// Descriptive damage type such as "slashing".
    pub damage_type: String,
    /// Damage dice expression, e.g. `"2d6"`.
    pub damage: String,
    /// Ability used for attack and damage.
    #[serde(default = "default_ability")]
    pub ability: Ability,
    /// Heavy or normal.
    #[serde(default)]
    pub weight_type: WeightClass,
    /// Attack roll that scores a critical hit.
    #[serde(default = "default_crit_score")]
    pub crit_score: u32,
    /// Bonus accumulated when the weapon is added to a character.
    #[serde(default)]
    pub damage_bonus: i32,
}

fn default_ability() -> Ability {
    Ability::Strength
}

impl Weapon {
    /// A normal-weight Strength weapon that crits on 20.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        damage_type: impl Into<String>,
        damage: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            damage_type: damage_type.into(),
            damage: damage.into(),
            ability: Ability::Strength,
            weight_type: WeightClass::Normal,
            crit_score: 20,
            damage_bonus: 0,
        }
    }

    /// Use a different governing ability.
    pub fn with_ability(mut self, ability: Ability) -> Self {
        self.ability = ability;
        self
    }

    /// Set the weight class.
    pub fn with_weight(mut self, weight_type: WeightClass) -> Self {
        self.weight_type = weight_type;
        self
    }

    /// Set the critical-hit threshold.
    pub fn with_crit_score(mut self, crit_score: u32) -> Self {
        self.crit_score = crit_score;
        self
    }

    /// Whether this is a heavy weapon.
    pub fn is_heavy(&self) -> bool {
        self.weight_type == WeightClass::Heavy
    }

    /// Parse the damage expression into a dice count and die type.
    pub fn damage_dice(&self) -> MechResult<(u32, DieType)> {
        parse_damage(&self.damage)
    }
}

impl std::fmt::Display for Weapon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({} {}, {} {}, +{} damage, {})",
            self.name,
            self.weight_type,
            self.category,
            self.damage,
            self.damage_type,
            self.damage_bonus,
            self.ability
        )
    }
}
