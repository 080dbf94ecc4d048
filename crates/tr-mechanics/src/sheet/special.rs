//! Toggleable special abilities (rage, magic rings, fighting styles).

use serde::{Deserialize, Serialize};

/// What a special ability modifies while active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialKind {
    /// Bonus to attack rolls.
    AttackBonus,
    /// Bonus to damage rolls.
    DamageBonus,
    /// Bonus to initiative rolls.
    InitiativeBonus,
    /// Bonus to saving throws.
    SaveBonus,
    /// Minimum roll value for damage dice.
    DiceMin,
    /// Lowest attack roll that counts as a critical hit.
    CritScore,
}

impl SpecialKind {
    /// Human-readable description.
    pub fn description(self) -> &'static str {
        match self {
            Self::AttackBonus => "Bonus to attack rolls.",
            Self::DamageBonus => "Bonus to damage rolls.",
            Self::InitiativeBonus => "Bonus to initiative rolls.",
            Self::SaveBonus => "Bonus to saving throws.",
            Self::DiceMin => "Minimum roll value for damage dice.",
            Self::CritScore => "Critical hit score.",
        }
    }
}

/// A named ability that contributes a value while active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialAbility {
    /// Display name.
    pub name: String,
    /// What it modifies.
    pub kind: SpecialKind,
    /// The bonus or threshold it provides.
    pub value: i32,
    /// Whether it currently applies.
    #[serde(default)]
    pub active: bool,
}

impl SpecialAbility {
    /// Create an inactive special ability.
    pub fn new(name: impl Into<String>, kind: SpecialKind, value: i32) -> Self {
        Self {
            name: name.into(),
            kind,
            value,
            active: false,
        }
    }

    /// Turn the ability on.
    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Turn the ability off.
    pub fn deactivate(&mut self) {
        self.active = false;
    }
}
