//! Check resolution: which checks exist and how a check is rolled.
//!
//! [`perform_check`] is the full pipeline: resolve the character's modifier,
//! roll the d20 under the right advantage mode, record the result, and roll
//! damage for attacks.

pub mod catalog;
pub mod registry;

pub use registry::CheckRegistry;

use std::str::FromStr;

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::combat::AttackDamage;
use crate::dice::{AdvantageMode, D20Roll, DieType, roll_d20};
use crate::error::{MechError, MechResult};
use crate::roll::{Roll, RollCategory, RollResult};
use crate::sheet::Character;

/// The kind of d20 check being made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckType {
    /// A skill check, named after the skill.
    Skill,
    /// A saving throw, named after the ability.
    Save,
    /// A weapon attack, named after the weapon.
    Attack,
}

impl FromStr for CheckType {
    type Err = MechError;

    fn from_str(s: &str) -> MechResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "skill" => Ok(Self::Skill),
            "save" => Ok(Self::Save),
            "attack" => Ok(Self::Attack),
            other => Err(MechError::InvalidCheckType(other.to_string())),
        }
    }
}

impl std::fmt::Display for CheckType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Skill => write!(f, "skill"),
            Self::Save => write!(f, "save"),
            Self::Attack => write!(f, "attack"),
        }
    }
}

impl From<CheckType> for RollCategory {
    fn from(check_type: CheckType) -> Self {
        match check_type {
            CheckType::Skill => Self::Skill,
            CheckType::Save => Self::Save,
            CheckType::Attack => Self::Attack,
        }
    }
}

/// Everything produced by one check.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    /// Net modifier applied to the d20.
    pub modifier: i32,
    /// The raw d20 roll.
    pub d20: D20Roll,
    /// The roll as recorded for history.
    pub result: RollResult,
    /// Damage, for attacks.
    pub damage: Option<AttackDamage>,
}

impl CheckOutcome {
    /// The kept d20 value before the modifier.
    pub fn natural(&self) -> u32 {
        self.d20.selected
    }

    /// Final check total.
    pub fn total(&self) -> i32 {
        self.result.total
    }
}

/// Roll a named check for `character`.
///
/// With `mode` unset, the character's advantage/disadvantage markers for the
/// check decide the mode. Attacks also roll damage, using the kept d20 value
/// to decide a critical hit, and fail with `UnknownWeapon` if the character
/// doesn't own the weapon.
pub fn perform_check(
    character: &Character,
    check: &str,
    check_type: CheckType,
    mode: Option<AdvantageMode>,
    rng: &mut StdRng,
) -> MechResult<CheckOutcome> {
    let modifier = character.check_modifier(check, check_type, None);
    let mode = mode.unwrap_or_else(|| character.roll_mode(check, check_type));
    let d20 = roll_d20(mode, rng);

    let roll = Roll::new(check, 1, DieType::D20, modifier)
        .with_mode(mode)
        .with_category(check_type.into());
    let result = RollResult::new(roll, d20.rolls.clone(), d20.selected);

    let damage = match check_type {
        CheckType::Attack => Some(character.weapon_attack(d20.selected, check, rng)?),
        CheckType::Skill | CheckType::Save => None,
    };

    tracing::debug!(
        character = %character.name(),
        check,
        %check_type,
        modifier,
        total = result.total,
        "performed check"
    );

    Ok(CheckOutcome {
        modifier,
        d20,
        result,
        damage,
    })
}
