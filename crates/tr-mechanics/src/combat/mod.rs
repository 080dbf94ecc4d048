//! Weapon damage resolution.
//!
//! A weapon attack rolls the weapon's damage dice, doubling the count on a
//! critical hit. Heavy weapons never roll below [`HEAVY_MIN_ROLL`] on a
//! damage die and add a flat [`HEAVY_DAMAGE_BONUS`].

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::dice::{DicePool, DieType, MAX_DICE};
use crate::error::{MechError, MechResult};
use crate::sheet::{Character, SpecialKind, Weapon};

/// Per-die damage floor for heavy weapons.
pub const HEAVY_MIN_ROLL: u32 = 3;

/// Flat damage bonus for heavy weapons.
pub const HEAVY_DAMAGE_BONUS: i32 = 4;

/// The damage dealt by one weapon attack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackDamage {
    /// Name of the weapon used.
    pub weapon: String,
    /// Individual damage dice.
    pub rolls: Vec<u32>,
    /// Everything added on top of the dice.
    pub bonuses: i32,
    /// Dice plus bonuses.
    pub total: i32,
    /// Whether the attack roll was a critical hit.
    pub critical: bool,
}

impl std::fmt::Display for AttackDamage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rolls: Vec<String> = self.rolls.iter().map(|v| v.to_string()).collect();
        write!(
            f,
            "{} Damage: [{}] + {} = {}",
            self.weapon,
            rolls.join(", "),
            self.bonuses,
            self.total
        )?;
        if self.critical {
            write!(f, " (critical)")?;
        }
        Ok(())
    }
}

/// Parse a damage expression such as `"2d6"` into a count and die type.
///
/// Counts above [`MAX_DICE`] are rejected.
pub fn parse_damage(expr: &str) -> MechResult<(u32, DieType)> {
    let invalid = || MechError::InvalidDamage(expr.to_string());
    let lower = expr.trim().to_lowercase();
    let (count, sides) = lower.split_once('d').ok_or_else(invalid)?;
    let count: u32 = if count.is_empty() {
        1
    } else {
        count.parse().map_err(|_| invalid())?
    };
    if count > MAX_DICE {
        return Err(invalid());
    }
    let sides: u32 = sides.parse().map_err(|_| invalid())?;
    let die = DieType::from_sides(sides).ok_or_else(invalid)?;
    Ok((count, die))
}

/// Whether `attack_roll` is a critical hit with `weapon`.
///
/// `expanded_from` lowers the bottom of the critical range, e.g. 19 for a
/// 19-20 range.
pub fn is_critical(attack_roll: u32, weapon: &Weapon, expanded_from: Option<u32>) -> bool {
    attack_roll == weapon.crit_score
        || expanded_from.is_some_and(|low| (low..=weapon.crit_score).contains(&attack_roll))
}

/// Roll damage for `character` attacking with the named weapon.
pub fn resolve_attack(
    character: &Character,
    attack_roll: u32,
    weapon_name: &str,
    rng: &mut StdRng,
) -> MechResult<AttackDamage> {
    let weapon = character
        .weapon(weapon_name)
        .ok_or_else(|| MechError::UnknownWeapon(weapon_name.to_string()))?;
    let (mut count, die_type) = weapon.damage_dice()?;

    let (floor, flat_bonus) = if weapon.is_heavy() {
        (HEAVY_MIN_ROLL, HEAVY_DAMAGE_BONUS)
    } else {
        (1, 0)
    };
    let min_roll = match character.dice_min() {
        Some(raised) => floor.max(raised).min(die_type.sides()),
        None => floor,
    };

    let critical = is_critical(attack_roll, weapon, character.expanded_crit_score());
    if critical {
        count = count
            .checked_mul(2)
            .ok_or_else(|| MechError::InvalidDamage(weapon.damage.clone()))?;
    }

    let rolls = DicePool::new()
        .add_floored(die_type, count, min_roll)
        .roll_all(rng)?;
    let bonuses = character.ability_modifier(weapon.ability)
        + flat_bonus
        + character.damage_bonus
        + character.special_bonus(SpecialKind::DamageBonus);
    let total = rolls.iter().sum::<u32>() as i32 + bonuses;

    tracing::debug!(
        weapon = %weapon.name,
        attack_roll,
        critical,
        ?rolls,
        bonuses,
        total,
        "resolved weapon attack"
    );

    Ok(AttackDamage {
        weapon: weapon.name.clone(),
        rolls,
        bonuses,
        total,
        critical,
    })
}
