//! Characters: ability scores, check registries, weapons, and bonuses.
//!
//! A [`Character`] resolves any named check to a net modifier and rolls
//! weapon damage. Weapons are owned by the character once added.

pub mod ability;
pub mod profile;
pub mod special;
pub mod weapon;

pub use ability::{Ability, modifier_for_score};
pub use profile::CharacterProfile;
pub use special::{SpecialAbility, SpecialKind};
pub use weapon::{Weapon, WeightClass};

use std::collections::HashMap;

use rand::rngs::StdRng;

use crate::combat::{self, AttackDamage};
use crate::dice::AdvantageMode;
use crate::error::MechResult;
use crate::rules::{CheckRegistry, CheckType};

/// Proficiency bonus of a freshly created character.
pub const DEFAULT_PROFICIENCY_BONUS: i32 = 2;

/// A player character's mechanical state.
#[derive(Debug, Clone)]
pub struct Character {
    name: String,
    ability_scores: HashMap<Ability, i32>,
    proficiency_bonus: i32,
    weapons: Vec<Weapon>,
    special_abilities: Vec<SpecialAbility>,
    /// Skill proficiencies, advantages, and disadvantages.
    pub skills: CheckRegistry,
    /// Saving-throw proficiencies, advantages, and disadvantages.
    pub saving_throws: CheckRegistry,
    /// Situational bonus added to weapon damage.
    pub damage_bonus: i32,
    /// Situational bonus added to every saving throw.
    pub save_bonus: i32,
}

impl Character {
    /// Create a character with no scores, no weapons, and proficiency +2.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ability_scores: HashMap::new(),
            proficiency_bonus: DEFAULT_PROFICIENCY_BONUS,
            weapons: Vec::new(),
            special_abilities: Vec::new(),
            skills: CheckRegistry::skills(),
            saving_throws: CheckRegistry::saving_throws(),
            damage_bonus: 0,
            save_bonus: 0,
        }
    }

    /// Character name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set one ability score.
    pub fn set_ability_score(&mut self, ability: Ability, score: i32) {
        self.ability_scores.insert(ability, score);
    }

    /// An ability score, or 0 if it was never set.
    pub fn ability_score(&self, ability: Ability) -> i32 {
        self.ability_scores.get(&ability).copied().unwrap_or(0)
    }

    /// The modifier derived from an ability score.
    pub fn ability_modifier(&self, ability: Ability) -> i32 {
        modifier_for_score(self.ability_score(ability))
    }

    /// Current proficiency bonus.
    pub fn proficiency_bonus(&self) -> i32 {
        self.proficiency_bonus
    }

    /// Change the proficiency bonus. Weapons already added keep their bonus.
    pub fn set_proficiency_bonus(&mut self, bonus: i32) {
        self.proficiency_bonus = bonus;
    }

    /// Take ownership of a weapon.
    ///
    /// A heavy weapon's `damage_bonus` grows by the proficiency bonus at the
    /// time of the call.
    pub fn add_weapon(&mut self, mut weapon: Weapon) {
        if weapon.is_heavy() {
            weapon.damage_bonus += self.proficiency_bonus;
        }
        tracing::debug!(character = %self.name, weapon = %weapon.name, "added weapon");
        self.weapons.push(weapon);
    }

    /// All owned weapons in the order they were added.
    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    /// The first owned weapon with the given name.
    pub fn weapon(&self, name: &str) -> Option<&Weapon> {
        self.weapons.iter().find(|w| w.name == name)
    }

    /// Names of owned weapons in order.
    pub fn weapon_names(&self) -> Vec<&str> {
        self.weapons.iter().map(|w| w.name.as_str()).collect()
    }

    /// Add a special ability (inactive unless it was built active).
    pub fn add_special_ability(&mut self, ability: SpecialAbility) {
        self.special_abilities.push(ability);
    }

    /// All special abilities.
    pub fn special_abilities(&self) -> &[SpecialAbility] {
        &self.special_abilities
    }

    /// Activate exactly the named special abilities and deactivate the rest.
    pub fn set_active_special_abilities<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<S> = names.into_iter().collect();
        for ability in &mut self.special_abilities {
            if names.iter().any(|n| n.as_ref() == ability.name) {
                ability.activate();
            } else {
                ability.deactivate();
            }
        }
    }

    fn active_specials(&self, kind: SpecialKind) -> impl Iterator<Item = &SpecialAbility> {
        self.special_abilities
            .iter()
            .filter(move |a| a.active && a.kind == kind)
    }

    /// Sum of all active special abilities of the given kind.
    pub fn special_bonus(&self, kind: SpecialKind) -> i32 {
        self.active_specials(kind).map(|a| a.value).sum()
    }

    /// Positive values of the active specials of one kind.
    fn positive_special_values(&self, kind: SpecialKind) -> impl Iterator<Item = u32> + '_ {
        self.active_specials(kind)
            .filter_map(|a| u32::try_from(a.value).ok())
            .filter(|v| *v > 0)
    }

    /// The highest active damage-die floor, if any.
    pub fn dice_min(&self) -> Option<u32> {
        self.positive_special_values(SpecialKind::DiceMin).max()
    }

    /// The lowest active critical-hit threshold, if any. Values below 1
    /// are ignored.
    pub fn expanded_crit_score(&self) -> Option<u32> {
        self.positive_special_values(SpecialKind::CritScore).min()
    }

    /// Dexterity modifier plus active initiative bonuses.
    pub fn initiative_modifier(&self) -> i32 {
        self.ability_modifier(Ability::Dexterity)
            + self.special_bonus(SpecialKind::InitiativeBonus)
    }

    /// Net modifier for a named check.
    ///
    /// For attacks, `check` is the weapon name unless `weapon_override`
    /// supplies the weapon directly; proficiency is always applied. An
    /// unknown check contributes no ability modifier.
    pub fn check_modifier(
        &self,
        check: &str,
        check_type: CheckType,
        weapon_override: Option<&Weapon>,
    ) -> i32 {
        let (ability, proficient, bonus) = match check_type {
            CheckType::Skill => (
                self.skills.ability_for(check),
                self.skills.is_proficient(check),
                0,
            ),
            CheckType::Save => (
                self.saving_throws.ability_for(check),
                self.saving_throws.is_proficient(check),
                self.save_bonus + self.special_bonus(SpecialKind::SaveBonus),
            ),
            CheckType::Attack => {
                let weapon = weapon_override.or_else(|| self.weapon(check));
                (
                    weapon.map(|w| w.ability),
                    true,
                    self.special_bonus(SpecialKind::AttackBonus),
                )
            }
        };

        let ability_mod = ability.map_or(0, |a| self.ability_modifier(a));
        let proficiency = if proficient { self.proficiency_bonus } else { 0 };
        ability_mod + proficiency + bonus
    }

    /// The roll mode a check defaults to from the character's markers.
    pub fn roll_mode(&self, check: &str, check_type: CheckType) -> AdvantageMode {
        match check_type {
            CheckType::Skill => self.skills.roll_mode(check),
            CheckType::Save => self.saving_throws.roll_mode(check),
            CheckType::Attack => AdvantageMode::Normal,
        }
    }

    /// Roll damage for an attack with the named weapon.
    pub fn weapon_attack(
        &self,
        attack_roll: u32,
        weapon_name: &str,
        rng: &mut StdRng,
    ) -> MechResult<AttackDamage> {
        combat::resolve_attack(self, attack_roll, weapon_name, rng)
    }
}
