//! Serializable character profiles.
//!
//! A profile is the on-disk form of a character. Converting it goes through
//! [`Character::add_weapon`], so heavy weapons pick up the profile's
//! proficiency bonus exactly as if they were added by hand.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Ability, Character, DEFAULT_PROFICIENCY_BONUS, SpecialAbility, Weapon};
use crate::error::{MechError, MechResult};

/// A character as stored in a JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterProfile {
    /// Character name.
    pub name: String,
    /// Proficiency bonus.
    pub proficiency_bonus: i32,
    /// Ability scores; missing abilities score 0.
    pub abilities: BTreeMap<Ability, i32>,
    /// Proficient skills.
    pub skill_proficiencies: Vec<String>,
    /// Skills rolled with advantage.
    pub skill_advantages: Vec<String>,
    /// Skills rolled with disadvantage.
    pub skill_disadvantages: Vec<String>,
    /// Proficient saving throws.
    pub save_proficiencies: Vec<String>,
    /// Saving throws rolled with advantage.
    pub save_advantages: Vec<String>,
    /// Saving throws rolled with disadvantage.
    pub save_disadvantages: Vec<String>,
    /// Situational saving-throw bonus.
    pub save_bonus: i32,
    /// Situational damage bonus.
    pub damage_bonus: i32,
    /// Weapons, added in order.
    pub weapons: Vec<Weapon>,
    /// Special abilities.
    pub special_abilities: Vec<SpecialAbility>,
}

impl Default for CharacterProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            proficiency_bonus: DEFAULT_PROFICIENCY_BONUS,
            abilities: BTreeMap::new(),
            skill_proficiencies: Vec::new(),
            skill_advantages: Vec::new(),
            skill_disadvantages: Vec::new(),
            save_proficiencies: Vec::new(),
            save_advantages: Vec::new(),
            save_disadvantages: Vec::new(),
            save_bonus: 0,
            damage_bonus: 0,
            weapons: Vec::new(),
            special_abilities: Vec::new(),
        }
    }
}

impl CharacterProfile {
    /// Parse a profile from JSON text.
    pub fn from_json(text: &str) -> MechResult<Self> {
        Self::from_json_bytes(text.as_bytes())
    }

    /// Parse raw file contents. Bytes that aren't UTF-8 JSON are malformed.
    pub fn from_json_bytes(bytes: &[u8]) -> MechResult<Self> {
        serde_json::from_slice(bytes).map_err(|e| MechError::MalformedProfile(e.to_string()))
    }

    /// Read a profile from a JSON file.
    pub fn load(path: &Path) -> MechResult<Self> {
        let bytes = std::fs::read(path)?;
        let profile = Self::from_json_bytes(&bytes)?;
        tracing::info!(
            path = %path.display(),
            name = %profile.name,
            "loaded character profile"
        );
        Ok(profile)
    }

    /// Build the character this profile describes.
    pub fn into_character(self) -> Character {
        let mut character = Character::new(self.name);
        character.set_proficiency_bonus(self.proficiency_bonus);
        for (ability, score) in self.abilities {
            character.set_ability_score(ability, score);
        }
        character.skills.set_proficiencies(self.skill_proficiencies);
        character.skills.set_advantages(self.skill_advantages);
        character.skills.set_disadvantages(self.skill_disadvantages);
        character.saving_throws.set_proficiencies(self.save_proficiencies);
        character.saving_throws.set_advantages(self.save_advantages);
        character.saving_throws.set_disadvantages(self.save_disadvantages);
        character.save_bonus = self.save_bonus;
        character.damage_bonus = self.damage_bonus;
        for weapon in self.weapons {
            character.add_weapon(weapon);
        }
        for special in self.special_abilities {
            character.add_special_ability(special);
        }
        character
    }
}
