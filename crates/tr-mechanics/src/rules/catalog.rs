//! Fixed check catalogs: which ability governs each skill and save.

use crate::sheet::Ability;

/// The eighteen skills and their governing abilities, alphabetically.
pub const SKILLS: &[(&str, Ability)] = &[
    ("Acrobatics", Ability::Dexterity),
    ("Animal Handling", Ability::Wisdom),
    ("Arcana", Ability::Intelligence),
    ("Athletics", Ability::Strength),
    ("Deception", Ability::Charisma),
    ("History", Ability::Intelligence),
    ("Insight", Ability::Wisdom),
    ("Intimidation", Ability::Charisma),
    ("Investigation", Ability::Intelligence),
    ("Medicine", Ability::Wisdom),
    ("Nature", Ability::Intelligence),
    ("Perception", Ability::Wisdom),
    ("Performance", Ability::Charisma),
    ("Persuasion", Ability::Charisma),
    ("Religion", Ability::Intelligence),
    ("Sleight of Hand", Ability::Dexterity),
    ("Stealth", Ability::Dexterity),
    ("Survival", Ability::Wisdom),
];

/// One saving throw per ability, named after it.
pub const SAVING_THROWS: &[(&str, Ability)] = &[
    ("Strength", Ability::Strength),
    ("Dexterity", Ability::Dexterity),
    ("Constitution", Ability::Constitution),
    ("Intelligence", Ability::Intelligence),
    ("Wisdom", Ability::Wisdom),
    ("Charisma", Ability::Charisma),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_sizes() {
        assert_eq!(SKILLS.len(), 18);
        assert_eq!(SAVING_THROWS.len(), 6);
    }

    #[test]
    fn saves_cover_every_ability() {
        for ability in Ability::ALL {
            assert!(
                SAVING_THROWS
                    .iter()
                    .any(|(name, a)| *a == ability && *name == ability.name())
            );
        }
    }
}
