pub mod check;
pub mod preset;
pub mod roll;
pub mod sheet;

use std::path::Path;

use colored::Colorize;
use tr_mechanics::combat::parse_damage;
use tr_mechanics::{
    Ability, Character, CharacterProfile, DieType, ReactionSource, SpecialAbility, SpecialKind,
    StockReactions, Weapon, WeightClass,
};

/// Load a character profile, or fall back to the built-in sample character.
fn load_character(path: Option<&Path>) -> Result<Character, String> {
    match path {
        Some(path) => CharacterProfile::load(path)
            .map(CharacterProfile::into_character)
            .map_err(|e| format!("{}: {e}", path.display())),
        None => Ok(sample_character()),
    }
}

/// Warryn, a level 9 barbarian.
fn sample_character() -> Character {
    let mut c = Character::new("Warryn");
    c.set_proficiency_bonus(4);
    for (ability, score) in [
        (Ability::Strength, 19),
        (Ability::Dexterity, 14),
        (Ability::Constitution, 18),
        (Ability::Intelligence, 9),
        (Ability::Wisdom, 12),
        (Ability::Charisma, 10),
    ] {
        c.set_ability_score(ability, score);
    }
    c.save_bonus = 1;

    c.saving_throws.set_proficiencies(["Strength", "Constitution"]);
    c.saving_throws
        .set_advantages(["Intelligence", "Wisdom", "Charisma"]);
    c.skills.set_proficiencies([
        "Animal Handling",
        "Athletics",
        "Intimidation",
        "Perception",
        "Survival",
    ]);
    c.skills.set_advantages(["Deception", "Sleight of Hand"]);
    c.skills.set_disadvantages(["Stealth"]);

    c.add_weapon(
        Weapon::new("Glaive", "martial", "slashing", "1d10").with_weight(WeightClass::Heavy),
    );
    c.add_weapon(
        Weapon::new("Maul", "martial", "bludgeoning", "2d6").with_weight(WeightClass::Heavy),
    );
    c.add_weapon(
        Weapon::new("Longbow", "martial", "piercing", "1d8")
            .with_ability(Ability::Dexterity)
            .with_weight(WeightClass::Heavy),
    );
    c.add_weapon(Weapon::new("Spear", "simple", "piercing", "1d8"));

    let pb = c.proficiency_bonus();
    c.add_special_ability(SpecialAbility::new("Rage", SpecialKind::DamageBonus, 2));
    c.add_special_ability(SpecialAbility::new(
        "Great Weapon Master",
        SpecialKind::DamageBonus,
        pb,
    ));
    c.add_special_ability(SpecialAbility::new(
        "Great Weapon Fighting",
        SpecialKind::DiceMin,
        3,
    ));
    c.add_special_ability(SpecialAbility::new(
        "Ring of Protection",
        SpecialKind::SaveBonus,
        1,
    ));
    c
}

/// Parse `<count>d<sides>`, where the count may be omitted.
fn parse_dice(expr: &str) -> Result<(u32, DieType), String> {
    parse_damage(expr).map_err(|e| e.to_string())
}

/// Format a modifier with its sign.
fn signed(n: i32) -> String {
    if n >= 0 {
        format!("+{n}")
    } else {
        n.to_string()
    }
}

/// The reaction line for a natural d20, coloured at the extremes.
fn reaction_line(natural: u32) -> colored::ColoredString {
    let message = StockReactions.reaction_for(natural as i32);
    match natural {
        20 => message.green().bold(),
        1 => message.red().bold(),
        _ => message.italic(),
    }
}
