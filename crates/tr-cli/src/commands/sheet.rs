use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use tr_mechanics::{AdvantageMode, Character, CheckRegistry, CheckType};

pub fn run(character: Option<&Path>) -> Result<(), String> {
    let character = super::load_character(character)?;

    println!("  {}", character.name().bold());
    println!(
        "  Proficiency {} | Initiative {}",
        super::signed(character.proficiency_bonus()),
        super::signed(character.initiative_modifier())
    );
    println!();

    println!("{}", check_table(&character, &character.skills, CheckType::Skill));
    println!();
    println!(
        "{}",
        check_table(&character, &character.saving_throws, CheckType::Save)
    );

    if !character.weapons().is_empty() {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Weapon", "Damage", "Type", "Attack", "Weight", "Crit"]);
        for weapon in character.weapons() {
            table.add_row(vec![
                weapon.name.clone(),
                weapon.damage.clone(),
                weapon.damage_type.clone(),
                super::signed(character.check_modifier("", CheckType::Attack, Some(weapon))),
                weapon.weight_type.to_string(),
                weapon.crit_score.to_string(),
            ]);
        }
        println!();
        println!("{table}");
    }

    if !character.special_abilities().is_empty() {
        println!();
        for special in character.special_abilities() {
            println!(
                "  {} {}  {}",
                special.name.bold(),
                super::signed(special.value),
                special.kind.description().dimmed()
            );
        }
    }

    Ok(())
}

fn check_table(character: &Character, registry: &CheckRegistry, check_type: CheckType) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    let header = match check_type {
        CheckType::Save => "Saving Throw",
        _ => "Skill",
    };
    table.set_header(vec![header, "Ability", "Modifier", "Proficient", "Roll"]);

    for name in registry.check_names() {
        let ability = registry
            .ability_for(name)
            .map_or("-", |a| a.abbreviation());
        let mode = match registry.roll_mode(name) {
            AdvantageMode::Normal => String::new(),
            other => other.to_string(),
        };
        table.add_row(vec![
            name.to_string(),
            ability.to_string(),
            super::signed(character.check_modifier(name, check_type, None)),
            if registry.is_proficient(name) { "yes" } else { "" }.to_string(),
            mode,
        ]);
    }
    table
}
