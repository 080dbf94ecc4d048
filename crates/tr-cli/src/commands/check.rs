use std::path::Path;

use colored::Colorize;
use tr_mechanics::{AdvantageMode, Character, CheckType, RollerConfig, perform_check};

pub fn run(
    config: &RollerConfig,
    name: &str,
    kind: &str,
    character: Option<&Path>,
    active: &[String],
    mode: Option<AdvantageMode>,
) -> Result<(), String> {
    let check_type = kind.parse::<CheckType>().map_err(|e| e.to_string())?;
    let mut character = super::load_character(character)?;
    for special in active {
        let known = character
            .special_abilities()
            .iter()
            .any(|s| &s.name == special);
        if !known {
            return Err(format!("unknown special ability: {special}"));
        }
    }
    character.set_active_special_abilities(active);

    let check = resolve_name(&character, name, check_type)?;

    let mut rng = config.rng();
    let outcome = perform_check(&character, &check, check_type, mode, &mut rng)
        .map_err(|e| e.to_string())?;

    println!(
        "  {} {} ({}) {}",
        character.name().bold(),
        check,
        check_type,
        super::signed(outcome.modifier)
    );
    println!("  {}", outcome.result);
    println!("  {}", super::reaction_line(outcome.natural()));
    if let Some(damage) = &outcome.damage {
        let line = damage.to_string();
        if damage.critical {
            println!("  {}", line.yellow().bold());
        } else {
            println!("  {line}");
        }
    }

    Ok(())
}

/// Match a user-typed name against the character's checks or weapons.
fn resolve_name(
    character: &Character,
    name: &str,
    check_type: CheckType,
) -> Result<String, String> {
    let candidates = match check_type {
        CheckType::Skill => character.skills.check_names(),
        CheckType::Save => character.saving_throws.check_names(),
        CheckType::Attack => character.weapon_names(),
    };
    candidates
        .into_iter()
        .find(|c| c.eq_ignore_ascii_case(name))
        .map(str::to_string)
        .ok_or_else(|| match check_type {
            CheckType::Attack => format!("unknown weapon: {name}"),
            _ => format!("unknown {check_type}: {name}"),
        })
}
