use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use tr_mechanics::{AdvantageMode, Roll, RollCategory, RollManager, RollResult, RollerConfig};

/// Read the preset file, treating a missing file as an empty collection.
fn load(config: &RollerConfig) -> Result<RollManager, String> {
    let mut presets = RollManager::new();
    if config.presets_path.exists() {
        presets
            .load_from_file(&config.presets_path)
            .map_err(|e| format!("{}: {e}", config.presets_path.display()))?;
    }
    Ok(presets)
}

fn save(config: &RollerConfig, presets: &RollManager) -> Result<(), String> {
    presets
        .save_to_file(&config.presets_path)
        .map_err(|e| format!("{}: {e}", config.presets_path.display()))
}

fn parse_category(category: Option<&str>) -> Result<Option<RollCategory>, String> {
    category
        .map(|c| c.parse::<RollCategory>().map_err(|e| e.to_string()))
        .transpose()
}

pub fn list(config: &RollerConfig, category: Option<&str>) -> Result<(), String> {
    let presets = load(config)?;
    let category = parse_category(category)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Name", "Dice", "Mode", "Category"]);

    let entries: Vec<(usize, &Roll)> = match category {
        Some(category) => presets.by_category(category),
        None => presets.iter().enumerate().collect(),
    };
    if entries.is_empty() {
        println!("  No presets found.");
        return Ok(());
    }

    for (index, roll) in &entries {
        table.add_row(vec![
            index.to_string(),
            roll.name.clone(),
            roll.shorthand(),
            roll.advantage_mode.to_string(),
            roll.category.map_or_else(String::new, |c| c.to_string()),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} presets", entries.len());

    Ok(())
}

pub fn add(
    config: &RollerConfig,
    name: &str,
    dice: &str,
    modifier: i32,
    mode: Option<AdvantageMode>,
    category: Option<&str>,
) -> Result<(), String> {
    let (count, die) = super::parse_dice(dice)?;
    let mut roll = Roll::new(name, count, die, modifier).with_mode(mode.unwrap_or_default());
    if let Some(category) = parse_category(category)? {
        roll = roll.with_category(category);
    }

    let mut presets = load(config)?;
    presets.add(roll.clone());
    save(config, &presets)?;

    println!(
        "  {} preset {}: {roll}",
        "Added".green().bold(),
        presets.len() - 1
    );
    Ok(())
}

pub fn remove(config: &RollerConfig, index: usize) -> Result<(), String> {
    let mut presets = load(config)?;
    let removed = presets.remove(index).map_err(|e| e.to_string())?;
    save(config, &presets)?;

    println!("  {} {removed}", "Removed".red().bold());
    Ok(())
}

pub fn roll(config: &RollerConfig, indices: &[usize], record: bool) -> Result<(), String> {
    let presets = load(config)?;
    if presets.is_empty() {
        return Err(format!(
            "no presets in {}",
            config.presets_path.display()
        ));
    }

    let selected: Vec<&Roll> = if indices.is_empty() {
        presets.iter().collect()
    } else {
        indices
            .iter()
            .map(|&i| presets.get(i).map_err(|e| e.to_string()))
            .collect::<Result<_, _>>()?
    };

    let mut rng = config.rng();
    let mut history: RollManager<RollResult> = RollManager::new();
    for roll in selected {
        let result = roll.execute(&mut rng).map_err(|e| e.to_string())?;
        println!("  {result}");
        if roll.is_single_d20() {
            println!("    {}", super::reaction_line(result.dice_total));
        }
        history.add(result);
    }

    if record {
        history
            .save_to_file(&config.history_path)
            .map_err(|e| format!("{}: {e}", config.history_path.display()))?;
    }

    Ok(())
}
