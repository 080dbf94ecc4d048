use tr_mechanics::{AdvantageMode, Roll, RollerConfig};

pub fn run(
    config: &RollerConfig,
    dice: &str,
    modifier: i32,
    mode: Option<AdvantageMode>,
) -> Result<(), String> {
    let (count, die) = super::parse_dice(dice)?;
    let roll = Roll::new("", count, die, modifier).with_mode(mode.unwrap_or_default());

    let mut rng = config.rng();
    let result = roll.execute(&mut rng).map_err(|e| e.to_string())?;

    println!("  {result}");
    if roll.is_single_d20() {
        println!("  {}", super::reaction_line(result.dice_total));
    }

    Ok(())
}
