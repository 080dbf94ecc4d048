//! Integration tests for the tr-cli binary commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tr() -> Command {
    let mut cmd = Command::cargo_bin("tr").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

fn presets_arg(dir: &TempDir) -> String {
    dir.path().join("presets.json").to_str().unwrap().to_string()
}

/// A small profile: proficient in Athletics, owns a heavy greataxe.
fn write_profile(dir: &Path) -> String {
    let path = dir.join("brakka.json");
    fs::write(
        &path,
        r#"{
    "name": "Brakka",
    "proficiency_bonus": 3,
    "abilities": {"Strength": 16, "Dexterity": 8},
    "skill_proficiencies": ["Athletics"],
    "weapons": [
        {"name": "Greataxe", "category": "martial", "damage_type": "slashing",
         "damage": "1d12", "weight_type": "Heavy"}
    ]
}"#,
    )
    .unwrap();
    path.to_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// roll
// ---------------------------------------------------------------------------

#[test]
fn roll_pool_lists_dice() {
    tr().args(["roll", "2d6", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2d6+0: ["));
}

#[test]
fn roll_single_d20_shows_reaction() {
    tr().args(["roll", "d20", "-m", "3", "--advantage", "--seed", "5"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("1d20+3: [")
                .and(predicate::str::contains("(advantage)")),
        );
}

#[test]
fn roll_negative_modifier() {
    tr().args(["roll", "1d20", "-m", "-2", "--seed", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1d20-2:"));
}

#[test]
fn roll_is_reproducible_with_seed() {
    let first = tr().args(["roll", "4d8", "--seed", "99"]).output().unwrap();
    let second = tr().args(["roll", "4d8", "--seed", "99"]).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn roll_rejects_unknown_die() {
    tr().args(["roll", "3d7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid damage expression"));
}

#[test]
fn roll_rejects_huge_dice_count() {
    tr().args(["roll", "4000000000d6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid damage expression"));
}

#[test]
fn roll_rejects_both_modes() {
    tr().args(["roll", "d20", "--advantage", "--disadvantage"])
        .assert()
        .failure();
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_proficient_skill() {
    tr().args(["check", "athletics", "--seed", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Warryn Athletics (skill) +8"));
}

#[test]
fn check_uses_character_disadvantage() {
    tr().args(["check", "Stealth", "--seed", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(disadvantage)"));
}

#[test]
fn check_explicit_mode_wins() {
    tr().args(["check", "Stealth", "--advantage", "--seed", "4"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("(advantage)")
                .and(predicate::str::contains("(disadvantage)").not()),
        );
}

#[test]
fn check_save_with_active_special() {
    tr().args([
        "check",
        "Strength",
        "--kind",
        "save",
        "--active",
        "Ring of Protection",
        "--seed",
        "4",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Strength (save) +10"));
}

#[test]
fn check_unknown_special_ability() {
    tr().args(["check", "Athletics", "--active", "Bardic Inspiration"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "unknown special ability: Bardic Inspiration",
        ));
}

#[test]
fn check_attack_rolls_damage() {
    tr().args(["check", "maul", "--kind", "attack", "--seed", "3"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Maul (attack) +8")
                .and(predicate::str::contains("Maul Damage: [")),
        );
}

#[test]
fn check_unknown_weapon() {
    tr().args(["check", "Bow", "--kind", "attack"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown weapon: Bow"));
}

#[test]
fn check_invalid_kind() {
    tr().args(["check", "Athletics", "--kind", "spell"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid check type: spell"));
}

#[test]
fn check_unknown_skill() {
    tr().args(["check", "Juggling"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown skill: Juggling"));
}

#[test]
fn check_with_profile() {
    let dir = TempDir::new().unwrap();
    let profile = write_profile(dir.path());
    tr().args(["check", "Athletics", "--character", &profile, "--seed", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Brakka Athletics (skill) +6"));
}

#[test]
fn check_profile_with_light_weapon() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nim.json");
    fs::write(
        &path,
        r#"{
    "name": "Nim",
    "abilities": {"Dexterity": 16},
    "weapons": [
        {"name": "Rapier", "category": "martial", "damage_type": "piercing",
         "damage": "1d8", "weight_type": "Light", "ability": "Dexterity"}
    ]
}"#,
    )
    .unwrap();
    tr().args([
        "check",
        "rapier",
        "--kind",
        "attack",
        "--character",
        path.to_str().unwrap(),
        "--seed",
        "6",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Nim Rapier (attack) +5"));
}

#[test]
fn check_missing_profile() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nobody.json");
    tr().args(["check", "Athletics", "--character", missing.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nobody.json"));
}

// ---------------------------------------------------------------------------
// sheet
// ---------------------------------------------------------------------------

#[test]
fn sheet_shows_sample_character() {
    tr().arg("sheet")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Warryn")
                .and(predicate::str::contains("Animal Handling"))
                .and(predicate::str::contains("Saving Throw"))
                .and(predicate::str::contains("Glaive"))
                .and(predicate::str::contains("Great Weapon Fighting")),
        );
}

#[test]
fn sheet_from_profile() {
    let dir = TempDir::new().unwrap();
    let profile = write_profile(dir.path());
    tr().args(["sheet", "--character", &profile])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Brakka")
                .and(predicate::str::contains("Greataxe"))
                .and(predicate::str::contains("Glaive").not()),
        );
}

// ---------------------------------------------------------------------------
// preset
// ---------------------------------------------------------------------------

#[test]
fn preset_list_empty() {
    let dir = TempDir::new().unwrap();
    tr().args(["preset", "-p", &presets_arg(&dir), "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No presets found"));
}

#[test]
fn preset_add_list_remove() {
    let dir = TempDir::new().unwrap();
    let presets = presets_arg(&dir);

    tr().args(["preset", "-p", &presets, "add", "Fireball", "8d6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("preset 0: Fireball: 8d6+0"));
    tr().args([
        "preset",
        "-p",
        &presets,
        "add",
        "Sneak",
        "d20",
        "-m",
        "-1",
        "--disadvantage",
        "--category",
        "skill",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("preset 1: Sneak: 1d20-1 (disadvantage)"));

    tr().args(["preset", "-p", &presets, "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Fireball")
                .and(predicate::str::contains("Sneak"))
                .and(predicate::str::contains("2 presets")),
        );

    tr().args(["preset", "-p", &presets, "list", "--category", "skill"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Sneak")
                .and(predicate::str::contains("Fireball").not()),
        );

    tr().args(["preset", "-p", &presets, "remove", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fireball"));

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("presets.json")).unwrap())
            .unwrap();
    let saved = saved.as_array().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0]["name"], "Sneak");
    assert_eq!(saved[0]["advantage"], "disadvantage_roll");
    assert_eq!(saved[0]["dice_modifier"], -1);
}

#[test]
fn preset_remove_out_of_range() {
    let dir = TempDir::new().unwrap();
    let presets = presets_arg(&dir);
    tr().args(["preset", "-p", &presets, "add", "Only", "1d4"])
        .assert()
        .success();
    tr().args(["preset", "-p", &presets, "remove", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn preset_roll_records_history() {
    let dir = TempDir::new().unwrap();
    let presets = presets_arg(&dir);
    let history = dir.path().join("history.json");

    tr().args(["preset", "-p", &presets, "add", "Greatsword", "2d6", "-m", "4"])
        .assert()
        .success();
    tr().args(["preset", "-p", &presets, "add", "Attack", "d20", "-m", "7"])
        .assert()
        .success();

    tr().args([
        "preset",
        "-p",
        &presets,
        "roll",
        "1",
        "--history",
        history.to_str().unwrap(),
        "--seed",
        "12",
    ])
    .assert()
    .success()
    .stdout(
        predicate::str::contains("Attack 1d20+7:")
            .and(predicate::str::contains("Greatsword").not()),
    );

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&history).unwrap()).unwrap();
    let saved = saved.as_array().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0]["name"], "Attack");
    assert!(saved[0].get("dice_rolls").is_none());
}

#[test]
fn preset_roll_without_presets_fails() {
    let dir = TempDir::new().unwrap();
    tr().args(["preset", "-p", &presets_arg(&dir), "roll"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no presets"));
}

#[test]
fn preset_malformed_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("presets.json"), "{ not json").unwrap();
    tr().args(["preset", "-p", &presets_arg(&dir), "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed preset file"));
}
