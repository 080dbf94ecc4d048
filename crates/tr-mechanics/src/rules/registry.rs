//! Per-character proficiency, advantage, and disadvantage bookkeeping.

use std::collections::HashSet;

use crate::dice::AdvantageMode;
use crate::rules::catalog;
use crate::sheet::Ability;

/// A set of named checks (skills or saving throws) for one character.
///
/// The ability map is a shared static catalog; the three marker sets are
/// per-character and start empty. Marking a check that isn't in the catalog
/// is allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRegistry {
    ability_map: &'static [(&'static str, Ability)],
    proficiencies: HashSet<String>,
    advantages: HashSet<String>,
    disadvantages: HashSet<String>,
}

impl CheckRegistry {
    /// Create a registry over a fixed check catalog.
    pub fn new(ability_map: &'static [(&'static str, Ability)]) -> Self {
        Self {
            ability_map,
            proficiencies: HashSet::new(),
            advantages: HashSet::new(),
            disadvantages: HashSet::new(),
        }
    }

    /// A registry over the eighteen skills.
    pub fn skills() -> Self {
        Self::new(catalog::SKILLS)
    }

    /// A registry over the six saving throws.
    pub fn saving_throws() -> Self {
        Self::new(catalog::SAVING_THROWS)
    }

    /// The ability governing `check`, if it is in the catalog.
    pub fn ability_for(&self, check: &str) -> Option<Ability> {
        self.ability_map
            .iter()
            .find(|(name, _)| *name == check)
            .map(|(_, ability)| *ability)
    }

    /// Check names in catalog order.
    pub fn check_names(&self) -> Vec<&'static str> {
        self.ability_map.iter().map(|(name, _)| *name).collect()
    }

    /// Replace the proficiency set.
    pub fn set_proficiencies<I, S>(&mut self, checks: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.proficiencies = checks.into_iter().map(Into::into).collect();
    }

    /// Replace the advantage set.
    pub fn set_advantages<I, S>(&mut self, checks: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.advantages = checks.into_iter().map(Into::into).collect();
    }

    /// Replace the disadvantage set.
    pub fn set_disadvantages<I, S>(&mut self, checks: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.disadvantages = checks.into_iter().map(Into::into).collect();
    }

    /// Whether the character is proficient in `check`.
    pub fn is_proficient(&self, check: &str) -> bool {
        self.proficiencies.contains(check)
    }

    /// Whether `check` is rolled with advantage.
    pub fn has_advantage(&self, check: &str) -> bool {
        self.advantages.contains(check)
    }

    /// Whether `check` is rolled with disadvantage.
    pub fn has_disadvantage(&self, check: &str) -> bool {
        self.disadvantages.contains(check)
    }

    /// The default roll mode for `check`. Advantage wins if both are marked.
    pub fn roll_mode(&self, check: &str) -> AdvantageMode {
        if self.has_advantage(check) {
            AdvantageMode::Advantage
        } else if self.has_disadvantage(check) {
            AdvantageMode::Disadvantage
        } else {
            AdvantageMode::Normal
        }
    }
}
