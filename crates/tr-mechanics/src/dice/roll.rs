//! Roll outputs and the d20 advantage protocol.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use super::{AdvantageMode, DieType};

/// The values produced by rolling a whole pool, in pool order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolRoll {
    /// One value per die.
    pub values: Vec<u32>,
}

impl PoolRoll {
    /// Sum of all die values.
    pub fn total(&self) -> u32 {
        self.values.iter().sum()
    }

    /// The highest single die value, or 0 if empty.
    pub fn highest(&self) -> u32 {
        self.values.iter().copied().max().unwrap_or(0)
    }

    /// The lowest single die value, or 0 if empty.
    pub fn lowest(&self) -> u32 {
        self.values.iter().copied().min().unwrap_or(0)
    }

    /// Number of dice rolled.
    pub fn count(&self) -> usize {
        self.values.len()
    }
}

impl std::fmt::Display for PoolRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.values.iter().map(|v| v.to_string()).collect();
        write!(f, "[{}] = {}", values.join(", "), self.total())
    }
}

/// A d20 roll under an advantage mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct D20Roll {
    /// The mode the roll was made under.
    pub mode: AdvantageMode,
    /// Raw dice: two for advantage/disadvantage, one for a normal roll.
    pub rolls: Vec<u32>,
    /// The value that counts.
    pub selected: u32,
}

/// Roll a d20 under the given mode.
///
/// Advantage and disadvantage roll exactly two dice and keep the max or min.
/// A normal roll rolls a single die.
pub fn roll_d20(mode: AdvantageMode, rng: &mut StdRng) -> D20Roll {
    let sides = DieType::D20.sides();
    let first = rng.random_range(1..=sides);
    let (rolls, selected) = match mode {
        AdvantageMode::Normal => (vec![first], first),
        AdvantageMode::Advantage => {
            let second = rng.random_range(1..=sides);
            (vec![first, second], first.max(second))
        }
        AdvantageMode::Disadvantage => {
            let second = rng.random_range(1..=sides);
            (vec![first, second], first.min(second))
        }
    };
    tracing::debug!(%mode, ?rolls, selected, "rolled d20");
    D20Roll {
        mode,
        rolls,
        selected,
    }
}
