//! Dice pool construction and rolling.

use rand::rngs::StdRng;

use super::roll::PoolRoll;
use super::{Die, DieType};
use crate::error::MechResult;

/// An ordered collection of dice rolled together.
///
/// Rolling never mutates the pool and keeps no history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DicePool {
    /// The dice in insertion order.
    pub dice: Vec<Die>,
}

impl DicePool {
    /// Create an empty dice pool.
    pub fn new() -> Self {
        Self { dice: Vec::new() }
    }

    /// Add `count` standard dice of the given type.
    pub fn add(self, die_type: DieType, count: u32) -> Self {
        self.add_floored(die_type, count, 1)
    }

    /// Add `count` dice of the given type that never roll below `min_roll`.
    pub fn add_floored(mut self, die_type: DieType, count: u32, min_roll: u32) -> Self {
        for _ in 0..count {
            self.dice.push(Die::with_min_roll(die_type, min_roll));
        }
        self
    }

    /// Append a single die.
    pub fn push(&mut self, die: Die) {
        self.dice.push(die);
    }

    /// Remove the most recently added die.
    pub fn pop(&mut self) -> Option<Die> {
        self.dice.pop()
    }

    /// Remove every die.
    pub fn clear(&mut self) {
        self.dice.clear();
    }

    /// Returns how many dice are in the pool.
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    /// Returns true if the pool has no dice.
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Roll every die in insertion order.
    ///
    /// Fails with `InvalidRange` if any die's floor exceeds its sides; no
    /// partial result is returned in that case.
    pub fn roll_all(&self, rng: &mut StdRng) -> MechResult<Vec<u32>> {
        self.dice.iter().map(|die| die.roll(rng)).collect()
    }

    /// Roll every die and keep both the values and their sum.
    pub fn total_roll(&self, rng: &mut StdRng) -> MechResult<PoolRoll> {
        let values = self.roll_all(rng)?;
        let roll = PoolRoll { values };
        tracing::debug!(dice = self.len(), total = roll.total(), "rolled pool");
        Ok(roll)
    }
}
