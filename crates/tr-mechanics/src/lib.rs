//! Dice and d20 check resolution engine for Tavernroll.
//!
//! Provides dice and dice pools, the advantage/disadvantage d20 protocol,
//! characters with skill and saving-throw registries, weapon damage with
//! heavy-weapon and critical-hit rules, and named roll presets persisted as
//! JSON.

pub mod combat;
pub mod config;
pub mod dice;
pub mod error;
pub mod reaction;
pub mod roll;
pub mod rules;
pub mod sheet;

pub use combat::AttackDamage;
pub use config::RollerConfig;
pub use dice::{AdvantageMode, D20Roll, DicePool, Die, DieType, PoolRoll, roll_d20};
pub use error::{MechError, MechResult};
pub use reaction::{ReactionSource, StockReactions};
pub use roll::{Roll, RollCategory, RollManager, RollResult};
pub use rules::{CheckOutcome, CheckRegistry, CheckType, perform_check};
pub use sheet::{
    Ability, Character, CharacterProfile, SpecialAbility, SpecialKind, Weapon, WeightClass,
};
