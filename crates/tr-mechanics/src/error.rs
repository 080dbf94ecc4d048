//! Error types for the mechanics engine.

/// Errors that can occur during mechanics operations.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// A die's minimum roll is above its number of sides.
    #[error("invalid range: minimum roll {min} exceeds {sides} sides")]
    InvalidRange {
        /// The configured minimum roll.
        min: u32,
        /// The number of sides on the die.
        sides: u32,
    },

    /// A check was dispatched with a type other than skill, save, or attack.
    #[error("invalid check type: {0}")]
    InvalidCheckType(String),

    /// A weapon referenced by name is not owned by the character.
    #[error("unknown weapon: {0}")]
    UnknownWeapon(String),

    /// An ability name could not be parsed.
    #[error("unknown ability: {0}")]
    UnknownAbility(String),

    /// A die label is not part of the dice catalog.
    #[error("invalid die type: {0}")]
    InvalidDieType(String),

    /// A roll asks for more dice than a single roll may use.
    #[error("too many dice: {count} (max {max})")]
    TooManyDice {
        /// The requested dice count.
        count: u32,
        /// The largest allowed count.
        max: u32,
    },

    /// A damage expression is not of the form `<count>d<sides>`.
    #[error("invalid damage expression: {0}")]
    InvalidDamage(String),

    /// A roll collection was indexed past its end.
    #[error("roll index {index} out of range (len {len})")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The collection length at the time of the call.
        len: usize,
    },

    /// A roll was not present in the collection.
    #[error("roll not found")]
    NotFound,

    /// A preset or history file could not be parsed.
    #[error("malformed preset file: {0}")]
    MalformedPresetFile(String),

    /// A character profile could not be parsed.
    #[error("malformed character profile: {0}")]
    MalformedProfile(String),

    /// A roll category label is not recognised.
    #[error("unknown roll category: {0}")]
    UnknownCategory(String),

    /// Reading or writing a file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
