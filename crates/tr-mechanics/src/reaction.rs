//! Flavour text for roll totals.
//!
//! Callers hand a [`ReactionSource`] to whatever prints results; the engine
//! itself never picks one.

/// Produces a short message describing a roll total.
pub trait ReactionSource {
    /// Message for `total`.
    fn reaction_for(&self, total: i32) -> String;
}

/// The built-in table, keyed on a natural d20 range.
#[derive(Debug, Clone, Copy, Default)]
pub struct StockReactions;

impl ReactionSource for StockReactions {
    fn reaction_for(&self, total: i32) -> String {
        let message = match total {
            1 => "What was that?!",
            2..=5 => "Ouch that sucks!",
            6..=9 => "Eh not that great.",
            10..=14 => "That's pretty good!",
            15..=18 => "Odds in your favor!",
            19 => "AHH So close to a Critical!",
            20 => "YES! Critical Success!",
            n => return format!("Roll Result: {n}"),
        };
        message.to_string()
    }
}
