//! Ordered roll collections with JSON persistence.
//!
//! Presets are a `RollManager<Roll>`; roll history is a
//! `RollManager<RollResult>`. Either can be saved, writing each entry's
//! [`Roll`] fields as a plain JSON object. Only presets can be loaded back.

use std::path::Path;

use super::{Roll, RollCategory};
use crate::error::{MechError, MechResult};

/// An ordered list of rolls. Indices are positions in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollManager<T = Roll> {
    rolls: Vec<T>,
}

impl<T> Default for RollManager<T> {
    fn default() -> Self {
        Self { rolls: Vec::new() }
    }
}

impl<T> RollManager<T> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a roll.
    pub fn add(&mut self, roll: T) {
        self.rolls.push(roll);
    }

    /// All rolls in order.
    pub fn rolls(&self) -> &[T] {
        &self.rolls
    }

    /// The roll at `index`.
    pub fn get(&self, index: usize) -> MechResult<&T> {
        self.rolls.get(index).ok_or(MechError::IndexOutOfRange {
            index,
            len: self.rolls.len(),
        })
    }

    /// Replace the roll at `index`.
    pub fn update(&mut self, roll: T, index: usize) -> MechResult<()> {
        let len = self.rolls.len();
        let slot = self
            .rolls
            .get_mut(index)
            .ok_or(MechError::IndexOutOfRange { index, len })?;
        *slot = roll;
        Ok(())
    }

    /// Remove and return the roll at `index`, shifting later rolls down.
    pub fn remove(&mut self, index: usize) -> MechResult<T> {
        if index >= self.rolls.len() {
            return Err(MechError::IndexOutOfRange {
                index,
                len: self.rolls.len(),
            });
        }
        Ok(self.rolls.remove(index))
    }

    /// Remove every roll.
    pub fn clear(&mut self) {
        self.rolls.clear();
    }

    /// Number of rolls.
    pub fn len(&self) -> usize {
        self.rolls.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }

    /// Iterate rolls in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.rolls.iter()
    }
}

impl<T: PartialEq> RollManager<T> {
    /// Position of the first roll equal to `roll`.
    pub fn index_of(&self, roll: &T) -> MechResult<usize> {
        self.rolls
            .iter()
            .position(|r| r == roll)
            .ok_or(MechError::NotFound)
    }
}

impl<T: AsRef<Roll>> RollManager<T> {
    /// Rolls tagged with `category` with their indices, in order. Untagged
    /// rolls never match.
    pub fn by_category(&self, category: RollCategory) -> Vec<(usize, &T)> {
        self.rolls
            .iter()
            .enumerate()
            .filter(|(_, r)| r.as_ref().category == Some(category))
            .collect()
    }

    /// Serialize the roll configurations as a pretty JSON array.
    pub fn to_json(&self) -> MechResult<String> {
        let records: Vec<&Roll> = self.rolls.iter().map(AsRef::as_ref).collect();
        serde_json::to_string_pretty(&records)
            .map_err(|e| MechError::MalformedPresetFile(e.to_string()))
    }

    /// Overwrite `path` with the collection as JSON.
    pub fn save_to_file(&self, path: &Path) -> MechResult<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        tracing::info!(path = %path.display(), count = self.len(), "saved rolls");
        Ok(())
    }
}

impl RollManager<Roll> {
    /// Parse a JSON array of roll objects.
    pub fn from_json(text: &str) -> MechResult<Self> {
        Self::from_json_bytes(text.as_bytes())
    }

    /// Parse raw file contents. Bytes that aren't UTF-8 JSON are malformed.
    pub fn from_json_bytes(bytes: &[u8]) -> MechResult<Self> {
        let rolls: Vec<Roll> = serde_json::from_slice(bytes)
            .map_err(|e| MechError::MalformedPresetFile(e.to_string()))?;
        Ok(Self { rolls })
    }

    /// Replace the contents with the rolls stored at `path`.
    ///
    /// The whole file is parsed before anything is replaced; on any error
    /// the current contents are left untouched.
    pub fn load_from_file(&mut self, path: &Path) -> MechResult<()> {
        let bytes = std::fs::read(path)?;
        let loaded = Self::from_json_bytes(&bytes).inspect_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "rejected roll file");
        })?;
        self.rolls = loaded.rolls;
        tracing::info!(path = %path.display(), count = self.len(), "loaded rolls");
        Ok(())
    }
}

impl<'a, T> IntoIterator for &'a RollManager<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.rolls.iter()
    }
}
