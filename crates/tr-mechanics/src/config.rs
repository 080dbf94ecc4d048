//! Configuration for a rolling session.

use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Where presets and history live, and how dice are seeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollerConfig {
    /// RNG seed for reproducible rolls. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Preset file.
    pub presets_path: PathBuf,
    /// History file.
    pub history_path: PathBuf,
}

impl Default for RollerConfig {
    fn default() -> Self {
        Self {
            seed: None,
            presets_path: PathBuf::from("presets.json"),
            history_path: PathBuf::from("history.json"),
        }
    }
}

impl RollerConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the preset file.
    pub fn with_presets_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.presets_path = path.into();
        self
    }

    /// Set the history file.
    pub fn with_history_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.history_path = path.into();
        self
    }

    /// A fresh generator for this session.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
