//! Runtime settings for the solver and the terminal front end.
//!
//! Settings come from an optional JSON file; any field that is missing falls
//! back to its default, and command-line flags override both.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::solver::SearchLimits;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Random legal moves applied from the goal when starting a game.
    pub shuffle_moves: usize,
    /// Frontier pops the optimal solver may spend before giving up.
    pub max_iterations: usize,
    /// Pause between moves while replaying a solution.
    pub autoplay_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shuffle_moves: 100,
            max_iterations: SearchLimits::default().max_iterations,
            autoplay_delay_ms: 500,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn search_limits(&self) -> SearchLimits {
        SearchLimits::new(self.max_iterations)
    }
}
