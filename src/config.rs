//! Run configuration for the simulation.

use std::time::Duration;

use serde::{Serialize, Deserialize};

use crate::patterns;

/// Parameters for a single run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LifeConfig {
    /// Grid height in cells (default: 40).
    pub rows: usize,

    /// Grid width in cells (default: 80).
    pub cols: usize,

    /// Pause between generations in milliseconds (default: 200).
    pub speed_ms: u64,

    /// Stop after this many generations have been shown.
    pub max_generations: u64,

    /// Seed pattern name, or `"random"` for a random soup.
    pub pattern: String,

    /// RNG seed for the random soup. Drawn at startup when absent.
    pub seed: Option<u64>,

    /// Probability that a cell starts alive in a random soup.
    pub density: f64,

    /// End the run as soon as a generation changes nothing.
    pub stop_when_stable: bool,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            rows: 40,
            cols: 80,
            speed_ms: 200,
            max_generations: 10_000_000,
            pattern: patterns::DEFAULT_PATTERN.name.to_string(),
            seed: None,
            density: 0.3,
            stop_when_stable: false,
        }
    }
}

impl LifeConfig {
    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.speed_ms)
    }

    pub fn is_random(&self) -> bool {
        self.pattern.eq_ignore_ascii_case(patterns::RANDOM)
    }
}
