//! End-of-run summary.

use serde::{Serialize, Deserialize};

use crate::config::LifeConfig;
use crate::runner::{RunOutcome, StopReason};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunSummary {
    pub started: String,
    pub elapsed_ms: u64,
    pub rows: usize,
    pub cols: usize,
    pub pattern: String,
    pub seed: Option<u64>,
    pub generations: u64,
    pub final_alive: usize,
    pub stop_reason: String,
}

impl RunSummary {
    pub fn new(config: &LifeConfig, outcome: &RunOutcome) -> Self {
        Self {
            started: outcome.started.format("%Y-%m-%d %H:%M:%S").to_string(),
            elapsed_ms: outcome.elapsed.as_millis() as u64,
            rows: config.rows,
            cols: config.cols,
            pattern: config.pattern.clone(),
            seed: config.seed,
            generations: outcome.generations,
            final_alive: outcome.final_alive,
            stop_reason: stop_reason_name(outcome.reason).to_string(),
        }
    }

    pub fn to_json(&self) -> std::io::Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// One-line description printed after the terminal is restored.
    pub fn headline(&self) -> String {
        format!(
            "Stopped after {} generations ({}), {} cells alive",
            self.generations, self.stop_reason, self.final_alive
        )
    }
}

fn stop_reason_name(reason: StopReason) -> &'static str {
    match reason {
        StopReason::GenerationLimit => "generation limit",
        StopReason::Quit => "quit",
        StopReason::Stable => "stable",
    }
}
