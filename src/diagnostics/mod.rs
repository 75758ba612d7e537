//! Construction diagnostics
//!
//! Statistics reported by every model construction call.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Counters for a single construction call
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ConstructionStats {
    /// Freshly generated models that passed the compatibility test
    pub accepted: usize,
    /// Freshly generated models that failed the compatibility test
    pub rejected: usize,
    /// Models carried over from the previous call that are still compatible
    pub preserved: usize,
    /// Models carried over from the previous call that are no longer compatible
    pub discarded: usize,
    /// Wall-clock time spent in the call (ms)
    pub elapsed_ms: f64,
}

impl ConstructionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of generation attempts (accepted + rejected)
    pub fn attempts(&self) -> usize {
        self.accepted + self.rejected
    }

    /// Fraction of generated models that were accepted
    ///
    /// `None` when no model was generated in this call.
    pub fn acceptance_rate(&self) -> Option<f64> {
        let attempts = self.attempts();
        if attempts == 0 {
            return None;
        }
        Some(self.accepted as f64 / attempts as f64)
    }

    /// Set the elapsed time
    pub fn with_elapsed(mut self, duration: Duration) -> Self {
        self.elapsed_ms = duration.as_secs_f64() * 1000.0;
        self
    }

    /// One-line human readable summary
    pub fn summary(&self) -> String {
        let rate = self
            .acceptance_rate()
            .map(|r| format!("{:.2}%", r * 100.0))
            .unwrap_or_else(|| "n/a".to_string());
        format!(
            "accepted {}, rejected {}, preserved {}, discarded {}, acceptance {}, {:.2}ms",
            self.accepted, self.rejected, self.preserved, self.discarded, rate, self.elapsed_ms
        )
    }
}

pub mod prelude {
    pub use super::ConstructionStats;
}
