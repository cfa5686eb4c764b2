//! Search statistics.
//!
//! Stack-allocated counters for a single top-level search call.

use std::time::Duration;

/// Statistics of a finished search.
///
/// # Example
///
/// ```
/// use frobenius_solver::stats::SearchStats;
/// use std::time::Duration;
///
/// let stats = SearchStats::new(200, 4, Duration::from_secs(2));
/// assert_eq!(stats.steps_per_second(), 100);
/// assert_eq!(stats.hit_rate(), 0.02);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SearchStats {
    /// Lambda vectors evaluated.
    pub step_count: u64,
    /// Evaluated vectors whose weighted sum matched the target.
    pub hit_count: u64,
    /// Wall time spent in the search.
    pub elapsed: Duration,
}

impl SearchStats {
    pub fn new(step_count: u64, hit_count: u64, elapsed: Duration) -> Self {
        Self {
            step_count,
            hit_count,
            elapsed,
        }
    }

    /// Returns the elapsed time in milliseconds.
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed.as_millis() as u64
    }

    /// Returns the steps per second rate.
    pub fn steps_per_second(&self) -> u64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            (self.step_count as f64 / secs) as u64
        } else {
            0
        }
    }

    /// Returns the fraction of evaluated vectors that were hits.
    pub fn hit_rate(&self) -> f64 {
        if self.step_count == 0 {
            0.0
        } else {
            self.hit_count as f64 / self.step_count as f64
        }
    }
}
