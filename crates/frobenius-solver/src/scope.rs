//! Per-call search scope.

use std::time::{Duration, Instant};

use frobenius_config::SearchConfig;
use frobenius_core::{lattice_size, FrobeniusError, Result};

use crate::stats::SearchStats;

/// Mutable state of one top-level search call.
///
/// A Frobenius or gap scan runs many membership searches inside the same
/// scope, so the step count covers the whole call.
#[derive(Debug)]
pub struct SearchScope<'a> {
    config: &'a SearchConfig,
    start_time: Option<Instant>,
    total_step_count: u64,
    hit_count: u64,
}

impl<'a> SearchScope<'a> {
    pub fn new(config: &'a SearchConfig) -> Self {
        Self {
            config,
            start_time: None,
            total_step_count: 0,
            hit_count: 0,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        self.config
    }

    pub fn start_search(&mut self) {
        self.start_time = Some(Instant::now());
        self.total_step_count = 0;
        self.hit_count = 0;
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    pub fn increment_step_count(&mut self) {
        self.total_step_count += 1;
    }

    pub fn total_step_count(&self) -> u64 {
        self.total_step_count
    }

    pub fn record_hit(&mut self) {
        self.hit_count += 1;
    }

    pub fn hit_count(&self) -> u64 {
        self.hit_count
    }

    /// Returns the lattice size of `bounds`, enforcing `max_lattice_size`.
    ///
    /// # Errors
    ///
    /// - [`FrobeniusError::Overflow`] if the size does not fit in a `u64`.
    /// - [`FrobeniusError::InvalidInput`] if the size exceeds the configured cap.
    pub fn check_lattice(&self, bounds: &[u64]) -> Result<u64> {
        let size = lattice_size(bounds)?;
        match self.config.max_lattice_size {
            Some(limit) if size > limit => Err(FrobeniusError::InvalidInput(format!(
                "lattice of {size} vectors exceeds max_lattice_size {limit}"
            ))),
            _ => Ok(size),
        }
    }

    pub fn stats(&self) -> SearchStats {
        SearchStats::new(self.total_step_count, self.hit_count, self.elapsed())
    }
}
