//! Semigroup-level entry points.
//!
//! [`SemigroupSolver`] runs each operation in a fresh [`SearchScope`] and
//! stores the step count on the semigroup afterwards, whether the search
//! succeeded or not.

use std::path::Path;

use frobenius_config::{ConfigError, SearchConfig};
use frobenius_core::{FrobeniusError, NumericalSemigroup, Result};
use tracing::debug;

use crate::scope::SearchScope;
use crate::search::{self, Denumerant};

/// Runs searches against a semigroup under a fixed configuration.
///
/// # Example
///
/// ```
/// use frobenius_config::{FrobeniusStrategy, SearchConfig};
/// use frobenius_core::NumericalSemigroup;
/// use frobenius_solver::SemigroupSolver;
///
/// let solver = SemigroupSolver::new(
///     SearchConfig::new().with_frobenius_strategy(FrobeniusStrategy::UpwardRun),
/// );
/// let mut s = NumericalSemigroup::new([6, 10, 15]).unwrap();
/// assert_eq!(solver.frobenius_number(&mut s).unwrap(), 29);
/// assert!(s.last_search_steps() > 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SemigroupSolver {
    config: SearchConfig,
}

impl SemigroupSolver {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Creates a solver from a TOML configuration file.
    pub fn from_config_file(path: impl AsRef<Path>) -> std::result::Result<Self, ConfigError> {
        SearchConfig::load(path).map(Self::new)
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn run<T>(
        &self,
        semigroup: &mut NumericalSemigroup,
        search: impl FnOnce(&mut SearchScope<'_>, &[i64]) -> Result<T>,
    ) -> Result<T> {
        let generators = semigroup.generator_sequence();
        let mut scope = SearchScope::new(&self.config);
        scope.start_search();
        let result = search(&mut scope, &generators);
        semigroup.record_search_steps(scope.total_step_count());
        result
    }

    /// Membership of `t` in the semigroup.
    pub fn membership(&self, semigroup: &mut NumericalSemigroup, t: i64) -> Result<bool> {
        self.run(semigroup, |scope, generators| {
            search::membership_core(scope, t, generators)
        })
    }

    /// Membership of `t` against an explicit generator sequence.
    ///
    /// The sequence need not be the semigroup's own; only the step count is
    /// stored on the semigroup.
    pub fn membership_core(
        &self,
        semigroup: &mut NumericalSemigroup,
        t: i64,
        generators: &[i64],
    ) -> Result<bool> {
        self.run(semigroup, |scope, _| search::membership_core(scope, t, generators))
    }

    /// Number of representations of `t`, optionally with the vectors themselves.
    pub fn denumerant(
        &self,
        semigroup: &mut NumericalSemigroup,
        t: i64,
        record_solutions: bool,
    ) -> Result<Denumerant> {
        self.run(semigroup, |scope, generators| {
            search::sylvester_denumerant(scope, t, generators, record_solutions)
        })
    }

    /// Fast upper bound on the Frobenius number. Runs no search.
    pub fn frobenius_number_bound(&self, semigroup: &NumericalSemigroup) -> Result<i64> {
        search::frobenius_number_bound(
            &semigroup.generator_sequence(),
            self.config.bound_strategy,
        )
    }

    /// Largest gap, or `-1` if the semigroup is all of `N`.
    pub fn frobenius_number(&self, semigroup: &mut NumericalSemigroup) -> Result<i64> {
        self.run(semigroup, search::frobenius_number)
    }

    /// Positive non-members in increasing order.
    pub fn gaps(&self, semigroup: &mut NumericalSemigroup) -> Result<Vec<i64>> {
        self.run(semigroup, search::gaps)
    }

    /// Number of gaps.
    pub fn genus(&self, semigroup: &mut NumericalSemigroup) -> Result<usize> {
        self.gaps(semigroup).map(|gaps| gaps.len())
    }

    /// Adds a generator.
    ///
    /// Returns whether `g` was already representable by the previous
    /// generators, in which case the semigroup's members are unchanged.
    pub fn add_generator(&self, semigroup: &mut NumericalSemigroup, g: i64) -> Result<bool> {
        if g <= 0 {
            return Err(FrobeniusError::InvalidInput(format!(
                "generators must be positive, got {g}"
            )));
        }
        let redundant = self.membership(semigroup, g)?;
        semigroup.insert_generator(g)?;
        debug!(
            event = "add_generator",
            generator = g,
            redundant = redundant,
            semigroup = %semigroup,
            valid = semigroup.is_valid(),
        );
        Ok(redundant)
    }
}

/// Search operations on a semigroup with the default configuration.
///
/// # Example
///
/// ```
/// use frobenius_core::NumericalSemigroup;
/// use frobenius_solver::SemigroupSearch;
///
/// let mut s = NumericalSemigroup::new([3, 5]).unwrap();
/// assert_eq!(s.frobenius_number().unwrap(), 7);
/// assert_eq!(s.gaps().unwrap(), vec![1, 2, 4, 7]);
/// assert!(s.membership(8).unwrap());
/// assert_eq!(s.denumerant(8, false).unwrap().count, 1);
/// ```
pub trait SemigroupSearch {
    /// Membership of `t`.
    fn membership(&mut self, t: i64) -> Result<bool>;

    /// Membership of `t` against an explicit generator sequence.
    fn membership_core(&mut self, t: i64, generators: &[i64]) -> Result<bool>;

    /// Sylvester denumerant of `t`.
    fn denumerant(&mut self, t: i64, record_solutions: bool) -> Result<Denumerant>;

    /// Fast upper bound on the Frobenius number.
    fn frobenius_number_bound(&self) -> Result<i64>;

    /// Exact Frobenius number.
    fn frobenius_number(&mut self) -> Result<i64>;

    /// Gap set.
    fn gaps(&mut self) -> Result<Vec<i64>>;

    /// Number of gaps.
    fn genus(&mut self) -> Result<usize>;

    /// Adds a generator, returning whether it was already representable.
    fn add_generator(&mut self, g: i64) -> Result<bool>;
}

impl SemigroupSearch for NumericalSemigroup {
    fn membership(&mut self, t: i64) -> Result<bool> {
        SemigroupSolver::default().membership(self, t)
    }

    fn membership_core(&mut self, t: i64, generators: &[i64]) -> Result<bool> {
        SemigroupSolver::default().membership_core(self, t, generators)
    }

    fn denumerant(&mut self, t: i64, record_solutions: bool) -> Result<Denumerant> {
        SemigroupSolver::default().denumerant(self, t, record_solutions)
    }

    fn frobenius_number_bound(&self) -> Result<i64> {
        SemigroupSolver::default().frobenius_number_bound(self)
    }

    fn frobenius_number(&mut self) -> Result<i64> {
        SemigroupSolver::default().frobenius_number(self)
    }

    fn gaps(&mut self) -> Result<Vec<i64>> {
        SemigroupSolver::default().gaps(self)
    }

    fn genus(&mut self) -> Result<usize> {
        SemigroupSolver::default().genus(self)
    }

    fn add_generator(&mut self, g: i64) -> Result<bool> {
        SemigroupSolver::default().add_generator(self, g)
    }
}
