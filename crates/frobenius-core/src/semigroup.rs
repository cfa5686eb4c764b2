//! Numerical semigroup model.

use std::collections::BTreeSet;
use std::fmt;

use smallvec::SmallVec;

use crate::error::{FrobeniusError, Result};
use crate::math::gcd_all;

/// A coefficient vector paired position-by-position with a generator sequence.
///
/// Bound vectors share the same representation.
pub type Lambda = SmallVec<[u64; 8]>;

/// The semigroup `<a_1, ..., a_n>` of non-negative integer combinations of its
/// generators.
///
/// Generators are kept sorted and deduplicated. The semigroup is valid (cofinite,
/// with a finite Frobenius number) iff the gcd of its generators is 1.
///
/// # Example
///
/// ```
/// use frobenius_core::NumericalSemigroup;
///
/// let s = NumericalSemigroup::new([5, 3, 5]).unwrap();
/// assert_eq!(s.generator_sequence(), vec![3, 5]);
/// assert!(s.is_valid());
/// assert_eq!(s.to_string(), "<3, 5>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericalSemigroup {
    generators: BTreeSet<i64>,
    is_valid: bool,
    last_search_steps: u64,
}

impl NumericalSemigroup {
    /// Creates a semigroup from an initial generator set.
    ///
    /// # Errors
    ///
    /// Returns [`FrobeniusError::InvalidInput`] if the set is empty or contains a
    /// non-positive value.
    pub fn new(generators: impl IntoIterator<Item = i64>) -> Result<Self> {
        let generators: BTreeSet<i64> = generators.into_iter().collect();
        if generators.is_empty() {
            return Err(FrobeniusError::InvalidInput(
                "generator set must not be empty".to_string(),
            ));
        }
        if let Some(&g) = generators.iter().find(|&&g| g <= 0) {
            return Err(FrobeniusError::InvalidInput(format!(
                "generators must be positive, got {g}"
            )));
        }
        let is_valid = gcd_all(generators.iter().copied()) == 1;
        Ok(Self {
            generators,
            is_valid,
            last_search_steps: 0,
        })
    }

    /// Inserts a generator without any membership check and recomputes validity.
    ///
    /// Returns `true` if `g` was not already a generator. Representability of
    /// `g` by the previous set is the search layer's concern.
    pub fn insert_generator(&mut self, g: i64) -> Result<bool> {
        if g <= 0 {
            return Err(FrobeniusError::InvalidInput(format!(
                "generators must be positive, got {g}"
            )));
        }
        let inserted = self.generators.insert(g);
        self.is_valid = gcd_all(self.generators.iter().copied()) == 1;
        Ok(inserted)
    }

    /// Returns true iff the gcd of all generators is 1.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Returns the generator set.
    pub fn generators(&self) -> &BTreeSet<i64> {
        &self.generators
    }

    /// Returns the generators in increasing order.
    pub fn generator_sequence(&self) -> Vec<i64> {
        self.generators.iter().copied().collect()
    }

    /// Returns the number of generators.
    pub fn generator_count(&self) -> usize {
        self.generators.len()
    }

    /// Returns the smallest generator.
    pub fn multiplicity(&self) -> i64 {
        // Never empty: enforced by `new`, and `insert_generator` only grows the set.
        self.generators.first().copied().unwrap_or(1)
    }

    /// Returns the largest generator.
    pub fn largest_generator(&self) -> i64 {
        self.generators.last().copied().unwrap_or(1)
    }

    /// Number of candidate vectors examined by the most recent search.
    pub fn last_search_steps(&self) -> u64 {
        self.last_search_steps
    }

    /// Stores the step count of a finished search.
    pub fn record_search_steps(&mut self, steps: u64) {
        self.last_search_steps = steps;
    }
}

impl fmt::Display for NumericalSemigroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<")?;
        for (i, g) in self.generators.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{g}")?;
        }
        write!(f, ">")
    }
}
