//! Lambda enumeration and evaluation.
//!
//! The bounded lattice `0 <= λ[i] <= bounds[i]` is walked as a mixed-radix
//! counter with position 0 as the fastest-varying digit. The walk starts at the
//! all-zero vector, ends at the bound vector and visits `∏ (bounds[i] + 1)`
//! vectors, each exactly once.

use smallvec::smallvec;

use crate::error::{FrobeniusError, Result};
use crate::semigroup::Lambda;

/// Advances `lambda` in place to its successor.
///
/// Returns `false`, leaving `lambda` reset to all zeros, when the carry runs past
/// the last position, i.e. when `lambda` was already the bound vector.
pub fn advance(lambda: &mut [u64], bounds: &[u64]) -> bool {
    debug_assert_eq!(lambda.len(), bounds.len());
    for (digit, &bound) in lambda.iter_mut().zip(bounds) {
        if *digit < bound {
            *digit += 1;
            return true;
        }
        *digit = 0;
    }
    false
}

/// Returns the successor of `lambda`, or `None` once the lattice is exhausted.
///
/// # Examples
///
/// ```
/// use frobenius_core::next_lambda;
///
/// let bounds = [1, 1];
/// let next = next_lambda(&[1, 0], &bounds).unwrap();
/// assert_eq!(next.as_slice(), &[0, 1]);
/// assert!(next_lambda(&[1, 1], &bounds).is_none());
/// ```
pub fn next_lambda(lambda: &[u64], bounds: &[u64]) -> Option<Lambda> {
    let mut next = Lambda::from_slice(lambda);
    advance(&mut next, bounds).then_some(next)
}

/// Returns `Σ λ[i] * generators[i]`.
///
/// # Errors
///
/// - [`FrobeniusError::InvalidInput`] if the two sequences differ in length.
/// - [`FrobeniusError::Overflow`] if a product or the sum leaves the `i64` range.
///
/// # Examples
///
/// ```
/// use frobenius_core::evaluate;
///
/// assert_eq!(evaluate(&[1, 1], &[3, 5]).unwrap(), 8);
/// assert_eq!(evaluate(&[0, 0], &[3, 5]).unwrap(), 0);
/// ```
pub fn evaluate(lambda: &[u64], generators: &[i64]) -> Result<i64> {
    if lambda.len() != generators.len() {
        return Err(FrobeniusError::InvalidInput(format!(
            "lambda has {} entries for {} generators",
            lambda.len(),
            generators.len()
        )));
    }
    lambda
        .iter()
        .zip(generators)
        .try_fold(0i64, |sum, (&coefficient, &generator)| {
            i64::try_from(coefficient)
                .ok()
                .and_then(|c| c.checked_mul(generator))
                .and_then(|term| sum.checked_add(term))
                .ok_or_else(|| {
                    FrobeniusError::Overflow(format!(
                        "evaluating {lambda:?} against {generators:?}"
                    ))
                })
        })
}

/// Lazy iterator over every vector of a bounded lattice.
///
/// # Example
///
/// ```
/// use frobenius_core::LambdaIter;
///
/// let visited: Vec<Vec<u64>> = LambdaIter::new(&[1, 1]).map(|l| l.to_vec()).collect();
/// assert_eq!(visited, vec![vec![0, 0], vec![1, 0], vec![0, 1], vec![1, 1]]);
/// ```
#[derive(Debug, Clone)]
pub struct LambdaIter {
    bounds: Lambda,
    current: Option<Lambda>,
}

impl LambdaIter {
    /// Creates an iterator positioned at the all-zero vector.
    pub fn new(bounds: &[u64]) -> Self {
        Self {
            bounds: Lambda::from_slice(bounds),
            current: Some(smallvec![0; bounds.len()]),
        }
    }

    /// Restarts the walk from the all-zero vector.
    pub fn reset(&mut self) {
        self.current = Some(smallvec![0; self.bounds.len()]);
    }

    /// Returns the bound vector being walked.
    pub fn bounds(&self) -> &[u64] {
        &self.bounds
    }
}

impl Iterator for LambdaIter {
    type Item = Lambda;

    fn next(&mut self) -> Option<Lambda> {
        let current = self.current.take()?;
        self.current = next_lambda(&current, &self.bounds);
        Some(current)
    }
}
