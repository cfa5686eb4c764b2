//! Per-generator upper bounds for the composition search.
//!
//! For a target `t`, no coefficient `λ[i]` can exceed `⌊t / a[i]⌋` because every
//! other term of `Σ λ[j] * a[j]` is non-negative. The bound is loose on purpose
//! and is computed once per search call.

use crate::error::{FrobeniusError, Result};
use crate::semigroup::Lambda;

/// Computes the inclusive bound vector `bound[i] = ⌊t / generators[i]⌋`.
///
/// # Errors
///
/// Returns [`FrobeniusError::InvalidInput`] if `t` is negative or any generator
/// is not strictly positive.
///
/// # Examples
///
/// ```
/// use frobenius_core::compute_bounds;
///
/// let bounds = compute_bounds(8, &[3, 5]).unwrap();
/// assert_eq!(bounds.as_slice(), &[2, 1]);
/// ```
pub fn compute_bounds(t: i64, generators: &[i64]) -> Result<Lambda> {
    if t < 0 {
        return Err(FrobeniusError::InvalidInput(format!(
            "target must be non-negative, got {t}"
        )));
    }
    generators
        .iter()
        .map(|&a| {
            if a <= 0 {
                Err(FrobeniusError::InvalidInput(format!(
                    "generators must be positive, got {a}"
                )))
            } else {
                Ok((t / a) as u64)
            }
        })
        .collect()
}

/// Number of vectors in the lattice `∏ (bounds[i] + 1)`.
///
/// # Errors
///
/// Returns [`FrobeniusError::Overflow`] if the product does not fit in a `u64`.
pub fn lattice_size(bounds: &[u64]) -> Result<u64> {
    bounds.iter().try_fold(1u64, |acc, &b| {
        b.checked_add(1)
            .and_then(|radix| acc.checked_mul(radix))
            .ok_or_else(|| FrobeniusError::Overflow(format!("lattice size for bounds {bounds:?}")))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_floor_division() {
        let bounds = compute_bounds(29, &[6, 10, 15]).unwrap();
        assert_eq!(bounds.as_slice(), &[4, 2, 1]);
    }

    #[test]
    fn test_bounds_zero_target() {
        let bounds = compute_bounds(0, &[3, 5, 7]).unwrap();
        assert_eq!(bounds.as_slice(), &[0, 0, 0]);
    }

    #[test]
    fn test_bounds_generator_larger_than_target() {
        let bounds = compute_bounds(4, &[5, 2]).unwrap();
        assert_eq!(bounds.as_slice(), &[0, 2]);
    }

    #[test]
    fn test_bounds_negative_target() {
        let err = compute_bounds(-1, &[3, 5]).unwrap_err();
        assert!(matches!(err, FrobeniusError::InvalidInput(_)));
    }

    #[test]
    fn test_bounds_non_positive_generator() {
        assert!(matches!(
            compute_bounds(10, &[3, 0]),
            Err(FrobeniusError::InvalidInput(_))
        ));
        assert!(matches!(
            compute_bounds(10, &[-2, 3]),
            Err(FrobeniusError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_lattice_size() {
        assert_eq!(lattice_size(&[2, 1]).unwrap(), 6);
        assert_eq!(lattice_size(&[0, 0, 0]).unwrap(), 1);
        assert_eq!(lattice_size(&[]).unwrap(), 1);
    }

    #[test]
    fn test_lattice_size_overflow() {
        let err = lattice_size(&[u64::MAX]).unwrap_err();
        assert!(matches!(err, FrobeniusError::Overflow(_)));
        let err = lattice_size(&[u32::MAX as u64 + 1, u32::MAX as u64 + 1]).unwrap_err();
        assert!(matches!(err, FrobeniusError::Overflow(_)));
    }
}
