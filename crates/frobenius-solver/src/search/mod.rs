//! Search algorithms built on the lambda enumerator.
//!
//! Every algorithm takes the generator sequence explicitly, so callers may
//! search against a subset or reordering of a semigroup's own generators.
//!
//! - **Membership**: enumerate until a hit, short-circuiting
//! - **Denumerant**: enumerate the whole lattice, counting hits
//! - **Frobenius number**: algebraic upper bound, then an exact scan
//! - **Gaps**: every non-member in `[1, F]`

mod denumerant;
mod frobenius;
mod gaps;
mod membership;

pub use denumerant::{sylvester_denumerant, Denumerant};
pub use frobenius::{frobenius_number, frobenius_number_bound};
pub use gaps::gaps;
pub use membership::membership_core;

use frobenius_core::{FrobeniusError, Result};

/// Rejects targets and generator sequences no search can run on.
fn validate_target(t: i64, generators: &[i64]) -> Result<()> {
    if t < 0 {
        return Err(FrobeniusError::InvalidInput(format!(
            "target must be non-negative, got {t}"
        )));
    }
    if let Some(&g) = generators.iter().find(|&&g| g <= 0) {
        return Err(FrobeniusError::InvalidInput(format!(
            "generators must be positive, got {g}"
        )));
    }
    if t > 0 && generators.is_empty() {
        return Err(FrobeniusError::InvalidInput(
            "generator sequence must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests;
