//! Sylvester denumerant.

use frobenius_core::lambda::advance;
use frobenius_core::{compute_bounds, evaluate, Lambda, Result};
use smallvec::smallvec;
use tracing::{debug, trace};

use super::validate_target;
use crate::scope::SearchScope;

/// Outcome of a denumerant search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Denumerant {
    /// Number of distinct representations of the target.
    pub count: u64,
    /// The matching vectors in enumeration order, if recording was requested.
    pub solutions: Vec<Lambda>,
}

/// Counts the representations of `t` over `generators`.
///
/// Unlike [`membership_core`](super::membership_core) the walk never
/// short-circuits: every vector of the bounded lattice is evaluated. `t == 0`
/// has exactly one representation, the all-zero vector.
///
/// # Errors
///
/// Same contract as [`membership_core`](super::membership_core).
pub fn sylvester_denumerant(
    scope: &mut SearchScope<'_>,
    t: i64,
    generators: &[i64],
    record_solutions: bool,
) -> Result<Denumerant> {
    validate_target(t, generators)?;

    let bounds = compute_bounds(t, generators)?;
    let lattice_size = scope.check_lattice(&bounds)?;
    let start_steps = scope.total_step_count();

    let mut result = Denumerant::default();
    let mut lambda: Lambda = smallvec![0; bounds.len()];
    loop {
        scope.increment_step_count();
        if evaluate(&lambda, generators)? == t {
            scope.record_hit();
            result.count += 1;
            trace!(event = "representation", target = t, lambda = ?lambda.as_slice());
            if record_solutions {
                result.solutions.push(lambda.clone());
            }
        }
        if !advance(&mut lambda, &bounds) {
            break;
        }
    }

    debug!(
        event = "denumerant",
        target = t,
        lattice_size = lattice_size,
        steps = scope.total_step_count() - start_steps,
        count = result.count,
    );
    Ok(result)
}
