//! Membership test.

use frobenius_core::lambda::advance;
use frobenius_core::{bit_length, compute_bounds, evaluate, Lambda, Result};
use smallvec::smallvec;
use tracing::debug;

use super::validate_target;
use crate::scope::SearchScope;

/// Returns true if `t` is a non-negative combination of `generators`.
///
/// `t == 0` is always representable by the empty combination. Otherwise the
/// bounded lattice is walked until a vector sums to `t` or the walk is
/// exhausted.
///
/// # Errors
///
/// - `InvalidInput` for a negative target, a non-positive generator, an empty
///   sequence with `t > 0`, or a lattice larger than `max_lattice_size`.
/// - `Overflow` if the lattice size or a weighted sum overflows.
pub fn membership_core(scope: &mut SearchScope<'_>, t: i64, generators: &[i64]) -> Result<bool> {
    validate_target(t, generators)?;
    if t == 0 {
        return Ok(true);
    }

    let bounds = compute_bounds(t, generators)?;
    let lattice_size = scope.check_lattice(&bounds)?;
    let start_steps = scope.total_step_count();

    let mut lambda: Lambda = smallvec![0; bounds.len()];
    let found = loop {
        scope.increment_step_count();
        if evaluate(&lambda, generators)? == t {
            scope.record_hit();
            break true;
        }
        if !advance(&mut lambda, &bounds) {
            break false;
        }
    };

    debug!(
        event = "membership",
        target = t,
        target_bits = bit_length(t as u64),
        lattice_size = lattice_size,
        steps = scope.total_step_count() - start_steps,
        member = found,
    );
    Ok(found)
}
