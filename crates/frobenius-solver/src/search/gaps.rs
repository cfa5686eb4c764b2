//! Gap set.

use frobenius_core::Result;
use tracing::info;

use super::frobenius::{frobenius_number, require_coprime};
use super::membership::membership_core;
use crate::scope::SearchScope;

/// All positive non-members in increasing order. The length is the genus.
///
/// # Errors
///
/// - `UndefinedResult` if the generators are empty or not coprime.
/// - Any error of the underlying membership searches.
pub fn gaps(scope: &mut SearchScope<'_>, generators: &[i64]) -> Result<Vec<i64>> {
    require_coprime(generators)?;
    info!(
        event = "search_start",
        search = "gaps",
        generators = ?generators,
    );

    let frobenius = frobenius_number(scope, generators)?;
    let mut gaps = Vec::new();
    for t in 1..=frobenius {
        if !membership_core(scope, t, generators)? {
            gaps.push(t);
        }
    }

    let stats = scope.stats();
    info!(
        event = "search_end",
        search = "gaps",
        genus = gaps.len(),
        frobenius = frobenius,
        steps = stats.step_count,
        duration_ms = stats.elapsed_ms(),
    );
    Ok(gaps)
}
