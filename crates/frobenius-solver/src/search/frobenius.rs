//! Frobenius number: algebraic upper bound and exact scans.

use frobenius_config::{BoundStrategy, FrobeniusStrategy};
use frobenius_core::{gcd, gcd_all, FrobeniusError, Result};
use tracing::info;

use super::membership::membership_core;
use crate::scope::SearchScope;

/// Fails with `UndefinedResult` unless the generators are non-empty and coprime.
pub(crate) fn require_coprime(generators: &[i64]) -> Result<()> {
    if generators.is_empty() {
        return Err(FrobeniusError::UndefinedResult(
            "an empty generator set has no Frobenius number".to_string(),
        ));
    }
    if let Some(&g) = generators.iter().find(|&&g| g <= 0) {
        return Err(FrobeniusError::InvalidInput(format!(
            "generators must be positive, got {g}"
        )));
    }
    let d = gcd_all(generators.iter().copied());
    if d != 1 {
        return Err(FrobeniusError::UndefinedResult(format!(
            "generators have gcd {d}, the complement is infinite"
        )));
    }
    Ok(())
}

fn overflow(what: &str) -> FrobeniusError {
    FrobeniusError::Overflow(format!("{what} bound"))
}

/// `a*b - a - b`, the Frobenius number of `<a, b>` for coprime `a`, `b`.
fn pair_bound(a: i64, b: i64) -> Result<i64> {
    a.checked_mul(b)
        .and_then(|p| p.checked_sub(a))
        .and_then(|p| p.checked_sub(b))
        .ok_or_else(|| overflow("pair"))
}

/// Schur's bound `(a_min - 1)(a_max - 1) - 1`.
fn schur_bound(smallest: i64, largest: i64) -> Result<i64> {
    (smallest - 1)
        .checked_mul(largest - 1)
        .and_then(|p| p.checked_sub(1))
        .ok_or_else(|| overflow("Schur"))
}

/// Coprime pairs in lexicographic order over the sorted generators.
fn coprime_pairs(sorted: &[i64]) -> impl Iterator<Item = (i64, i64)> + '_ {
    sorted.iter().enumerate().flat_map(move |(i, &a)| {
        sorted[i + 1..]
            .iter()
            .filter(move |&&b| gcd(a, b) == 1)
            .map(move |&b| (a, b))
    })
}

/// Fast upper bound on the Frobenius number.
///
/// A coprime pair `a, b` generates a sub-semigroup, so its Frobenius number
/// `a*b - a - b` caps the one of the whole set. Schur's bound applies to any
/// coprime set. The bound is `-1` when `1` is a generator.
///
/// # Errors
///
/// - `UndefinedResult` if the generators are empty or not coprime.
/// - `Overflow` if a bound leaves the `i64` range.
///
/// # Examples
///
/// ```
/// use frobenius_config::BoundStrategy;
/// use frobenius_solver::search::frobenius_number_bound;
///
/// assert_eq!(frobenius_number_bound(&[3, 5], BoundStrategy::Best).unwrap(), 7);
/// assert_eq!(frobenius_number_bound(&[6, 10, 15], BoundStrategy::Schur).unwrap(), 69);
/// ```
pub fn frobenius_number_bound(generators: &[i64], strategy: BoundStrategy) -> Result<i64> {
    require_coprime(generators)?;

    let mut sorted = generators.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    let smallest = sorted[0];
    let largest = sorted[sorted.len() - 1];
    let schur = schur_bound(smallest, largest)?;

    match strategy {
        BoundStrategy::Schur => Ok(schur),
        BoundStrategy::SmallestPair => match coprime_pairs(&sorted).next() {
            Some((a, b)) => pair_bound(a, b),
            None => Ok(schur),
        },
        // An overflowing pair bound exceeds `schur`, so it never wins.
        BoundStrategy::Best => Ok(coprime_pairs(&sorted)
            .filter_map(|(a, b)| pair_bound(a, b).ok())
            .fold(schur, i64::min)),
    }
}

/// Exact Frobenius number of `generators`, or `-1` if every non-negative
/// integer is representable.
///
/// # Errors
///
/// - `UndefinedResult` if the generators are empty or not coprime.
/// - Any error of the underlying membership searches.
pub fn frobenius_number(scope: &mut SearchScope<'_>, generators: &[i64]) -> Result<i64> {
    require_coprime(generators)?;

    let bound_strategy = scope.config().bound_strategy;
    let strategy = scope.config().frobenius_strategy;
    let bound = frobenius_number_bound(generators, bound_strategy)?;

    info!(
        event = "search_start",
        search = "frobenius",
        generators = ?generators,
        strategy = %strategy,
        bound_strategy = %bound_strategy,
        bound = bound,
    );

    let frobenius = match strategy {
        FrobeniusStrategy::DownwardScan => downward_scan(scope, generators, bound)?,
        FrobeniusStrategy::UpwardRun => upward_run(scope, generators, bound)?,
    };

    let stats = scope.stats();
    info!(
        event = "search_end",
        search = "frobenius",
        result = frobenius,
        steps = stats.step_count,
        duration_ms = stats.elapsed_ms(),
        speed = stats.steps_per_second(),
    );
    Ok(frobenius)
}

/// The first non-member at or below the bound, scanning down to 1.
fn downward_scan(scope: &mut SearchScope<'_>, generators: &[i64], bound: i64) -> Result<i64> {
    for t in (1..=bound).rev() {
        if !membership_core(scope, t, generators)? {
            return Ok(t);
        }
    }
    Ok(-1)
}

/// Scans upward from 1, tracking the last non-member.
///
/// Once `multiplicity` consecutive integers are members, adding the smallest
/// generator reaches every larger integer, so no gap lies beyond. No gap lies
/// beyond the bound either.
fn upward_run(scope: &mut SearchScope<'_>, generators: &[i64], bound: i64) -> Result<i64> {
    let multiplicity = generators.iter().copied().min().unwrap_or(1);
    let mut last_gap = -1;
    let mut run = 0;
    let mut t = 1;
    while t <= bound && run < multiplicity {
        if membership_core(scope, t, generators)? {
            run += 1;
        } else {
            last_gap = t;
            run = 0;
        }
        t += 1;
    }
    Ok(last_gap)
}
