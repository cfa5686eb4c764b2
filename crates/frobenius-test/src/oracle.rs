//! Membership oracle by dynamic programming.
//!
//! `t` is representable iff `t == 0` or `t - a` is representable for some
//! generator `a <= t`.

/// Representability of every integer in `[0, limit]`.
pub fn representable_up_to(generators: &[i64], limit: usize) -> Vec<bool> {
    let mut representable = vec![false; limit + 1];
    representable[0] = true;
    for t in 1..=limit {
        representable[t] = generators
            .iter()
            .filter_map(|&a| usize::try_from(a).ok())
            .any(|a| a > 0 && a <= t && representable[t - a]);
    }
    representable
}

/// Non-representable integers in `[1, limit]`.
pub fn oracle_gaps(generators: &[i64], limit: usize) -> Vec<i64> {
    representable_up_to(generators, limit)
        .iter()
        .enumerate()
        .skip(1)
        .filter(|&(_, &member)| !member)
        .map(|(t, _)| t as i64)
        .collect()
}
