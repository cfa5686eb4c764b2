//! Tests for the search algorithms.

use std::collections::HashSet;

use frobenius_config::{BoundStrategy, FrobeniusStrategy, SearchConfig};
use frobenius_core::{compute_bounds, evaluate, lattice_size, FrobeniusError};
use frobenius_test::{representable_up_to, KNOWN_SEMIGROUPS};

use super::*;
use crate::scope::SearchScope;

fn run<T>(
    config: &SearchConfig,
    search: impl FnOnce(&mut SearchScope<'_>) -> frobenius_core::Result<T>,
) -> (frobenius_core::Result<T>, u64) {
    let mut scope = SearchScope::new(config);
    scope.start_search();
    let result = search(&mut scope);
    (result, scope.total_step_count())
}

#[test]
fn test_membership_short_circuits() {
    let config = SearchConfig::default();
    // [0,0] [1,0] [2,0] [0,1] [1,1] -> hit on the fifth vector
    let (member, steps) = run(&config, |scope| membership_core(scope, 8, &[3, 5]));
    assert!(member.unwrap());
    assert_eq!(steps, 5);
}

#[test]
fn test_non_member_exhausts_lattice() {
    let config = SearchConfig::default();
    let (member, steps) = run(&config, |scope| membership_core(scope, 7, &[3, 5]));
    assert!(!member.unwrap());
    assert_eq!(steps, 6);
}

#[test]
fn test_membership_zero_is_free() {
    let config = SearchConfig::default();
    let (member, steps) = run(&config, |scope| membership_core(scope, 0, &[3, 5]));
    assert!(member.unwrap());
    assert_eq!(steps, 0);

    let (member, _) = run(&config, |scope| membership_core(scope, 0, &[]));
    assert!(member.unwrap());
}

#[test]
fn test_membership_against_explicit_subsequence() {
    let config = SearchConfig::default();
    let (member, _) = run(&config, |scope| membership_core(scope, 10, &[3]));
    assert!(!member.unwrap());
    let (member, _) = run(&config, |scope| membership_core(scope, 10, &[5]));
    assert!(member.unwrap());
    let (member, _) = run(&config, |scope| membership_core(scope, 8, &[5, 3]));
    assert!(member.unwrap());
}

#[test]
fn test_membership_matches_oracle() {
    let config = SearchConfig::default();
    for known in KNOWN_SEMIGROUPS {
        let oracle = representable_up_to(known.generators, 40);
        for (t, &expected) in oracle.iter().enumerate() {
            let (member, _) = run(&config, |scope| {
                membership_core(scope, t as i64, known.generators)
            });
            assert_eq!(member.unwrap(), expected, "t = {t}, {:?}", known.generators);
        }
    }
}

#[test]
fn test_membership_invalid_input() {
    let config = SearchConfig::default();
    let (result, _) = run(&config, |scope| membership_core(scope, -3, &[3, 5]));
    assert!(matches!(result, Err(FrobeniusError::InvalidInput(_))));

    let (result, _) = run(&config, |scope| membership_core(scope, 4, &[]));
    assert!(matches!(result, Err(FrobeniusError::InvalidInput(_))));

    let (result, _) = run(&config, |scope| membership_core(scope, 4, &[2, 0]));
    assert!(matches!(result, Err(FrobeniusError::InvalidInput(_))));
}

#[test]
fn test_zero_target_still_validates_generators() {
    let config = SearchConfig::default();
    let (member, steps) = run(&config, |scope| membership_core(scope, 0, &[-1, 0]));
    assert!(matches!(member, Err(FrobeniusError::InvalidInput(_))));
    assert_eq!(steps, 0);

    let (count, _) = run(&config, |scope| {
        sylvester_denumerant(scope, 0, &[-1, 0], false)
    });
    assert!(matches!(count, Err(FrobeniusError::InvalidInput(_))));
}

#[test]
fn test_search_reports_overflow() {
    let config = SearchConfig::default();
    let (member, steps) = run(&config, |scope| membership_core(scope, i64::MAX, &[1, 1, 1]));
    assert!(matches!(member, Err(FrobeniusError::Overflow(_))));
    assert_eq!(steps, 0);

    let (count, _) = run(&config, |scope| {
        sylvester_denumerant(scope, i64::MAX, &[1, 1, 1], false)
    });
    assert!(matches!(count, Err(FrobeniusError::Overflow(_))));
}

#[test]
fn test_membership_respects_lattice_cap() {
    let config = SearchConfig::default().with_max_lattice_size(5);
    let (result, steps) = run(&config, |scope| membership_core(scope, 8, &[3, 5]));
    assert!(matches!(result, Err(FrobeniusError::InvalidInput(_))));
    assert_eq!(steps, 0);
}

#[test]
fn test_denumerant_single_representation() {
    let config = SearchConfig::default();
    let (result, steps) = run(&config, |scope| sylvester_denumerant(scope, 8, &[3, 5], true));
    let result = result.unwrap();
    assert_eq!(result.count, 1);
    assert_eq!(result.solutions.len(), 1);
    assert_eq!(result.solutions[0].as_slice(), &[1, 1]);
    assert_eq!(steps, 6);
}

#[test]
fn test_denumerant_solutions_in_enumeration_order() {
    let config = SearchConfig::default();
    let (result, _) = run(&config, |scope| {
        sylvester_denumerant(scope, 15, &[3, 5], true)
    });
    let result = result.unwrap();
    assert_eq!(result.count, 2);
    let solutions: Vec<Vec<u64>> = result.solutions.iter().map(|l| l.to_vec()).collect();
    assert_eq!(solutions, vec![vec![5, 0], vec![0, 3]]);
}

#[test]
fn test_denumerant_without_recording() {
    let config = SearchConfig::default();
    let (result, _) = run(&config, |scope| {
        sylvester_denumerant(scope, 30, &[6, 10, 15], false)
    });
    let result = result.unwrap();
    // 5*6, 3*10, 2*15
    assert_eq!(result.count, 3);
    assert!(result.solutions.is_empty());
}

#[test]
fn test_denumerant_zero_target() {
    let config = SearchConfig::default();
    for known in KNOWN_SEMIGROUPS {
        let (result, steps) = run(&config, |scope| {
            sylvester_denumerant(scope, 0, known.generators, false)
        });
        assert_eq!(result.unwrap().count, 1);
        assert_eq!(steps, 1);
    }
}

#[test]
fn test_denumerant_visits_whole_lattice() {
    let config = SearchConfig::default();
    let generators = [3, 4, 7];
    for t in [0, 1, 11, 20] {
        let bounds = compute_bounds(t, &generators).unwrap();
        let expected = lattice_size(&bounds).unwrap();
        let (result, steps) = run(&config, |scope| {
            sylvester_denumerant(scope, t, &generators, true)
        });
        let result = result.unwrap();
        assert_eq!(steps, expected);

        let distinct: HashSet<Vec<u64>> = result.solutions.iter().map(|l| l.to_vec()).collect();
        assert_eq!(distinct.len() as u64, result.count);
        for solution in &result.solutions {
            assert_eq!(evaluate(solution, &generators).unwrap(), t);
        }
    }
}

#[test]
fn test_denumerant_positive_iff_member() {
    let config = SearchConfig::default();
    let generators = [5, 7, 9];
    for t in 0..40 {
        let (member, _) = run(&config, |scope| membership_core(scope, t, &generators));
        let (count, _) = run(&config, |scope| {
            sylvester_denumerant(scope, t, &generators, false)
        });
        assert_eq!(member.unwrap(), count.unwrap().count > 0, "t = {t}");
    }
}

#[test]
fn test_bound_strategies() {
    assert_eq!(frobenius_number_bound(&[5, 7, 9], BoundStrategy::Schur).unwrap(), 31);
    assert_eq!(frobenius_number_bound(&[5, 7, 9], BoundStrategy::SmallestPair).unwrap(), 23);
    assert_eq!(frobenius_number_bound(&[5, 7, 9], BoundStrategy::Best).unwrap(), 23);
    assert_eq!(frobenius_number_bound(&[7, 11, 13, 17], BoundStrategy::Best).unwrap(), 59);
    assert_eq!(frobenius_number_bound(&[6, 10, 15], BoundStrategy::SmallestPair).unwrap(), 69);
    assert_eq!(frobenius_number_bound(&[1], BoundStrategy::Best).unwrap(), -1);
    assert_eq!(frobenius_number_bound(&[1, 5], BoundStrategy::Schur).unwrap(), -1);
}

#[test]
fn test_bound_never_below_frobenius() {
    for known in KNOWN_SEMIGROUPS {
        for strategy in [BoundStrategy::Best, BoundStrategy::SmallestPair, BoundStrategy::Schur] {
            let bound = frobenius_number_bound(known.generators, strategy).unwrap();
            assert!(bound >= known.frobenius, "{:?} {strategy}", known.generators);
        }
    }
}

#[test]
fn test_bound_requires_coprime() {
    assert!(matches!(
        frobenius_number_bound(&[4, 6], BoundStrategy::Best),
        Err(FrobeniusError::UndefinedResult(_))
    ));
    assert!(matches!(
        frobenius_number_bound(&[], BoundStrategy::Best),
        Err(FrobeniusError::UndefinedResult(_))
    ));
}

#[test]
fn test_frobenius_number_both_strategies() {
    for strategy in [FrobeniusStrategy::DownwardScan, FrobeniusStrategy::UpwardRun] {
        let config = SearchConfig::default().with_frobenius_strategy(strategy);
        for known in KNOWN_SEMIGROUPS {
            let (frobenius, _) = run(&config, |scope| frobenius_number(scope, known.generators));
            assert_eq!(
                frobenius.unwrap(),
                known.frobenius,
                "{strategy} {:?}",
                known.generators
            );
        }
    }
}

#[test]
fn test_frobenius_number_with_loose_bound() {
    let config = SearchConfig::default().with_bound_strategy(BoundStrategy::Schur);
    let (frobenius, _) = run(&config, |scope| frobenius_number(scope, &[5, 7, 9]));
    assert_eq!(frobenius.unwrap(), 13);
}

#[test]
fn test_frobenius_number_not_coprime() {
    let config = SearchConfig::default();
    let (result, steps) = run(&config, |scope| frobenius_number(scope, &[4, 6]));
    assert!(matches!(result, Err(FrobeniusError::UndefinedResult(_))));
    assert_eq!(steps, 0);
}

#[test]
fn test_gaps_match_fixtures() {
    let config = SearchConfig::default();
    for known in KNOWN_SEMIGROUPS {
        let (gaps, _) = run(&config, |scope| gaps(scope, known.generators));
        assert_eq!(gaps.unwrap(), known.gaps, "{:?}", known.generators);
    }
}

#[test]
fn test_gaps_not_coprime() {
    let config = SearchConfig::default();
    let (result, _) = run(&config, |scope| gaps(scope, &[6, 9, 12]));
    assert!(matches!(result, Err(FrobeniusError::UndefinedResult(_))));
}
