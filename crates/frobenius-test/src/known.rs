//! Semigroups with known invariants.

use frobenius_core::NumericalSemigroup;

/// A coprime generator set with its Frobenius number and gaps.
#[derive(Debug, Clone, Copy)]
pub struct KnownSemigroup {
    pub generators: &'static [i64],
    pub frobenius: i64,
    pub gaps: &'static [i64],
}

impl KnownSemigroup {
    /// Builds the semigroup.
    pub fn semigroup(&self) -> NumericalSemigroup {
        NumericalSemigroup::new(self.generators.iter().copied())
            .expect("fixture generators are valid")
    }

    /// Number of gaps.
    pub fn genus(&self) -> usize {
        self.gaps.len()
    }
}

pub const KNOWN_SEMIGROUPS: &[KnownSemigroup] = &[
    KnownSemigroup {
        generators: &[3, 5],
        frobenius: 7,
        gaps: &[1, 2, 4, 7],
    },
    KnownSemigroup {
        generators: &[2, 3],
        frobenius: 1,
        gaps: &[1],
    },
    KnownSemigroup {
        generators: &[6, 10, 15],
        frobenius: 29,
        gaps: &[1, 2, 3, 4, 5, 7, 8, 9, 11, 13, 14, 17, 19, 23, 29],
    },
    KnownSemigroup {
        generators: &[4, 7],
        frobenius: 17,
        gaps: &[1, 2, 3, 5, 6, 9, 10, 13, 17],
    },
    KnownSemigroup {
        generators: &[5, 7, 9],
        frobenius: 13,
        gaps: &[1, 2, 3, 4, 6, 8, 11, 13],
    },
    KnownSemigroup {
        generators: &[3, 7, 11],
        frobenius: 8,
        gaps: &[1, 2, 4, 5, 8],
    },
    KnownSemigroup {
        generators: &[4, 6, 9],
        frobenius: 11,
        gaps: &[1, 2, 3, 5, 7, 11],
    },
    KnownSemigroup {
        generators: &[7, 11, 13, 17],
        frobenius: 23,
        gaps: &[1, 2, 3, 4, 5, 6, 8, 9, 10, 12, 15, 16, 19, 23],
    },
    KnownSemigroup {
        generators: &[1],
        frobenius: -1,
        gaps: &[],
    },
    KnownSemigroup {
        generators: &[1, 5],
        frobenius: -1,
        gaps: &[],
    },
];
