//! Frobenius - Numerical semigroups in Rust
//!
//! Membership, Sylvester denumerants, Frobenius numbers and gaps of the
//! semigroup generated by a finite set of positive integers.
//!
//! # Example
//!
//! ```rust
//! use frobenius::prelude::*;
//!
//! let mut s = NumericalSemigroup::new([6, 10, 15]).unwrap();
//! assert!(s.is_valid());
//! assert_eq!(s.frobenius_number().unwrap(), 29);
//! assert_eq!(s.genus().unwrap(), 15);
//! ```

pub use frobenius_core::{
    bit_length, compute_bounds, evaluate, gcd, gcd_all, lattice_size, next_lambda, FrobeniusError,
    Lambda, LambdaIter, NumericalSemigroup, Result,
};

pub use frobenius_config::{BoundStrategy, ConfigError, FrobeniusStrategy, SearchConfig};

pub use frobenius_solver::{Denumerant, SearchStats, SemigroupSearch, SemigroupSolver};

/// Search algorithms over explicit generator sequences.
pub use frobenius_solver::search;

#[cfg(feature = "console")]
pub mod console;

pub mod prelude {
    pub use super::{FrobeniusError, NumericalSemigroup, Result};
    pub use super::{FrobeniusStrategy, SearchConfig, SemigroupSearch, SemigroupSolver};
}
