//! Frobenius Core - Numerical semigroup model and composition primitives
//!
//! This crate provides the leaf layers of the search engine:
//! - The [`NumericalSemigroup`] model (generators, validity, diagnostics)
//! - Per-generator upper bounds for a target integer
//! - The mixed-radix lambda enumerator
//! - The solution evaluator (`Σ λ[i] * a[i]`)

pub mod bounds;
pub mod error;
pub mod lambda;
pub mod math;
pub mod semigroup;

pub use bounds::{compute_bounds, lattice_size};
pub use error::{FrobeniusError, Result};
pub use lambda::{advance, evaluate, next_lambda, LambdaIter};
pub use math::{bit_length, gcd, gcd_all};
pub use semigroup::{Lambda, NumericalSemigroup};
