//! Shared test fixtures for frobenius crates.
//!
//! This crate provides data and pure functions for testing. It does NOT
//! depend on `frobenius-solver`, so the solver can use it as a dev-dependency.
//!
//! - [`known`] - Semigroups with hand-checked Frobenius numbers and gaps
//! - [`oracle`] - Dynamic-programming membership, independent of the lattice search
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! frobenius-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use frobenius_test::known::{KnownSemigroup, KNOWN_SEMIGROUPS};
//! use frobenius_test::oracle::representable_up_to;
//! ```

pub mod known;
pub mod oracle;

pub use known::{KnownSemigroup, KNOWN_SEMIGROUPS};
pub use oracle::{oracle_gaps, representable_up_to};
