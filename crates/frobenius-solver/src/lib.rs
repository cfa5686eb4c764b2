//! Frobenius Solver - Composition search engine for numerical semigroups
//!
//! This crate provides the search layer on top of `frobenius-core`:
//! - Membership test and Sylvester denumerant
//! - Frobenius number (fast upper bound and exact scans)
//! - Gap set and genus
//! - Search scope and statistics
//! - [`SemigroupSolver`] and the [`SemigroupSearch`] extension trait
//!
//! Logging levels:
//! - **INFO**: Frobenius and gap search start/end summaries
//! - **DEBUG**: Individual membership and denumerant searches
//! - **TRACE**: Every representation found by the denumerant

pub mod scope;
pub mod search;
pub mod solver;
pub mod stats;

pub use scope::SearchScope;
pub use search::Denumerant;
pub use solver::{SemigroupSearch, SemigroupSolver};
pub use stats::SearchStats;
