//! Conflict analysis.
//!
//! Groups sessions by course code and decides which pairs of course codes
//! are in hard conflict: some session of one meets on the same day as,
//! and overlaps in time with, some session of the other.
//!
//! The result is an explicit [`ConflictMatrix`] over course positions,
//! built from immutable grouped data and handed to the search as a value.

mod analyzer;
mod matrix;

pub use analyzer::{ConflictAnalysis, ConflictAnalyzer};
pub use matrix::{ConflictMatrix, ConflictRelation};
