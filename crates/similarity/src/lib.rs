//! # Wardrobe name similarity
//!
//! Levenshtein edit distance and a normalized similarity score for wardrobe
//! item names, plus ranking helpers for "did you mean" style suggestions.
//!
//! ## Contract
//!
//! - Every function is a pure function of its string inputs: no I/O, no
//!   clocks, no global process state; identical inputs give identical output.
//! - Distances and scores are computed over Unicode scalar values (`char`s),
//!   never bytes, and comparison is case sensitive.
//! - The exact-match annotation path never calls into this crate. Scoring is
//!   a standalone utility for ranking near-miss names when an exact mention
//!   was not found.
//!
//! ## Example
//!
//! ```
//! use similarity::{levenshtein, similarity};
//!
//! assert_eq!(levenshtein("kitten", "sitting"), 3);
//! assert!((similarity("kitten", "sitten") - 5.0 / 6.0).abs() < 1e-12);
//! ```

mod levenshtein;
mod rank;

pub use crate::levenshtein::{levenshtein, similarity};
pub use crate::rank::{best_match, rank_by_similarity, ScoredName};
