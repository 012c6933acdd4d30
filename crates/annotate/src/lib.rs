//! # Wardrobe mention annotation
//!
//! Turns free-form assistant text plus a list of wardrobe items into an
//! ordered sequence of renderable segments: plain text interleaved with
//! references to the items the text mentions. A chat UI renders the text
//! segments as-is and the reference segments as interactive links.
//!
//! ## Contract
//!
//! - [`annotate`] is a pure function of `(text, items)`: no I/O, no global
//!   state, deterministic output, and it never fails for any well-formed
//!   input, including empty text and an empty item list.
//! - Matching is case-insensitive exact-substring with word-boundary
//!   checks. There is no tokenization, stemming, or fuzzy fallback; an
//!   item's name is a literal pattern.
//! - Output segments are non-overlapping, contiguous, in input order, and
//!   concatenate back to the input text exactly.
//!
//! ## Example
//!
//! ```
//! use closet::{ItemId, ItemRecord};
//! use annotate::{annotate, Segment};
//!
//! let items = vec![
//!     ItemRecord {
//!         id: ItemId::new("i-1"),
//!         name: "Red Hat".to_string(),
//!         attributes: None,
//!         payload: (),
//!     },
//! ];
//!
//! let segments = annotate("Wear the Red Hat today", &items);
//!
//! assert!(matches!(segments[1], Segment::ItemReference { content: "Red Hat", .. }));
//! ```

mod boundary;
mod engine;
mod segment;

pub use crate::engine::annotate;
pub use crate::segment::Segment;
