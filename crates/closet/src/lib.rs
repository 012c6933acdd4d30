//! # Wardrobe closet admission
//!
//! This crate turns caller-supplied wardrobe records into a validated
//! [`Closet`]: the collection every downstream consumer (annotation,
//! suggestions, rendering) reads items from.
//!
//! Design notes, in the order they matter:
//!
//! - **Validate once, at the edge** - Raw records are sanitized and checked
//!   a single time; everything past [`Closet::from_records`] can trust ids
//!   to be unique and names to be non-blank.
//! - **Names are match keys** - An item's name is matched literally against
//!   assistant text downstream, so admission only trims and strips control
//!   characters; it never rewrites spelling, case, or punctuation.
//! - **Payloads stay opaque** - The `P` parameter is carried for the caller
//!   and never inspected here.
//! - **Log everything** - Structured logs via tracing, with elapsed
//!   timings, for debugging production closets.
//!
//! # Examples
//!
//! ```
//! use closet::{Closet, ClosetConfig, RawItemRecord};
//!
//! let records = vec![
//!     RawItemRecord {
//!         id: "item-1".to_string(),
//!         name: "  Blue Jacket ".to_string(),
//!         attributes: None,
//!         payload: (),
//!     },
//! ];
//!
//! let closet = Closet::from_records(records, &ClosetConfig::default())
//!     .expect("admission should succeed");
//!
//! assert_eq!(closet.len(), 1);
//! assert_eq!(closet.items()[0].name, "Blue Jacket");
//! ```

use std::collections::HashMap;
use std::time::Instant;

use tracing::{info, warn, Level};

mod config;
mod error;
mod types;

pub use crate::config::{ClosetConfig, ClosetConfigError, CLOSET_CONFIG_VERSION};
pub use crate::error::ClosetError;
pub use crate::types::{ItemId, ItemRecord, RawItemRecord};

use crate::types::{sanitize_id, sanitize_name};

/// A validated collection of wardrobe items.
///
/// Construction via [`Closet::from_records`] is the only way to obtain one,
/// so holding a `Closet` is proof its invariants hold: every id is unique
/// and non-blank, every name is non-blank. Items keep their admission
/// order, and [`Closet::items`] exposes exactly that order; annotation
/// consumes it as the deterministic tie-break between equal matches.
#[derive(Debug, Clone)]
pub struct Closet<P> {
    items: Vec<ItemRecord<P>>,
    by_id: HashMap<ItemId, usize>,
}

impl<P> Closet<P> {
    /// Validate and admit raw records into a closet.
    ///
    /// Records are processed in input order and the first rejection fails
    /// the whole call. Duplicate *names* are allowed; duplicate ids are
    /// not.
    ///
    /// # Errors
    ///
    /// Returns a [`ClosetError`] naming the offending record for blank
    /// ids or names, duplicate ids, and oversized attribute blobs, or the
    /// config problem if `cfg` itself is invalid.
    pub fn from_records(
        records: Vec<RawItemRecord<P>>,
        cfg: &ClosetConfig,
    ) -> Result<Self, ClosetError> {
        let start = Instant::now();

        let span = tracing::span!(
            Level::INFO,
            "closet.from_records",
            record_count = records.len()
        );
        let _guard = span.enter();

        match Self::admit_all(records, cfg) {
            Ok(closet) => {
                let elapsed_micros = start.elapsed().as_micros();
                info!(
                    item_count = closet.len(),
                    elapsed_micros, "admission_success"
                );
                Ok(closet)
            }
            Err(err) => {
                let elapsed_micros = start.elapsed().as_micros();
                warn!(error = %err, elapsed_micros, "admission_failure");
                Err(err)
            }
        }
    }

    /// Core admission logic: sanitize, check, and index each record.
    fn admit_all(records: Vec<RawItemRecord<P>>, cfg: &ClosetConfig) -> Result<Self, ClosetError> {
        cfg.validate()?;

        let mut items: Vec<ItemRecord<P>> = Vec::with_capacity(records.len());
        let mut by_id: HashMap<ItemId, usize> = HashMap::with_capacity(records.len());

        for (index, record) in records.into_iter().enumerate() {
            let RawItemRecord {
                id,
                name,
                attributes,
                payload,
            } = record;

            let id = sanitize_id(id, cfg.strip_control_chars)
                .map(ItemId::new)
                .ok_or(ClosetError::BlankId { index })?;

            let name = sanitize_name(name, cfg.strip_control_chars, cfg.trim_names)
                .ok_or_else(|| ClosetError::BlankName { id: id.clone() })?;

            if let (Some(limit), Some(value)) = (cfg.max_attribute_bytes, attributes.as_ref()) {
                let size = serde_json::to_vec(value)
                    .map_err(|err| ClosetError::InvalidAttributes {
                        id: id.clone(),
                        reason: err.to_string(),
                    })?
                    .len();
                if size > limit {
                    return Err(ClosetError::AttributesTooLarge { id, size, limit });
                }
            }

            if by_id.contains_key(id.as_str()) {
                return Err(ClosetError::DuplicateId { id });
            }
            by_id.insert(id.clone(), items.len());
            items.push(ItemRecord {
                id,
                name,
                attributes,
                payload,
            });
        }

        Ok(Self { items, by_id })
    }

    /// The admitted items, in admission order.
    pub fn items(&self) -> &[ItemRecord<P>] {
        &self.items
    }

    /// Number of admitted items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the closet holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by id.
    pub fn get(&self, id: &str) -> Option<&ItemRecord<P>> {
        self.by_id.get(id).and_then(|&index| self.items.get(index))
    }

    /// The admitted item names, in admission order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.name.as_str())
    }
}

impl<P> Default for Closet<P> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            by_id: HashMap::new(),
        }
    }
}
