//! Error types produced during closet admission.
//!
//! All errors are typed rather than stringly, and every variant is
//! cloneable and comparable so tests and callers can match on the exact
//! rejection. A failed admission always names the offending record.

use thiserror::Error;

use crate::config::ClosetConfigError;
use crate::types::ItemId;

/// Rejections that prevent a set of raw records from becoming a
/// [`Closet`](crate::Closet).
///
/// Admission is all-or-nothing: the first rejected record fails the whole
/// call, on the theory that a wardrobe with silently missing items is worse
/// than a loud error at load time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ClosetError {
    /// A record's id was empty or whitespace-only after sanitization.
    ///
    /// Reported by input position because there is no usable id to name.
    #[error("record at position {index} has a blank id")]
    BlankId {
        /// Zero-based position of the record in the input.
        index: usize,
    },

    /// A record's name was empty or whitespace-only after sanitization.
    #[error("item {id} has a blank name")]
    BlankName {
        /// Id of the offending record.
        id: ItemId,
    },

    /// Two records carried the same id.
    #[error("duplicate item id {id}")]
    DuplicateId {
        /// The id that appeared more than once.
        id: ItemId,
    },

    /// A record's attribute blob exceeded the configured size limit.
    #[error("item {id} attributes are {size} bytes; the configured limit is {limit}")]
    AttributesTooLarge {
        /// Id of the offending record.
        id: ItemId,
        /// Serialized size of the attribute blob, in bytes.
        size: usize,
        /// Configured upper bound, in bytes.
        limit: usize,
    },

    /// A record's attribute blob could not be serialized for the size check.
    #[error("item {id} attributes could not be serialized: {reason}")]
    InvalidAttributes {
        /// Id of the offending record.
        id: ItemId,
        /// Serializer error text.
        reason: String,
    },

    /// The admission config itself failed validation.
    #[error("invalid closet config: {0}")]
    InvalidConfig(#[from] ClosetConfigError),
}
