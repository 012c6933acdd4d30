//! Record types shared across closet admission.
//!
//! A [`RawItemRecord`] is whatever the caller hands us; an [`ItemRecord`] is
//! the sanitized form that lives inside a [`Closet`](crate::Closet). The
//! split keeps "unchecked input" and "admitted item" apart in the type
//! system, so downstream code never has to re-validate.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier for a wardrobe item.
///
/// Identifiers are caller-assigned (database keys, UUIDs, slugs) and are
/// never parsed or interpreted; the only requirements are that they are
/// non-blank and unique within one closet.
///
/// # Examples
///
/// ```
/// use closet::ItemId;
///
/// let id = ItemId::new("item-42");
/// assert_eq!(id.as_str(), "item-42");
/// assert_eq!(id.to_string(), "item-42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Wrap an identifier as supplied by the caller.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// View the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Borrow<str> for ItemId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// An item as supplied by the caller, before validation.
///
/// The `payload` type parameter is opaque descriptive data (category, image
/// reference, description, whatever the host application keeps per item).
/// Admission never reads it; annotation carries it through by reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawItemRecord<P> {
    /// Caller-assigned identifier; must be unique within one closet.
    pub id: String,
    /// Display name. Doubles as the literal key the annotation scan
    /// matches against, so its exact spelling matters.
    pub name: String,
    /// Free-form extension data. Size-checked at admission when the config
    /// sets a limit, otherwise passed through untouched.
    pub attributes: Option<serde_json::Value>,
    /// Opaque descriptive payload carried through to annotation output.
    pub payload: P,
}

/// A validated item inside a [`Closet`](crate::Closet).
///
/// Ids and names have been sanitized per the admitting
/// [`ClosetConfig`](crate::ClosetConfig): control characters optionally
/// stripped, whitespace trimmed, blanks rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord<P> {
    /// Unique identifier within the owning closet.
    pub id: ItemId,
    /// Sanitized display name; the literal annotation match key.
    pub name: String,
    /// Free-form extension data, never inspected by matching.
    pub attributes: Option<serde_json::Value>,
    /// Opaque descriptive payload.
    pub payload: P,
}

/// Strip control characters (when enabled) and surrounding whitespace.
///
/// Returns `None` when nothing printable remains.
pub(crate) fn sanitize_id(value: String, strip_control: bool) -> Option<String> {
    let filtered = strip_control_chars(value, strip_control);
    let trimmed = filtered.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Sanitize a display name.
///
/// Blankness is always judged on the trimmed text, but the stored name only
/// loses its surrounding whitespace when `trim` is set.
pub(crate) fn sanitize_name(value: String, strip_control: bool, trim: bool) -> Option<String> {
    let filtered = strip_control_chars(value, strip_control);
    if filtered.trim().is_empty() {
        return None;
    }
    if trim {
        Some(filtered.trim().to_string())
    } else {
        Some(filtered)
    }
}

fn strip_control_chars(value: String, strip: bool) -> String {
    if strip {
        value.chars().filter(|c| !c.is_control()).collect()
    } else {
        value
    }
}
