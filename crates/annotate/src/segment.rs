//! The annotated output type.

use closet::ItemRecord;
use serde::Serialize;

/// One contiguous piece of annotated output.
///
/// A segment borrows its `content` from the input text, so the original
/// casing and spelling are preserved byte for byte, and an item reference
/// borrows the matched record rather than copying it. Concatenating every
/// segment's content in order reconstructs the input exactly.
///
/// Serialized form is tagged for renderers:
///
/// ```json
/// {"kind": "text", "content": "I wore my "}
/// {"kind": "item-reference", "content": "Blue Jacket", "item": {...}}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Segment<'t, 'i, P> {
    /// Plain text between item mentions.
    Text {
        /// The exact slice of the input this segment covers.
        content: &'t str,
    },
    /// A span of text that names one wardrobe item.
    ItemReference {
        /// The exact slice of the input this segment covers, in the
        /// input's original casing (not the item's canonical name).
        content: &'t str,
        /// The matched record.
        item: &'i ItemRecord<P>,
    },
}

impl<'t, 'i, P> Segment<'t, 'i, P> {
    /// The exact slice of the input this segment covers.
    pub fn content(&self) -> &'t str {
        match self {
            Segment::Text { content } | Segment::ItemReference { content, .. } => content,
        }
    }

    /// The referenced item, when this segment is an item reference.
    pub fn item(&self) -> Option<&'i ItemRecord<P>> {
        match self {
            Segment::Text { .. } => None,
            Segment::ItemReference { item, .. } => Some(item),
        }
    }

    /// Whether this segment is plain text.
    pub fn is_text(&self) -> bool {
        matches!(self, Segment::Text { .. })
    }

    /// Whether this segment references an item.
    pub fn is_item_reference(&self) -> bool {
        matches!(self, Segment::ItemReference { .. })
    }
}
