//! The annotation engine: scan, prioritize, resolve, stitch.

use std::time::Instant;

use closet::ItemRecord;
use tracing::debug;

use crate::boundary::has_word_boundaries;
use crate::segment::Segment;


/// A raw scan hit: one occurrence of one item's name.
///
/// `start`/`end` are a half-open byte span into the source text and always
/// lie on char boundaries, so the span is sliceable.
#[derive(Debug)]
struct MatchCandidate<'i, P> {
    item: &'i ItemRecord<P>,
    start: usize,
    end: usize,
    priority: usize,
}

/// Annotate `text` with references to the `items` whose names it mentions.
///
/// Matching is case-insensitive but otherwise literal: no stemming, no
/// normalization, no fuzzy fallback. An occurrence only becomes a match
/// when it stands alone as a word (see the module's boundary rules), and
/// overlapping matches are resolved once, in favor of higher-priority
/// names, so every byte of input belongs to at most one reference.
///
/// The result always covers the whole input in order: plain [`Segment::Text`]
/// pieces interleaved with [`Segment::ItemReference`] pieces, concatenating
/// back to `text` exactly. With no items, no valid match, or empty input,
/// the result is a single text segment carrying the full (possibly empty)
/// input. This function never fails.
///
/// Ranking between matches is deterministic. Longer names outrank shorter
/// ones, multi-word names get a flat bonus, and ties go to the earlier
/// item in `items`, then to the leftmost occurrence. Items with blank
/// names produce no candidates.
///
/// # Examples
///
/// ```
/// use closet::{ItemId, ItemRecord};
/// use annotate::annotate;
///
/// let items = vec![ItemRecord {
///     id: ItemId::new("i-1"),
///     name: "Blue Jacket".to_string(),
///     attributes: None,
///     payload: (),
/// }];
///
/// let segments = annotate("I wore my Blue Jacket today", &items);
///
/// assert_eq!(segments.len(), 3);
/// assert_eq!(segments[1].content(), "Blue Jacket");
/// let rebuilt: String = segments.iter().map(|s| s.content()).collect();
/// assert_eq!(rebuilt, "I wore my Blue Jacket today");
/// ```
pub fn annotate<'t, 'i, P>(text: &'t str, items: &'i [ItemRecord<P>]) -> Vec<Segment<'t, 'i, P>> {
    let start = Instant::now();

    if text.is_empty() || items.is_empty() {
        return vec![Segment::Text { content: text }];
    }

    // Phase 1: scan every item for every word-bounded occurrence.
    let mut candidates: Vec<MatchCandidate<'i, P>> = Vec::new();
    for item in items {
        scan_item(text, item, &mut candidates);
    }
    let candidate_count = candidates.len();

    // Phase 2: highest priority first. The sort is stable, so equal
    // priorities keep scan order: earlier item, then leftmost occurrence.
    candidates.sort_by(|a, b| b.priority.cmp(&a.priority));

    // Phase 3: greedy overlap resolution over a claimed-byte table. A
    // candidate is accepted only if no byte of its span is already taken;
    // rejected candidates are dropped entirely, never trimmed.
    let mut claimed = vec![false; text.len()];
    let mut accepted: Vec<MatchCandidate<'i, P>> = Vec::new();
    for candidate in candidates {
        if claimed[candidate.start..candidate.end].iter().any(|&b| b) {
            continue;
        }
        claimed[candidate.start..candidate.end].fill(true);
        accepted.push(candidate);
    }

    // Phase 4: stitch segments back together in text order.
    accepted.sort_by_key(|candidate| candidate.start);

    let mut segments: Vec<Segment<'t, 'i, P>> = Vec::with_capacity(accepted.len() * 2 + 1);
    let mut cursor = 0;
    for candidate in &accepted {
        if candidate.start > cursor {
            segments.push(Segment::Text {
                content: &text[cursor..candidate.start],
            });
        }
        segments.push(Segment::ItemReference {
            content: &text[candidate.start..candidate.end],
            item: candidate.item,
        });
        cursor = candidate.end;
    }
    if cursor < text.len() {
        segments.push(Segment::Text {
            content: &text[cursor..],
        });
    }

    let elapsed_micros = start.elapsed().as_micros();
    debug!(
        text_len = text.len(),
        item_count = items.len(),
        candidate_count,
        accepted_count = accepted.len(),
        segment_count = segments.len(),
        elapsed_micros,
        "annotate_complete"
    );

    segments
}

/// Collect every word-bounded occurrence of one item's name.
fn scan_item<'i, P>(
    text: &str,
    item: &'i ItemRecord<P>,
    candidates: &mut Vec<MatchCandidate<'i, P>>,
) {
    if item.name.trim().is_empty() {
        return;
    }
    // Per-char fold, the same mapping match_len_at applies to the text;
    // the contextual str::to_lowercase maps a word-final 'Σ' to 'ς', which
    // the text side never produces.
    let folded: Vec<char> = item.name.chars().flat_map(char::to_lowercase).collect();
    let priority = name_priority(&item.name);

    // Probe every char position, so occurrences overlapping an earlier one
    // are still found; overlap resolution decides between them later.
    for (start, _) in text.char_indices() {
        let Some(len) = match_len_at(&text[start..], &folded) else {
            continue;
        };
        let end = start + len;
        if has_word_boundaries(text, start, end) {
            candidates.push(MatchCandidate {
                item,
                start,
                end,
                priority,
            });
        }
    }
}

/// Priority of a name: its char count, plus a flat bonus for multi-word
/// names so that "Blue Jacket" outranks the "Jacket" contained in it.
fn name_priority(name: &str) -> usize {
    let chars = name.chars().count();
    if name.contains(' ') {
        chars + 10
    } else {
        chars
    }
}

/// Try to match the folded name at the very start of `tail`.
///
/// Compares char by char, lowercasing each `tail` char through its full
/// expansion (a lowercased 'İ' is two chars). Returns the byte length of
/// the matched prefix. The match must cover whole chars of `tail`; a name
/// that runs out mid-expansion would split a char and is no match.
fn match_len_at(tail: &str, folded_name: &[char]) -> Option<usize> {
    let mut expect = 0;

    for (offset, c) in tail.char_indices() {
        for folded in c.to_lowercase() {
            if expect == folded_name.len() {
                return None;
            }
            if folded_name[expect] != folded {
                return None;
            }
            expect += 1;
        }
        if expect == folded_name.len() {
            return Some(offset + c.len_utf8());
        }
    }

    None
}
