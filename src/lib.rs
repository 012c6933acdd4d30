//! Workspace umbrella crate for the wardrobe linker.
//!
//! This crate stitches together closet admission, reply annotation, and name
//! similarity so callers can turn assistant text into linkable segments with
//! a single API entry point.

pub mod config;

pub use annotate::{Segment, annotate};
pub use closet::{
    CLOSET_CONFIG_VERSION, Closet, ClosetConfig, ClosetConfigError, ClosetError, ItemId,
    ItemRecord, RawItemRecord,
};
pub use similarity::{ScoredName, best_match, levenshtein, rank_by_similarity, similarity};

pub use crate::config::{ConfigLoadError, LinkerConfig, SuggestionConfig};

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Descriptive fields a wardrobe item carries in the host application.
///
/// The annotation engine never reads the payload; it rides along on each
/// [`ItemRecord`] so renderers can build links and previews from matched
/// segments. Callers with their own record shape can substitute any payload
/// type for this one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDetails {
    /// Product category, for example `"outerwear"` or `"shoes"`.
    pub category: String,

    /// Free-text description shown in previews.
    #[serde(default)]
    pub description: Option<String>,

    /// Where the item's uploaded image lives.
    #[serde(default)]
    pub image_url: Option<String>,

    /// When the item entered the wardrobe.
    pub added_on: DateTime<Utc>,
}

/// Observer notified after every [`Linker::annotate`] call.
///
/// Observers are injected per linker rather than installed process-wide, so
/// two linkers serving different closets can report to different sinks.
/// Implementations run on the annotating thread and should return quickly.
pub trait AnnotateObserver: Send + Sync {
    fn record_annotate(
        &self,
        text_len: usize,
        item_count: usize,
        latency: Duration,
        segment_count: usize,
    );
}

/// Binds a validated closet to the annotation and suggestion routines.
///
/// Build one per closet and share it by reference; every method takes
/// `&self`, so a linker can serve concurrent callers once constructed.
pub struct Linker<P> {
    closet: Closet<P>,
    suggestions: SuggestionConfig,
    observer: Option<Arc<dyn AnnotateObserver>>,
}

impl<P> Linker<P> {
    /// Wrap an already-admitted closet with default suggestion settings.
    pub fn new(closet: Closet<P>) -> Self {
        Self {
            closet,
            suggestions: SuggestionConfig::default(),
            observer: None,
        }
    }

    /// Admit raw records under `config` and build the linker in one step.
    ///
    /// # Errors
    ///
    /// Returns the first [`ClosetError`] admission produces; the linker is
    /// only built if every record is accepted.
    pub fn from_records(
        records: Vec<RawItemRecord<P>>,
        config: &LinkerConfig,
    ) -> Result<Self, ClosetError> {
        let closet = Closet::from_records(records, &config.closet)?;
        Ok(Self {
            closet,
            suggestions: config.suggestions.clone(),
            observer: None,
        })
    }

    /// Replace the suggestion settings.
    pub fn with_suggestions(mut self, suggestions: SuggestionConfig) -> Self {
        self.suggestions = suggestions;
        self
    }

    /// Attach an observer that is notified after every annotation.
    pub fn with_observer(mut self, observer: Arc<dyn AnnotateObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// The closet this linker annotates against.
    pub fn closet(&self) -> &Closet<P> {
        &self.closet
    }

    /// Annotate `text` against every item in the closet.
    ///
    /// Delegates to [`annotate`]; see there for the matching semantics. The
    /// returned segments borrow from both `text` and this linker.
    pub fn annotate<'t>(&self, text: &'t str) -> Vec<Segment<'t, '_, P>> {
        let start = Instant::now();
        let segments = annotate(text, self.closet.items());
        if let Some(observer) = self.observer.as_deref() {
            observer.record_annotate(
                text.len(),
                self.closet.len(),
                start.elapsed(),
                segments.len(),
            );
        }
        segments
    }

    /// Rank closet names by similarity to `query`, closest first.
    ///
    /// Backs "did you mean" prompts when a user mentions an item the closet
    /// does not contain. The score floor and result cap come from the
    /// suggestion settings this linker was built with.
    pub fn suggest(&self, query: &str) -> Vec<ScoredName> {
        let names: Vec<&str> = self.closet.names().collect();
        rank_by_similarity(
            query,
            &names,
            self.suggestions.min_score,
            self.suggestions.max_results,
        )
    }
}

// Manual impl: the observer handle carries no Debug.
impl<P: fmt::Debug> fmt::Debug for Linker<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Linker")
            .field("closet", &self.closet)
            .field("suggestions", &self.suggestions)
            .finish_non_exhaustive()
    }
}

fn demo_timestamp() -> DateTime<Utc> {
    let Some(date) = NaiveDate::from_ymd_opt(2025, 6, 1) else {
        panic!("invalid demo date components");
    };
    let Some(date_time) = date.and_hms_opt(9, 0, 0) else {
        panic!("invalid demo time components");
    };
    DateTime::<Utc>::from_naive_utc_and_offset(date_time, Utc)
}

fn demo_record(
    id: &str,
    name: &str,
    category: &str,
    description: &str,
) -> RawItemRecord<ItemDetails> {
    RawItemRecord {
        id: id.to_string(),
        name: name.to_string(),
        attributes: None,
        payload: ItemDetails {
            category: category.to_string(),
            description: Some(description.to_string()),
            image_url: None,
            added_on: demo_timestamp(),
        },
    }
}

/// A small ready-made closet for demos and integration smoke tests.
pub fn demo_closet() -> Result<Closet<ItemDetails>, ClosetError> {
    let records = vec![
        demo_record("item-001", "Navy Blazer", "outerwear", "Two-button wool blazer"),
        demo_record("item-002", "White Tee", "tops", "Plain crew-neck cotton tee"),
        demo_record("item-003", "Black Boots", "shoes", "Ankle-height leather boots"),
        demo_record("item-004", "Silk Scarf", "accessories", "Printed square scarf"),
        demo_record("item-005", "Denim Jacket", "outerwear", "Mid-wash trucker jacket"),
        demo_record("item-006", "Linen Trousers", "bottoms", "Relaxed straight cut"),
    ];

    Closet::from_records(records, &ClosetConfig::default())
}
