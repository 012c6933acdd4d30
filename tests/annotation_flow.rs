//! End-to-end annotation flow exercised through the public crate surface.

use chrono::Utc;
use serde_json::Value;
use wardrobe_link::{ClosetError, ItemDetails, Linker, LinkerConfig, RawItemRecord, Segment};

fn record(id: &str, name: &str, category: &str) -> RawItemRecord<ItemDetails> {
    RawItemRecord {
        id: id.into(),
        name: name.into(),
        attributes: None,
        payload: ItemDetails {
            category: category.into(),
            description: None,
            image_url: None,
            added_on: Utc::now(),
        },
    }
}

fn reassemble<P>(segments: &[Segment<'_, '_, P>]) -> String {
    segments.iter().map(|segment| segment.content()).collect()
}

#[test]
fn yaml_config_drives_the_whole_flow() {
    let config = LinkerConfig::from_yaml(
        r#"
version: "1.0"
closet:
  version: 1
  trim_names: true
suggestions:
  min_score: 0.5
  max_results: 3
"#,
    )
    .expect("config should parse");

    let records = vec![
        record("w-1", "Navy Blazer", "outerwear"),
        record("w-2", "White Tee", "tops"),
    ];
    let linker = Linker::from_records(records, &config).expect("admission should succeed");

    let reply = "Wear the Navy Blazer over a white tee today.";
    let segments = linker.annotate(reply);

    let referenced: Vec<(&str, &str)> = segments
        .iter()
        .filter_map(|segment| segment.item())
        .map(|item| (item.id.as_str(), item.payload.category.as_str()))
        .collect();
    assert_eq!(referenced, vec![("w-1", "outerwear"), ("w-2", "tops")]);
    assert_eq!(reassemble(&segments), reply);
}

#[test]
fn segments_serialize_with_kind_tags() {
    let records = vec![record("w-7", "Silk Scarf", "accessories")];
    let linker = Linker::from_records(records, &LinkerConfig::default()).expect("admission");

    let segments = linker.annotate("Add the Silk Scarf last.");
    let value = serde_json::to_value(&segments).expect("segments should serialize");

    let Value::Array(entries) = &value else {
        panic!("expected a JSON array, got {value}");
    };
    assert_eq!(entries.len(), 3);

    assert_eq!(entries[0]["kind"], "text");
    assert_eq!(entries[0]["content"], "Add the ");
    assert!(entries[0].get("item").is_none());

    assert_eq!(entries[1]["kind"], "item-reference");
    assert_eq!(entries[1]["content"], "Silk Scarf");
    assert_eq!(entries[1]["item"]["id"], "w-7");
    assert_eq!(entries[1]["item"]["name"], "Silk Scarf");
    assert_eq!(entries[1]["item"]["payload"]["category"], "accessories");

    assert_eq!(entries[2]["kind"], "text");
    assert_eq!(entries[2]["content"], " last.");
}

#[test]
fn unmatched_reply_passes_through_untouched() {
    let records = vec![record("w-1", "Navy Blazer", "outerwear")];
    let linker = Linker::from_records(records, &LinkerConfig::default()).expect("admission");

    let reply = "Nothing in this sentence is in the closet.";
    let segments = linker.annotate(reply);

    assert_eq!(segments.len(), 1);
    assert!(segments[0].is_text());
    assert_eq!(segments[0].content(), reply);
}

#[test]
fn admission_failures_name_the_offending_record() {
    let duplicate = vec![
        record("w-1", "Navy Blazer", "outerwear"),
        record("w-1", "White Tee", "tops"),
    ];
    let err = Linker::from_records(duplicate, &LinkerConfig::default()).unwrap_err();
    match &err {
        ClosetError::DuplicateId { id } => assert_eq!(id.as_str(), "w-1"),
        other => panic!("expected a duplicate id rejection, got {other:?}"),
    }
    assert!(err.to_string().contains("w-1"));

    let blank = vec![record("w-2", "   ", "tops")];
    let err = Linker::from_records(blank, &LinkerConfig::default()).unwrap_err();
    assert!(matches!(err, ClosetError::BlankName { .. }));
}

#[test]
fn suggest_offers_close_names_for_typos() {
    let records = vec![
        record("w-1", "Navy Blazer", "outerwear"),
        record("w-2", "White Tee", "tops"),
        record("w-3", "Black Boots", "shoes"),
    ];
    let linker = Linker::from_records(records, &LinkerConfig::default()).expect("admission");

    let suggestions = linker.suggest("White Tea");
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].name, "White Tee");
    assert!(suggestions[0].score > 0.8);

    assert!(linker.suggest("Trench Coat").is_empty());
}

#[test]
fn longer_multiword_names_win_their_span() {
    let records = vec![
        record("w-1", "Jacket", "outerwear"),
        record("w-2", "Denim Jacket", "outerwear"),
    ];
    let linker = Linker::from_records(records, &LinkerConfig::default()).expect("admission");

    let segments = linker.annotate("Thrift stores price a Denim Jacket fairly.");
    let referenced: Vec<&str> = segments
        .iter()
        .filter_map(|segment| segment.item())
        .map(|item| item.id.as_str())
        .collect();
    assert_eq!(referenced, vec!["w-2"]);
}
