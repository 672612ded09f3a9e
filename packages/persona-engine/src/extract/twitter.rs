//! Twitter extraction: recover (id, text) pairs from deeply nested timeline
//! payloads.
//!
//! The timeline API interleaves tweet nodes with unrelated modules (follow
//! suggestions, cursor entries) at unpredictable depths, so extraction is a
//! recursive walk over raw JSON rather than a typed deserialization. An id
//! field on a node scopes every descendant until a deeper node carries its
//! own id.

use std::collections::HashSet;

use serde_json::Value;

use crate::types::record::{ImportRecord, Platform};

/// Field carrying a tweet's stable id.
const ID_KEY: &str = "rest_id";

/// On long tweets this field holds the complete body.
const NOTE_TEXT_KEY: &str = "text";

/// The standard body field; truncated with an ellipsis on long tweets.
const LEGACY_TEXT_KEY: &str = "full_text";

/// Extract at most one record per tweet id across all fetched pages.
///
/// The complete `text` field wins over the truncated `full_text` when a node
/// carries both. Text fields with no id in scope (e.g. follow-suggestion
/// modules) are dropped silently.
pub fn extract_records(pages: &[Value]) -> Vec<ImportRecord> {
    let mut seen = HashSet::new();
    let mut records = Vec::new();
    for page in pages {
        walk(page, None, &mut seen, &mut records);
    }
    records
}

fn walk(
    node: &Value,
    inherited_id: Option<&str>,
    seen: &mut HashSet<String>,
    out: &mut Vec<ImportRecord>,
) {
    match node {
        Value::Object(map) => {
            let own_id = map.get(ID_KEY).and_then(id_text);
            let current_id = own_id.as_deref().or(inherited_id);

            // Complete body first so it wins over the truncated one.
            for key in [NOTE_TEXT_KEY, LEGACY_TEXT_KEY] {
                if let (Some(id), Some(Value::String(text))) = (current_id, map.get(key)) {
                    if seen.insert(id.to_string()) {
                        out.push(ImportRecord::new(id, Platform::Twitter, text.clone()));
                    }
                }
            }

            for (key, value) in map {
                if key == ID_KEY || key == NOTE_TEXT_KEY || key == LEGACY_TEXT_KEY {
                    continue;
                }
                walk(value, current_id, seen, out);
            }
        }
        Value::Array(items) => {
            for item in items {
                walk(item, inherited_id, seen, out);
            }
        }
        _ => {}
    }
}

/// Ids arrive as strings but occasionally as bare numbers.
fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn id_scopes_nested_text() {
        let page = json!({
            "rest_id": "100",
            "legacy": { "full_text": "hello world" }
        });

        let records = extract_records(&[page]);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].external_id, "100");
        assert_eq!(records[0].text, "hello world");
        assert_eq!(records[0].platform, Platform::Twitter);
    }

    #[test]
    fn complete_text_wins_over_truncated() {
        let page = json!({
            "rest_id": "100",
            "note_tweet": {
                "text": "the complete long body",
                "full_text": "the complete long bo..."
            }
        });

        let records = extract_records(&[page]);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].text, "the complete long body");
    }

    #[test]
    fn one_record_per_id_across_depths() {
        let page = json!({
            "rest_id": "100",
            "legacy": { "full_text": "outer" },
            "quoted": { "full_text": "still id 100" }
        });

        let records = extract_records(&[page]);

        // Both fields sit under id 100; only the first emission survives.
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].external_id, "100");
    }

    #[test]
    fn deeper_id_overrides_inherited_one() {
        let page = json!({
            "rest_id": "1",
            "legacy": { "full_text": "tweet one" },
            "retweeted": {
                "rest_id": "2",
                "legacy": { "full_text": "tweet two" }
            }
        });

        let mut records = extract_records(&[page]);
        records.sort_by(|a, b| a.external_id.cmp(&b.external_id));

        assert_eq!(records.len(), 2);
        assert_eq!(records[0], ImportRecord::new("1", Platform::Twitter, "tweet one"));
        assert_eq!(records[1], ImportRecord::new("2", Platform::Twitter, "tweet two"));
    }

    #[test]
    fn text_without_id_is_dropped() {
        // Follow-suggestion modules carry text but no rest_id.
        let page = json!({
            "who_to_follow": { "full_text": "you might like..." }
        });

        assert!(extract_records(&[page]).is_empty());
    }

    #[test]
    fn non_string_text_is_dropped() {
        let page = json!({
            "rest_id": "100",
            "full_text": null,
            "text": { "nested": "not a body" }
        });

        assert!(extract_records(&[page]).is_empty());
    }

    #[test]
    fn numeric_ids_are_accepted() {
        let page = json!({
            "rest_id": 25073877u64,
            "legacy": { "full_text": "numeric id" }
        });

        let records = extract_records(&[page]);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].external_id, "25073877");
    }

    #[test]
    fn seen_ids_span_pages() {
        let tweet = json!({ "rest_id": "100", "legacy": { "full_text": "repeated" } });

        let records = extract_records(&[tweet.clone(), tweet]);

        assert_eq!(records.len(), 1);
    }
}
