//! Farcaster extraction: flat `data.casts` pages.

use serde_json::Value;

use crate::types::record::{ImportRecord, Platform};

/// Extract one record per well-formed cast across all fetched pages.
///
/// A cast is well-formed when it carries a string `hash` and a string
/// `text`. Pages that do not match the expected shape yield zero records,
/// never an error.
pub fn extract_records(pages: &[Value]) -> Vec<ImportRecord> {
    pages.iter().flat_map(page_records).collect()
}

fn page_records(page: &Value) -> Vec<ImportRecord> {
    let Some(casts) = page.pointer("/data/casts").and_then(Value::as_array) else {
        return Vec::new();
    };

    casts
        .iter()
        .filter_map(|cast| {
            let hash = cast.get("hash")?.as_str()?;
            let text = cast.get("text")?.as_str()?;
            Some(ImportRecord::new(hash, Platform::Farcaster, text))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn emits_one_record_per_cast() {
        let page = json!({
            "data": {
                "casts": [
                    { "hash": "0xaa", "text": "gm" },
                    { "hash": "0xbb", "text": "gn" }
                ],
                "cursor": "next"
            }
        });

        let records = extract_records(&[page]);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0], ImportRecord::new("0xaa", Platform::Farcaster, "gm"));
        assert_eq!(records[1], ImportRecord::new("0xbb", Platform::Farcaster, "gn"));
    }

    #[test]
    fn malformed_casts_are_skipped() {
        let page = json!({
            "data": {
                "casts": [
                    { "hash": "0xaa" },
                    { "text": "no hash" },
                    { "hash": 7, "text": "numeric hash" },
                    { "hash": "0xbb", "text": "kept" }
                ]
            }
        });

        let records = extract_records(&[page]);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].external_id, "0xbb");
    }

    #[test]
    fn malformed_pages_yield_nothing() {
        let pages = [json!({ "error": "rate limited" }), json!(null), json!([1, 2])];

        assert!(extract_records(&pages).is_empty());
    }
}
