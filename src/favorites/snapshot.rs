//! Persisted snapshot format for favorites.
//!
//! The slot holds a JSON array of property references:
//! `[{"id":"p1","title":"Sea View"}]`. Arrays of bare identifiers
//! (`["p1","p2"]`) and full listings keyed by `_id` are also accepted on
//! read.

use serde_json::Value;
use std::collections::HashSet;

use crate::property::PropertyRef;

/// Storage key for the favorites slot.
pub const FAVORITES_KEY: &str = "favorites";

/// Decode a persisted snapshot.
///
/// Never fails: blank input, malformed JSON and non-array documents all
/// decode to an empty list. Elements that are neither objects with an `id`
/// nor strings are skipped, as are blank ids. Duplicate ids keep the first
/// occurrence.
pub fn decode_snapshot(raw: &str) -> Vec<PropertyRef> {
    if raw.trim().is_empty() {
        return Vec::new();
    }

    let elements = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(elements)) => elements,
        Ok(_) => {
            tracing::warn!("Favorites snapshot is not a JSON array, starting empty");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!("Favorites snapshot is corrupt ({}), starting empty", e);
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    let mut items = Vec::with_capacity(elements.len());

    for element in elements {
        let item = match element {
            Value::String(id) => PropertyRef::new(id),
            value @ Value::Object(_) => match serde_json::from_value::<PropertyRef>(value) {
                Ok(item) => item,
                Err(e) => {
                    tracing::debug!("Skipping unreadable favorites entry: {}", e);
                    continue;
                }
            },
            _ => continue,
        };

        if item.id.is_blank() {
            continue;
        }
        if seen.insert(item.id.clone()) {
            items.push(item);
        }
    }

    items
}

/// Encode a collection for the favorites slot.
pub fn encode_snapshot(items: &[PropertyRef]) -> serde_json::Result<String> {
    serde_json::to_string(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_empty() {
        assert!(decode_snapshot("").is_empty());
        assert!(decode_snapshot("   \n").is_empty());
    }

    #[test]
    fn malformed_json_is_empty() {
        assert!(decode_snapshot("not json at all").is_empty());
        assert!(decode_snapshot("[{\"id\":").is_empty());
    }

    #[test]
    fn non_array_document_is_empty() {
        assert!(decode_snapshot(r#"{"id":"p1"}"#).is_empty());
        assert!(decode_snapshot("null").is_empty());
    }

    #[test]
    fn decodes_objects() {
        let items = decode_snapshot(r#"[{"id":"p1","title":"Villa"},{"id":"p2"}]"#);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title.as_deref(), Some("Villa"));
        assert_eq!(items[1].id.as_str(), "p2");
    }

    #[test]
    fn decodes_full_listings_keyed_by_backend_id() {
        let items = decode_snapshot(r#"[{"_id":"p9","title":"Loft","bhkType":"1 BHK","images":[]}]"#);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id.as_str(), "p9");
        assert_eq!(items[0].bhk_type.as_deref(), Some("1 BHK"));
    }

    #[test]
    fn decodes_bare_identifiers() {
        let items = decode_snapshot(r#"["p1","p2"]"#);
        let ids: Vec<_> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2"]);
    }

    #[test]
    fn skips_unusable_elements() {
        let items = decode_snapshot(r#"[42, null, {"title":"no id"}, "", {"id":"p3"}]"#);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id.as_str(), "p3");
    }

    #[test]
    fn collapses_duplicate_ids_keeping_first() {
        let items = decode_snapshot(r#"[{"id":"p1","title":"first"},"p1",{"id":"p1","title":"third"}]"#);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title.as_deref(), Some("first"));
    }

    #[test]
    fn encode_produces_id_keyed_array() {
        let json = encode_snapshot(&[PropertyRef::new("p1")]).unwrap();
        assert_eq!(json, r#"[{"id":"p1"}]"#);
        assert_eq!(encode_snapshot(&[]).unwrap(), "[]");
    }
}
