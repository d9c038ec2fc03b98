//! Wire types for the document store's REST surface.
//!
//! Field values arrive as externally tagged type wrappers, e.g.
//! `{"stringValue": "Shoes"}` or `{"integerValue": "42"}` (integers are
//! string-encoded on the wire). Decoding into domain types lives next to
//! the types themselves; this module only models the envelope.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;

use super::gateway::SortDirection;

/// One typed field value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RemoteValue {
    StringValue(String),
    IntegerValue(String),
    DoubleValue(f64),
    BooleanValue(bool),
    TimestampValue(DateTime<Utc>),
    ArrayValue(ArrayPayload),
    MapValue(MapPayload),
    NullValue(serde_json::Value),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ArrayPayload {
    #[serde(default)]
    pub values: Vec<RemoteValue>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MapPayload {
    #[serde(default)]
    pub fields: HashMap<String, RemoteValue>,
}

impl RemoteValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            RemoteValue::StringValue(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric value; accepts both the double and the string-encoded
    /// integer representation.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RemoteValue::DoubleValue(v) => Some(*v),
            RemoteValue::IntegerValue(raw) => raw.parse().ok(),
            _ => None,
        }
    }

    pub fn as_u32(&self) -> Option<u32> {
        self.as_f64().filter(|v| *v >= 0.0).map(|v| v as u32)
    }

    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            RemoteValue::TimestampValue(ts) => Some(*ts),
            _ => None,
        }
    }

    /// String elements of an array value; non-string elements are skipped.
    pub fn as_str_array(&self) -> Option<Vec<String>> {
        match self {
            RemoteValue::ArrayValue(payload) => Some(
                payload
                    .values
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect(),
            ),
            _ => None,
        }
    }
}

/// One document from the remote store.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemoteDocument {
    /// Full resource name:
    /// `projects/{p}/databases/(default)/documents/{collection}/{id}`.
    pub name: String,

    #[serde(default)]
    pub fields: HashMap<String, RemoteValue>,
}

impl RemoteDocument {
    /// Document identifier: the last segment of the resource name.
    pub fn doc_id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    pub fn field(&self, key: &str) -> Option<&RemoteValue> {
        self.fields.get(key)
    }

    pub fn field_str(&self, key: &str) -> Option<&str> {
        self.field(key)?.as_str()
    }

    pub fn field_f64(&self, key: &str) -> Option<f64> {
        self.field(key)?.as_f64()
    }

    pub fn field_u32(&self, key: &str) -> Option<u32> {
        self.field(key)?.as_u32()
    }

    pub fn field_timestamp(&self, key: &str) -> Option<DateTime<Utc>> {
        self.field(key)?.as_timestamp()
    }

    pub fn field_str_array(&self, key: &str) -> Option<Vec<String>> {
        self.field(key)?.as_str_array()
    }
}

/// Envelope of the collection listing endpoint. An empty collection omits
/// the `documents` key entirely.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListDocumentsResponse {
    #[serde(default)]
    pub documents: Vec<RemoteDocument>,
}

/// One row of a `:runQuery` response. Rows carrying only a read timestamp
/// have no document and are skipped.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponseRow {
    pub document: Option<RemoteDocument>,
}

/// Request body for the `:runQuery` endpoint: one collection, ordered by
/// one field, capped at `limit` documents.
pub fn ordered_query_body(
    collection: &str,
    order_by: &str,
    direction: SortDirection,
    limit: u32,
) -> serde_json::Value {
    let direction = match direction {
        SortDirection::Ascending => "ASCENDING",
        SortDirection::Descending => "DESCENDING",
    };
    json!({
        "structuredQuery": {
            "from": [{ "collectionId": collection }],
            "orderBy": [{
                "field": { "fieldPath": order_by },
                "direction": direction,
            }],
            "limit": limit,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC_JSON: &str = r#"{
        "name": "projects/demo/databases/(default)/documents/products/p42",
        "fields": {
            "name": { "stringValue": "Sac en cuir" },
            "price": { "integerValue": "149" },
            "originalPrice": { "doubleValue": 199.5 },
            "category": { "stringValue": "Bags" },
            "date": { "timestampValue": "2024-03-15T14:02:26Z" },
            "rating": { "integerValue": "3" },
            "additionalImages": { "arrayValue": { "values": [
                { "stringValue": "https://img.test/a.jpg" },
                { "integerValue": "7" },
                { "stringValue": "https://img.test/b.jpg" }
            ] } },
            "comment": { "nullValue": "NULL_VALUE" }
        },
        "createTime": "2024-03-15T14:02:26.123Z",
        "updateTime": "2024-03-15T14:02:26.123Z"
    }"#;

    #[test]
    fn decodes_typed_fields() {
        let doc: RemoteDocument = serde_json::from_str(DOC_JSON).unwrap();
        assert_eq!(doc.doc_id(), "p42");
        assert_eq!(doc.field_str("name"), Some("Sac en cuir"));
        // Integers arrive string-encoded but still read as numbers.
        assert_eq!(doc.field_f64("price"), Some(149.0));
        assert_eq!(doc.field_f64("originalPrice"), Some(199.5));
        assert_eq!(doc.field_u32("rating"), Some(3));
        assert_eq!(
            doc.field_timestamp("date").map(|ts| ts.to_rfc3339()),
            Some("2024-03-15T14:02:26+00:00".to_string())
        );
        assert_eq!(
            doc.field_str_array("additionalImages"),
            Some(vec![
                "https://img.test/a.jpg".to_string(),
                "https://img.test/b.jpg".to_string(),
            ])
        );
        assert_eq!(doc.field_str("missing"), None);
    }

    #[test]
    fn empty_collection_listing_decodes() {
        let response: ListDocumentsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.documents.is_empty());
    }

    #[test]
    fn query_rows_without_documents_are_representable() {
        let rows: Vec<QueryResponseRow> =
            serde_json::from_str(r#"[{"readTime": "2024-03-15T14:02:26Z"}]"#).unwrap();
        assert!(rows[0].document.is_none());
    }

    #[test]
    fn ordered_query_body_shape() {
        let body = ordered_query_body("products", "date", SortDirection::Descending, 4);
        assert_eq!(
            body,
            serde_json::json!({
                "structuredQuery": {
                    "from": [{ "collectionId": "products" }],
                    "orderBy": [{
                        "field": { "fieldPath": "date" },
                        "direction": "DESCENDING",
                    }],
                    "limit": 4,
                }
            })
        );
    }
}
