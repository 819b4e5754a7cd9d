//! Document Model

use serde_json::{Map, Value};

/// A free-form JSON record as stored in a collection
pub type Document = Map<String, Value>;

/// Field carrying the store-assigned id in responses
pub const STORE_ID_FIELD: &str = "_id";

/// Return the first field of `required` missing from `doc`.
///
/// Only presence is checked; `null` or empty values count as present.
pub fn first_missing_field<'a>(doc: &Document, required: &[&'a str]) -> Option<&'a str> {
    required.iter().copied().find(|field| !doc.contains_key(*field))
}

/// Attach the store id to a stored document body.
pub fn with_store_id(mut body: Document, id: impl Into<String>) -> Document {
    body.insert(STORE_ID_FIELD.to_string(), Value::String(id.into()));
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(v: Value) -> Document {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn reports_first_missing_in_declared_order() {
        let d = doc(json!({"name": "x"}));
        assert_eq!(first_missing_field(&d, &["id", "name", "branchCode"]), Some("id"));

        let d = doc(json!({"id": "1", "name": "x"}));
        assert_eq!(first_missing_field(&d, &["id", "name", "branchCode"]), Some("branchCode"));
    }

    #[test]
    fn null_counts_as_present() {
        let d = doc(json!({"id": null}));
        assert_eq!(first_missing_field(&d, &["id"]), None);
    }

    #[test]
    fn store_id_is_stringified() {
        let d = with_store_id(doc(json!({"a": 1})), "abc");
        assert_eq!(d[STORE_ID_FIELD], json!("abc"));
        assert_eq!(d["a"], json!(1));
    }
}
