//! Star Model
//!
//! A star is one merit/demerit score awarded to a person. The person
//! reference field is named after the person resource (`masterId`, ...).

use serde::Deserialize;
use serde_json::Value;

use super::document::{Document, first_missing_field};

pub const STAR_SCORE: &str = "score";
pub const STAR_TYPE: &str = "type";
pub const STAR_DATE: &str = "date";
pub const STAR_REMARKS: &str = "remarks";
/// Soft-delete flag; only an explicit `false` invalidates a star
pub const STAR_VALID: &str = "valid";

/// Create star payload: one record or a batch
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StarPayload {
    Batch(Vec<Document>),
    Single(Document),
}

impl StarPayload {
    /// Normalize to a list of records, preserving order
    pub fn into_records(self) -> Vec<Document> {
        match self {
            Self::Batch(records) => records,
            Self::Single(record) => vec![record],
        }
    }
}

/// Normalized star ready for insertion
#[derive(Debug, Clone, PartialEq)]
pub struct NewStar {
    pub person_id: Value,
    pub score: Value,
    pub kind: Value,
    pub date: Value,
    pub remarks: Value,
}

impl NewStar {
    /// Build from a create payload record.
    ///
    /// Returns the name of the first missing required field on failure.
    /// Fields other than the star fields are dropped and `valid` is
    /// never taken from the caller.
    pub fn from_document(mut doc: Document, person_ref: &str) -> Result<Self, String> {
        let required = [person_ref, STAR_SCORE, STAR_TYPE, STAR_DATE];
        if let Some(field) = first_missing_field(&doc, &required) {
            return Err(field.to_string());
        }

        Ok(Self {
            person_id: doc.remove(person_ref).unwrap_or(Value::Null),
            score: doc.remove(STAR_SCORE).unwrap_or(Value::Null),
            kind: doc.remove(STAR_TYPE).unwrap_or(Value::Null),
            date: doc.remove(STAR_DATE).unwrap_or(Value::Null),
            remarks: doc
                .remove(STAR_REMARKS)
                .unwrap_or_else(|| Value::String(String::new())),
        })
    }

    /// Stored document form; always valid at creation
    pub fn into_document(self, person_ref: &str) -> Document {
        let mut doc = Document::new();
        doc.insert(person_ref.to_string(), self.person_id);
        doc.insert(STAR_SCORE.to_string(), self.score);
        doc.insert(STAR_TYPE.to_string(), self.kind);
        doc.insert(STAR_DATE.to_string(), self.date);
        doc.insert(STAR_REMARKS.to_string(), self.remarks);
        doc.insert(STAR_VALID.to_string(), Value::Bool(true));
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(v: Value) -> Document {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn single_and_batch_normalize_alike() {
        let record = json!({"masterId": "01", "score": 1, "type": "1", "date": "2025-01-01"});
        let single: StarPayload = serde_json::from_value(record.clone()).unwrap();
        let batch: StarPayload = serde_json::from_value(json!([record])).unwrap();
        assert_eq!(single.into_records(), batch.into_records());
    }

    #[test]
    fn non_object_elements_do_not_parse() {
        assert!(serde_json::from_value::<StarPayload>(json!([1, 2])).is_err());
        assert!(serde_json::from_value::<StarPayload>(json!("x")).is_err());
    }

    #[test]
    fn defaults_remarks_and_forces_valid() {
        let d = doc(json!({
            "masterId": "01", "score": -1, "type": "2", "date": "2025-01-01",
            "valid": false, "extra": "dropped"
        }));
        let stored = NewStar::from_document(d, "masterId").unwrap().into_document("masterId");
        assert_eq!(stored["remarks"], json!(""));
        assert_eq!(stored["valid"], json!(true));
        assert_eq!(stored["score"], json!(-1));
        assert!(!stored.contains_key("extra"));
    }

    #[test]
    fn missing_field_is_named() {
        let d = doc(json!({"masterId": "01", "type": "2", "date": "2025-01-01"}));
        assert_eq!(NewStar::from_document(d, "masterId").unwrap_err(), "score");
    }
}
