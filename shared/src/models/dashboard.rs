//! Dashboard Model
//!
//! Composite view for one person: the person record, their valid stars,
//! the whole class catalog and the settings record.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::document::Document;
use super::settings::InitInfoRecord;

/// Dashboard ("user data") response
///
/// Serialized as `{ "<resource>": ..., "stars": [...], "classes": [...], "initInfo": ... }`;
/// every key is present even when the value is `null` or empty.
#[derive(Debug, Clone)]
pub struct UserData {
    /// Person resource name used as the person key (`master`, `supervisor`)
    pub resource: String,
    pub person: Option<Document>,
    pub stars: Vec<Document>,
    pub classes: Vec<Document>,
    pub init_info: Option<InitInfoRecord>,
}

impl Serialize for UserData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry(&self.resource, &self.person)?;
        map.serialize_entry("stars", &self.stars)?;
        map.serialize_entry("classes", &self.classes)?;
        map.serialize_entry("initInfo", &self.init_info)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_dashboard_keeps_all_keys() {
        let data = UserData {
            resource: "supervisor".into(),
            person: None,
            stars: vec![],
            classes: vec![],
            init_info: None,
        };
        assert_eq!(
            serde_json::to_value(&data).unwrap(),
            json!({"supervisor": null, "stars": [], "classes": [], "initInfo": null})
        );
    }
}
