//! Settings Model (Singleton)

use serde::{Deserialize, Serialize};

/// Reserved key of the settings record
pub const SETTINGS_ID: &str = "system_setting";

/// Global settings ("init info")
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitInfo {
    #[serde(default)]
    pub survey_url: String,
    /// 问卷开放日期
    #[serde(default)]
    pub survey_start_day: String,
}

/// Update settings payload
///
/// Absent fields default to empty strings; unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitInfoUpdate {
    #[serde(default)]
    pub survey_url: String,
    #[serde(default)]
    pub survey_start_day: String,
}

impl From<InitInfoUpdate> for InitInfo {
    fn from(update: InitInfoUpdate) -> Self {
        Self {
            survey_url: update.survey_url,
            survey_start_day: update.survey_start_day,
        }
    }
}

/// Stored settings as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitInfoRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub info: InitInfo,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn update_defaults_and_ignores_extras() {
        let update: InitInfoUpdate =
            serde_json::from_value(json!({"surveyUrl": "https://x", "other": 1})).unwrap();
        let info = InitInfo::from(update);
        assert_eq!(info.survey_url, "https://x");
        assert_eq!(info.survey_start_day, "");
    }

    #[test]
    fn record_serializes_flat() {
        let record = InitInfoRecord {
            id: SETTINGS_ID.to_string(),
            info: InitInfo {
                survey_url: "u".into(),
                survey_start_day: "2025-03-01".into(),
            },
        };
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"_id": "system_setting", "surveyUrl": "u", "surveyStartDay": "2025-03-01"})
        );
    }
}
