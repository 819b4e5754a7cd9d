//! Settings Repository (Singleton)

use serde_json::Value;
use shared::models::{Document, InitInfo, InitInfoRecord, SETTINGS_ID, STORE_ID_FIELD};

use super::{RepoError, RepoResult};
use crate::db::{Collection, DbService, SETTINGS_TABLE};

#[derive(Clone, Debug)]
pub struct SettingsRepository {
    settings: Collection,
}

impl SettingsRepository {
    pub fn new(db: &DbService) -> Self {
        Self {
            settings: db.collection(SETTINGS_TABLE),
        }
    }

    /// Get the singleton, if it was ever written
    pub async fn get(&self) -> RepoResult<Option<InitInfoRecord>> {
        let Some(mut doc) = self.settings.get(SETTINGS_ID).await? else {
            return Ok(None);
        };
        doc.remove(STORE_ID_FIELD);
        let info: InitInfo = serde_json::from_value(Value::Object(doc))
            .map_err(|e| RepoError::Database(format!("Malformed settings record: {e}")))?;
        Ok(Some(InitInfoRecord {
            id: SETTINGS_ID.to_string(),
            info,
        }))
    }

    /// Create or overwrite the singleton's fields
    pub async fn update(&self, info: InitInfo) -> RepoResult<()> {
        let patch: Document = match serde_json::to_value(info) {
            Ok(Value::Object(map)) => map,
            Ok(_) => return Err(RepoError::Database("Settings must serialize to an object".into())),
            Err(e) => return Err(RepoError::Database(e.to_string())),
        };
        self.settings.upsert(SETTINGS_ID, patch).await?;
        tracing::info!("Settings updated");
        Ok(())
    }
}
