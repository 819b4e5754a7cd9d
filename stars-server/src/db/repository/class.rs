//! Class Repository

use shared::models::{CLASS_REQUIRED_FIELDS, Document, first_missing_field};

use super::{RepoError, RepoResult, missing_field, record_key};
use crate::db::{CLASS_TABLE, Collection, DbService, Selector};

#[derive(Clone, Debug)]
pub struct ClassRepository {
    classes: Collection,
}

impl ClassRepository {
    pub fn new(db: &DbService) -> Self {
        Self {
            classes: db.collection(CLASS_TABLE),
        }
    }

    /// The whole class catalog
    pub async fn find_all(&self) -> RepoResult<Vec<Document>> {
        self.classes.find(Selector::All).await
    }

    /// Create a class; the record is stored as given
    pub async fn create(&self, record: Document) -> RepoResult<String> {
        if let Some(field) = first_missing_field(&record, &CLASS_REQUIRED_FIELDS) {
            return Err(missing_field(field));
        }
        self.classes.insert_one(record).await
    }

    /// Hard delete
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let key = record_key(id)?;
        match self.classes.delete(Selector::Key(key)).await? {
            0 => Err(RepoError::NotFound("class record not found".to_string())),
            _ => Ok(()),
        }
    }
}
