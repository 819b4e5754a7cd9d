//! Star Repository

use shared::models::{Document, NewStar};

use super::{RepoError, RepoResult, missing_field, record_key};
use crate::db::{Collection, DbService, STAR_TABLE, Selector};

#[derive(Clone, Debug)]
pub struct StarRepository {
    stars: Collection,
    /// Person reference field, e.g. `masterId`
    person_ref: String,
}

impl StarRepository {
    pub fn new(db: &DbService, person_ref: impl Into<String>) -> Self {
        Self {
            stars: db.collection(STAR_TABLE),
            person_ref: person_ref.into(),
        }
    }

    fn not_found() -> RepoError {
        RepoError::NotFound("Star record not found".to_string())
    }

    /// Create stars in one batch, returning keys in input order.
    ///
    /// Every record is validated before anything is written.
    pub async fn create(&self, records: Vec<Document>) -> RepoResult<Vec<String>> {
        if records.is_empty() {
            return Err(RepoError::Validation("No data provided".to_string()));
        }

        let stars = records
            .into_iter()
            .map(|record| {
                NewStar::from_document(record, &self.person_ref)
                    .map(|star| star.into_document(&self.person_ref))
                    .map_err(|field| missing_field(&field))
            })
            .collect::<RepoResult<Vec<_>>>()?;

        let keys = self.stars.insert_many(stars).await?;
        tracing::info!(count = keys.len(), "Star records created");
        Ok(keys)
    }

    /// Every star across all persons
    pub async fn find_all(&self) -> RepoResult<Vec<Document>> {
        self.stars.find(Selector::All).await
    }

    /// Every star of a person, valid or not
    pub async fn find_by_person(&self, person_id: &str) -> RepoResult<Vec<Document>> {
        self.stars
            .find(Selector::field_eq(&self.person_ref, person_id))
            .await
    }

    /// Stars of a person that have not been invalidated
    pub async fn find_valid_by_person(&self, person_id: &str) -> RepoResult<Vec<Document>> {
        self.stars
            .find(Selector::valid_field_eq(&self.person_ref, person_id))
            .await
    }

    /// Merge fields into a star; `{"valid": false}` soft-deletes it
    pub async fn update(&self, id: &str, patch: Document) -> RepoResult<()> {
        let key = record_key(id)?;
        match self.stars.merge(Selector::Key(key), patch).await? {
            0 => Err(Self::not_found()),
            _ => Ok(()),
        }
    }

    /// Hard delete
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let key = record_key(id)?;
        match self.stars.delete(Selector::Key(key)).await? {
            0 => Err(Self::not_found()),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use serde_json::{Value, json};

    fn doc(v: Value) -> Document {
        v.as_object().cloned().unwrap()
    }

    async fn repo() -> StarRepository {
        let db = DbService::connect(&Config::in_memory()).await.unwrap();
        StarRepository::new(&db, "masterId")
    }

    fn star(master: &str, score: i64) -> Document {
        doc(json!({"masterId": master, "score": score, "type": "1", "date": "2025-05-01"}))
    }

    #[tokio::test]
    async fn batch_is_all_or_nothing() {
        let repo = repo().await;
        let bad = doc(json!({"masterId": "m", "type": "1", "date": "2025-05-01"}));
        let err = repo
            .create(vec![star("m", 1), bad, star("m", 2)])
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Validation(ref m) if m == "Missing field: score"));
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn ids_follow_input_order() {
        let repo = repo().await;
        let ids = repo
            .create(vec![star("m", 1), star("m", 2), star("n", 3)])
            .await
            .unwrap();
        let stored = repo.find_all().await.unwrap();
        let stored_ids: Vec<&str> = stored.iter().map(|d| d["_id"].as_str().unwrap()).collect();
        assert_eq!(stored_ids, ids.iter().map(String::as_str).collect::<Vec<_>>());
        assert_eq!(stored[1]["score"], json!(2));
        assert_eq!(repo.find_by_person("m").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn invalidated_stars_leave_the_valid_view() {
        let repo = repo().await;
        let ids = repo.create(vec![star("m", 1), star("m", 2)]).await.unwrap();
        repo.update(&ids[0], doc(json!({"valid": false}))).await.unwrap();

        assert_eq!(repo.find_by_person("m").await.unwrap().len(), 2);
        let valid = repo.find_valid_by_person("m").await.unwrap();
        assert_eq!(valid.len(), 1);
        assert_eq!(valid[0]["_id"], json!(ids[1]));
    }

    #[tokio::test]
    async fn id_format_is_checked_before_lookup() {
        let repo = repo().await;
        let patch = doc(json!({"remarks": "x"}));
        assert!(matches!(
            repo.update("nope", patch.clone()).await,
            Err(RepoError::Validation(_))
        ));
        assert!(matches!(repo.delete("nope").await, Err(RepoError::Validation(_))));

        let absent = shared::util::new_record_id();
        assert!(matches!(repo.update(&absent, patch).await, Err(RepoError::NotFound(_))));
        assert!(matches!(repo.delete(&absent).await, Err(RepoError::NotFound(_))));
    }
}
