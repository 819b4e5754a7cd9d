//! Person Repository
//!
//! Persons (masters or supervisors, depending on the deployment) are keyed
//! by the business `id` inside the document, not by the store key.

use std::str::FromStr;

use serde_json::Value;
use shared::models::{
    BUSINESS_ID_FIELD, DEFAULT_PERSON_REQUIRED_FIELDS, Document, first_missing_field,
    person_query_param, person_ref_field,
};

use super::{RepoError, RepoResult, missing_field};
use crate::db::collection::is_identifier;
use crate::db::{CLASS_TABLE, Collection, DbService, SETTINGS_TABLE, STAR_TABLE, Selector};

/// Collections owned by other repositories
const RESERVED_RESOURCES: [&str; 3] = [STAR_TABLE, CLASS_TABLE, SETTINGS_TABLE];

/// Which payload fields a person create persists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldRetention {
    /// 保存整个请求体
    #[default]
    All,
    /// 只保存必填字段
    Whitelist,
}

impl FromStr for FieldRetention {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "whitelist" => Ok(Self::Whitelist),
            other => Err(format!(
                "Unknown person field retention '{other}' (expected 'all' or 'whitelist')"
            )),
        }
    }
}

/// Person resource configuration
///
/// The resource name drives the route segment, the collection name, the
/// star reference field (`<resource>Id`) and the dashboard keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonPolicy {
    resource: String,
    required_fields: Vec<String>,
    retention: FieldRetention,
}

impl PersonPolicy {
    pub fn new(resource: impl Into<String>) -> Result<Self, String> {
        let resource = resource.into();
        if !is_identifier(&resource) {
            return Err(format!(
                "Person resource name '{resource}' must match [A-Za-z][A-Za-z0-9_]*"
            ));
        }
        if RESERVED_RESOURCES.contains(&resource.as_str()) {
            return Err(format!(
                "Person resource name '{resource}' is already used by another collection"
            ));
        }
        Ok(Self {
            resource,
            required_fields: DEFAULT_PERSON_REQUIRED_FIELDS
                .iter()
                .map(|f| f.to_string())
                .collect(),
            retention: FieldRetention::default(),
        })
    }

    /// Replace the required fields. The business id is always required.
    pub fn with_required_fields(mut self, fields: impl IntoIterator<Item = String>) -> Self {
        let mut fields: Vec<String> = fields.into_iter().collect();
        if !fields.iter().any(|f| f == BUSINESS_ID_FIELD) {
            fields.insert(0, BUSINESS_ID_FIELD.to_string());
        }
        self.required_fields = fields;
        self
    }

    pub fn with_retention(mut self, retention: FieldRetention) -> Self {
        self.retention = retention;
        self
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn required_fields(&self) -> &[String] {
        &self.required_fields
    }

    pub fn retention(&self) -> FieldRetention {
        self.retention
    }

    /// Reference field on star records, e.g. `masterId`
    pub fn ref_field(&self) -> String {
        person_ref_field(&self.resource)
    }

    /// Dashboard query parameter, e.g. `master_id`
    pub fn query_param(&self) -> String {
        person_query_param(&self.resource)
    }

    /// Check required fields, then apply the retention policy
    fn prepare(&self, mut payload: Document) -> RepoResult<Document> {
        let required: Vec<&str> = self.required_fields.iter().map(String::as_str).collect();
        if let Some(field) = first_missing_field(&payload, &required) {
            return Err(missing_field(field));
        }

        match self.retention {
            FieldRetention::All => Ok(payload),
            FieldRetention::Whitelist => Ok(self
                .required_fields
                .iter()
                .filter_map(|f| payload.remove_entry(f))
                .collect()),
        }
    }
}

impl Default for PersonPolicy {
    fn default() -> Self {
        Self {
            resource: "master".to_string(),
            required_fields: DEFAULT_PERSON_REQUIRED_FIELDS
                .iter()
                .map(|f| f.to_string())
                .collect(),
            retention: FieldRetention::All,
        }
    }
}

/// Business id as a string; other JSON types are rejected
fn business_id(value: &Value) -> RepoResult<&str> {
    value.as_str().ok_or_else(|| {
        RepoError::Validation(format!("Field {BUSINESS_ID_FIELD} must be a string"))
    })
}

#[derive(Clone, Debug)]
pub struct PersonRepository {
    people: Collection,
    policy: PersonPolicy,
}

impl PersonRepository {
    pub fn new(db: &DbService, policy: PersonPolicy) -> Self {
        Self {
            people: db.collection(policy.resource()),
            policy,
        }
    }

    pub fn policy(&self) -> &PersonPolicy {
        &self.policy
    }

    fn not_found(&self) -> RepoError {
        RepoError::NotFound(format!("{} not found", self.policy.resource))
    }

    fn by_business_id(id: &str) -> Selector {
        Selector::field_eq(BUSINESS_ID_FIELD, id)
    }

    fn duplicate(&self, id: &str) -> RepoError {
        RepoError::Duplicate(format!("{} '{}' already exists", self.policy.resource, id))
    }

    /// A failed write whose business id is now taken lost a race to a
    /// concurrent writer; the unique index rejected it.
    async fn resolve_write_error(&self, err: RepoError, id: &str) -> RepoError {
        match err {
            RepoError::Database(_) if matches!(self.find_by_business_id(id).await, Ok(Some(_))) => {
                self.duplicate(id)
            }
            other => other,
        }
    }

    /// Insert a prepared body, reporting an index conflict as a duplicate
    async fn insert(&self, body: Document, id: &str) -> RepoResult<String> {
        match self.people.insert_one(body).await {
            Ok(key) => Ok(key),
            Err(err) => Err(self.resolve_write_error(err, id).await),
        }
    }

    /// Find all persons
    pub async fn find_all(&self) -> RepoResult<Vec<Document>> {
        self.people.find(Selector::All).await
    }

    /// Find person by business id
    pub async fn find_by_business_id(&self, id: &str) -> RepoResult<Option<Document>> {
        self.people.find_one(Self::by_business_id(id)).await
    }

    /// Get person by business id, NotFound if absent
    pub async fn get(&self, id: &str) -> RepoResult<Document> {
        self.find_by_business_id(id)
            .await?
            .ok_or_else(|| self.not_found())
    }

    /// Create a person, returning the store key
    pub async fn create(&self, payload: Document) -> RepoResult<String> {
        let body = self.policy.prepare(payload)?;
        let id = match body.get(BUSINESS_ID_FIELD) {
            Some(value) => business_id(value)?,
            None => return Err(missing_field(BUSINESS_ID_FIELD)),
        };

        if self.find_by_business_id(id).await?.is_some() {
            return Err(self.duplicate(id));
        }

        let id = id.to_string();
        let key = self.insert(body, &id).await?;
        tracing::info!(resource = %self.policy.resource, key = %key, "Person created");
        Ok(key)
    }

    /// Merge fields into the person with this business id
    pub async fn update(&self, id: &str, patch: Document) -> RepoResult<()> {
        let renamed_to = match patch.get(BUSINESS_ID_FIELD) {
            Some(value) => {
                let new_id = business_id(value)?;
                if new_id != id && self.find_by_business_id(new_id).await?.is_some() {
                    return Err(self.duplicate(new_id));
                }
                Some(new_id.to_string())
            }
            None => None,
        };

        let matched = match self.people.merge(Self::by_business_id(id), patch).await {
            Ok(matched) => matched,
            Err(err) => {
                return Err(match renamed_to.as_deref() {
                    Some(new_id) if new_id != id => self.resolve_write_error(err, new_id).await,
                    _ => err,
                });
            }
        };

        match matched {
            0 => Err(self.not_found()),
            _ => Ok(()),
        }
    }

    /// Hard delete by business id
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        match self.people.delete(Self::by_business_id(id)).await? {
            0 => Err(self.not_found()),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use serde_json::json;

    fn doc(v: Value) -> Document {
        v.as_object().cloned().unwrap()
    }

    async fn repo(policy: PersonPolicy) -> PersonRepository {
        let config = Config::in_memory().with_person(policy.clone());
        let db = DbService::connect(&config).await.unwrap();
        PersonRepository::new(&db, policy)
    }

    #[test]
    fn retention_parses() {
        assert_eq!("ALL".parse::<FieldRetention>().unwrap(), FieldRetention::All);
        assert_eq!(
            " whitelist ".parse::<FieldRetention>().unwrap(),
            FieldRetention::Whitelist
        );
        assert!("partial".parse::<FieldRetention>().is_err());
    }

    #[test]
    fn business_id_is_always_required() {
        let policy = PersonPolicy::default()
            .with_required_fields(["name".to_string(), "account".to_string()]);
        assert_eq!(policy.required_fields(), ["id", "name", "account"]);
    }

    #[test]
    fn whitelist_drops_extra_fields() {
        let policy = PersonPolicy::default().with_retention(FieldRetention::Whitelist);
        let body = policy
            .prepare(doc(json!({"id": "1", "name": "n", "branchCode": "02", "note": "x"})))
            .unwrap();
        assert_eq!(body.len(), 3);
        assert!(!body.contains_key("note"));
    }

    #[tokio::test]
    async fn create_get_update_delete() {
        let repo = repo(PersonPolicy::default()).await;
        repo.create(doc(json!({"id": "01234", "name": "張三", "branchCode": "02", "account": "a1"})))
            .await
            .unwrap();

        let person = repo.get("01234").await.unwrap();
        assert_eq!(person["name"], json!("張三"));
        assert_eq!(person["account"], json!("a1"));
        assert!(person["_id"].is_string());

        repo.update("01234", doc(json!({"branchCode": "03"}))).await.unwrap();
        assert_eq!(repo.get("01234").await.unwrap()["branchCode"], json!("03"));

        repo.delete("01234").await.unwrap();
        assert!(matches!(repo.get("01234").await, Err(RepoError::NotFound(_))));
        assert!(matches!(repo.delete("01234").await, Err(RepoError::NotFound(_))));
    }

    #[tokio::test]
    async fn missing_required_field_persists_nothing() {
        let repo = repo(PersonPolicy::default()).await;
        let err = repo
            .create(doc(json!({"id": "1", "name": "n"})))
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Validation(ref m) if m == "Missing field: branchCode"));
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn business_id_is_unique() {
        let repo = repo(PersonPolicy::default()).await;
        let p = json!({"id": "1", "name": "n", "branchCode": "02"});
        repo.create(doc(p.clone())).await.unwrap();
        assert!(matches!(repo.create(doc(p)).await, Err(RepoError::Duplicate(_))));

        repo.create(doc(json!({"id": "2", "name": "m", "branchCode": "02"})))
            .await
            .unwrap();
        assert!(matches!(
            repo.update("2", doc(json!({"id": "1"}))).await,
            Err(RepoError::Duplicate(_))
        ));
    }

    #[test]
    fn resource_cannot_reuse_another_collection() {
        for name in ["star", "class", "init_info"] {
            assert!(PersonPolicy::new(name).is_err(), "{name} should be rejected");
        }
        assert!(PersonPolicy::new("supervisor").is_ok());
    }

    #[tokio::test]
    async fn index_conflict_is_reported_as_duplicate() {
        let repo = repo(PersonPolicy::default()).await;
        let body = doc(json!({"id": "x", "name": "n", "branchCode": "01"}));
        repo.insert(body.clone(), "x").await.unwrap();

        // Skips the pre-insert lookup, as a concurrent writer would
        let err = repo.insert(body, "x").await.unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)), "got {err:?}");
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn concurrent_creates_yield_one_record_and_one_conflict() {
        let repo = repo(PersonPolicy::default()).await;
        let body = doc(json!({"id": "x", "name": "n", "branchCode": "01"}));

        let (a, b) = tokio::join!(repo.create(body.clone()), repo.create(body));
        let conflicts = [&a, &b]
            .iter()
            .filter(|r| matches!(r, Err(RepoError::Duplicate(_))))
            .count();
        assert_eq!(conflicts, 1, "got {a:?} and {b:?}");
        assert!(a.is_ok() || b.is_ok());
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn null_fields_are_kept() {
        let repo = repo(PersonPolicy::default()).await;
        repo.create(doc(json!({"id": "1", "name": "n", "branchCode": null, "note": null})))
            .await
            .unwrap();
        let person = repo.get("1").await.unwrap();
        assert_eq!(person.get("branchCode"), Some(&Value::Null));
        assert_eq!(person.get("note"), Some(&Value::Null));

        repo.update("1", doc(json!({"name": null}))).await.unwrap();
        assert_eq!(repo.get("1").await.unwrap().get("name"), Some(&Value::Null));
    }

    #[tokio::test]
    async fn update_unknown_person_is_not_found() {
        let repo = repo(PersonPolicy::default()).await;
        assert!(matches!(
            repo.update("nobody", doc(json!({"name": "x"}))).await,
            Err(RepoError::NotFound(ref m)) if m == "master not found"
        ));
    }
}
