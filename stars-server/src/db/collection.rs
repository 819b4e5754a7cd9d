//! Document collection over a SurrealDB table
//!
//! Every record is stored as `{ body: <document> }` under a server-generated
//! key. Keeping caller fields inside `body` leaves SurrealDB's reserved `id`
//! free, so persons can carry their own business `id`.
//!
//! Listing is ordered by key; keys are time-ordered, so this is insertion
//! order.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use shared::models::{Document, STAR_VALID, with_store_id};
use shared::util::new_record_id;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

use super::repository::{RepoError, RepoResult};

/// Which records an operation applies to
#[derive(Debug, Clone)]
pub enum Selector {
    /// Every record in the collection
    All,
    /// The record stored under this key
    Key(String),
    /// Records whose body field equals the value
    FieldEq { field: String, value: Value },
    /// Like `FieldEq`, skipping records whose `valid` flag is explicitly false
    ValidFieldEq { field: String, value: Value },
}

impl Selector {
    pub fn field_eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::FieldEq {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn valid_field_eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::ValidFieldEq {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Target expression and WHERE clause for this selector
    fn render(&self) -> RepoResult<(&'static str, String)> {
        Ok(match self {
            Self::All => ("type::table($tb)", String::new()),
            Self::Key(_) => ("type::thing($tb, $key)", String::new()),
            Self::FieldEq { field, .. } => (
                "type::table($tb)",
                format!("WHERE body.{} = $value", checked_field(field)?),
            ),
            Self::ValidFieldEq { field, .. } => (
                "type::table($tb)",
                format!(
                    "WHERE body.{} = $value AND (body.{valid} IS NONE OR body.{valid} != false)",
                    checked_field(field)?,
                    valid = STAR_VALID,
                ),
            ),
        })
    }
}

/// Field names are interpolated into queries; only identifiers pass.
fn checked_field(field: &str) -> RepoResult<&str> {
    if is_identifier(field) {
        Ok(field)
    } else {
        Err(RepoError::Validation(format!("Invalid field name: {field}")))
    }
}

/// Convert JSON into a store value.
///
/// Goes through the SurrealQL JSON parser so `null` is kept as `NULL`;
/// the serde path would turn it into `NONE` and drop the field.
fn to_store_value<T: Serialize>(value: &T) -> RepoResult<surrealdb::sql::Value> {
    let text = serde_json::to_string(value).map_err(|e| RepoError::Database(e.to_string()))?;
    surrealdb::sql::json(&text).map_err(|e| RepoError::Database(e.to_string()))
}

/// `[A-Za-z][A-Za-z0-9_]*`
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[derive(Debug, Deserialize)]
struct StoredRow {
    #[serde(rename = "_id")]
    id: String,
    #[serde(default)]
    body: Document,
}

impl StoredRow {
    fn into_document(self) -> Document {
        with_store_id(self.body, self.id)
    }
}

/// A named collection of JSON documents
#[derive(Clone, Debug)]
pub struct Collection {
    db: Surreal<Any>,
    table: String,
}

impl Collection {
    pub fn new(db: Surreal<Any>, table: impl Into<String>) -> Self {
        Self {
            db,
            table: table.into(),
        }
    }

    /// Insert one document, returning its new key
    pub async fn insert_one(&self, body: Document) -> RepoResult<String> {
        let key = new_record_id();
        self.db
            .query("CREATE type::thing($tb, $key) CONTENT { body: $body } RETURN NONE")
            .bind(("tb", self.table.clone()))
            .bind(("key", key.clone()))
            .bind(("body", to_store_value(&body)?))
            .await?
            .check()?;
        tracing::debug!(table = %self.table, key = %key, "Document inserted");
        Ok(key)
    }

    /// Insert documents in one transaction, returning keys in input order
    pub async fn insert_many(&self, bodies: Vec<Document>) -> RepoResult<Vec<String>> {
        let keys: Vec<String> = bodies.iter().map(|_| new_record_id()).collect();
        let rows: Vec<Value> = keys
            .iter()
            .zip(bodies)
            .map(|(key, body)| json!({ "key": key, "body": body }))
            .collect();

        self.db
            .query("BEGIN TRANSACTION")
            .query("FOR $row IN $rows { CREATE type::thing($tb, $row.key) CONTENT { body: $row.body } RETURN NONE; }")
            .query("COMMIT TRANSACTION")
            .bind(("tb", self.table.clone()))
            .bind(("rows", to_store_value(&rows)?))
            .await?
            .check()?;
        tracing::debug!(table = %self.table, count = keys.len(), "Documents inserted");
        Ok(keys)
    }

    /// Matching documents in insertion order, each with `_id`
    pub async fn find(&self, selector: Selector) -> RepoResult<Vec<Document>> {
        let (target, filter) = selector.render()?;
        let sql = format!("SELECT record::id(id) AS _id, body FROM {target} {filter} ORDER BY _id");
        let rows: Vec<StoredRow> = self.bind(self.db.query(sql), selector).await?.take(0)?;
        Ok(rows.into_iter().map(StoredRow::into_document).collect())
    }

    /// First matching document
    pub async fn find_one(&self, selector: Selector) -> RepoResult<Option<Document>> {
        let (target, filter) = selector.render()?;
        let sql = format!("SELECT record::id(id) AS _id, body FROM {target} {filter} LIMIT 1");
        let rows: Vec<StoredRow> = self.bind(self.db.query(sql), selector).await?.take(0)?;
        Ok(rows.into_iter().next().map(StoredRow::into_document))
    }

    /// Document stored under `key`
    pub async fn get(&self, key: &str) -> RepoResult<Option<Document>> {
        self.find_one(Selector::Key(key.to_string())).await
    }

    /// Merge `patch` into matching documents; returns the number matched
    pub async fn merge(&self, selector: Selector, patch: Document) -> RepoResult<usize> {
        let (target, filter) = selector.render()?;
        let sql = format!(
            "LET $hits = UPDATE {target} MERGE {{ body: $patch }} {filter} RETURN BEFORE; RETURN array::len($hits);"
        );
        let query = self.db.query(sql).bind(("patch", to_store_value(&patch)?));
        let matched: Option<usize> = self.bind(query, selector).await?.take(1)?;
        Ok(matched.unwrap_or(0))
    }

    /// Delete matching documents; returns the number removed
    pub async fn delete(&self, selector: Selector) -> RepoResult<usize> {
        let (target, filter) = selector.render()?;
        let sql = format!(
            "LET $gone = DELETE {target} {filter} RETURN BEFORE; RETURN array::len($gone);"
        );
        let removed: Option<usize> = self.bind(self.db.query(sql), selector).await?.take(1)?;
        let removed = removed.unwrap_or(0);
        tracing::debug!(table = %self.table, removed, "Documents deleted");
        Ok(removed)
    }

    /// Create or merge the document stored under a fixed key
    pub async fn upsert(&self, key: &str, patch: Document) -> RepoResult<()> {
        self.db
            .query("UPSERT type::thing($tb, $key) MERGE { body: $patch } RETURN NONE")
            .bind(("tb", self.table.clone()))
            .bind(("key", key.to_string()))
            .bind(("patch", to_store_value(&patch)?))
            .await?
            .check()?;
        Ok(())
    }

    /// Number of documents in the collection
    #[cfg(test)]
    pub async fn count(&self) -> RepoResult<usize> {
        Ok(self.find(Selector::All).await?.len())
    }

    /// Bind the table name and the selector's parameters, then run
    async fn bind<'r>(
        &self,
        query: surrealdb::method::Query<'r, Any>,
        selector: Selector,
    ) -> surrealdb::Result<surrealdb::Response> {
        let query = query.bind(("tb", self.table.clone()));
        match selector {
            Selector::All => query.await,
            Selector::Key(key) => query.bind(("key", key)).await,
            Selector::FieldEq { value, .. } | Selector::ValidFieldEq { value, .. } => {
                query.bind(("value", value)).await
            }
        }
    }
}
