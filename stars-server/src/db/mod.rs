//! Database Module
//!
//! Owns the SurrealDB connection and hands out named collections.

pub mod collection;
pub mod repository;

pub use collection::{Collection, Selector};

use surrealdb::Surreal;
use surrealdb::engine::any::{self, Any};
use surrealdb::opt::auth::Root;

use crate::core::Config;
use crate::db::repository::RepoResult;
use crate::db::repository::person::PersonPolicy;

/// Collection holding star records
pub const STAR_TABLE: &str = "star";
/// Collection holding the class catalog
pub const CLASS_TABLE: &str = "class";
/// Collection holding the settings singleton
pub const SETTINGS_TABLE: &str = "init_info";

/// Database service, owns the SurrealDB handle
#[derive(Clone, Debug)]
pub struct DbService {
    pub db: Surreal<Any>,
}

impl DbService {
    /// Connect using the configured connection string and namespace
    pub async fn connect(config: &Config) -> RepoResult<Self> {
        let db = any::connect(config.database_url.as_str()).await?;

        if let (Some(username), Some(password)) =
            (&config.database_user, &config.database_password)
        {
            db.signin(Root {
                username: username.as_str(),
                password: password.as_str(),
            })
            .await?;
        }

        db.use_ns(config.database_ns.as_str())
            .use_db(config.database_name.as_str())
            .await?;

        tracing::info!(
            url = %config.database_url,
            ns = %config.database_ns,
            db = %config.database_name,
            "Database connection established"
        );

        let service = Self { db };
        service.define_indexes(&config.person).await?;
        Ok(service)
    }

    /// Unique business-id index on the person collection
    async fn define_indexes(&self, policy: &PersonPolicy) -> RepoResult<()> {
        let sql = format!(
            "DEFINE INDEX IF NOT EXISTS {table}_business_id ON TABLE {table} FIELDS body.{field} UNIQUE",
            table = policy.resource(),
            field = shared::models::BUSINESS_ID_FIELD,
        );
        self.db.query(sql).await?.check()?;
        tracing::info!(table = %policy.resource(), "Person business-id index ready");
        Ok(())
    }

    /// Open a named collection
    pub fn collection(&self, table: &str) -> Collection {
        Collection::new(self.db.clone(), table)
    }

    /// Cheap round trip used by the health check
    pub async fn ping(&self) -> RepoResult<()> {
        self.db.query("RETURN true").await?.check()?;
        Ok(())
    }
}
