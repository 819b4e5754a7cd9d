use crate::core::{Config, Result};
use crate::db::DbService;
use crate::db::repository::{
    ClassRepository, PersonRepository, SettingsRepository, StarRepository,
};

/// 服务器状态 - 持有配置与数据库句柄
///
/// Cloned into every handler; the SurrealDB handle is shared, so clones
/// are cheap. Repositories are built per request from it.
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | DbService | 文档数据库 |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub db: DbService,
}

impl ServerState {
    pub fn new(config: Config, db: DbService) -> Self {
        Self { config, db }
    }

    /// 初始化服务器状态 (连接数据库、建立索引)
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::connect(config).await?;
        Ok(Self::new(config.clone(), db))
    }

    pub fn people(&self) -> PersonRepository {
        PersonRepository::new(&self.db, self.config.person.clone())
    }

    pub fn stars(&self) -> StarRepository {
        StarRepository::new(&self.db, self.config.person.ref_field())
    }

    pub fn classes(&self) -> ClassRepository {
        ClassRepository::new(&self.db)
    }

    pub fn settings(&self) -> SettingsRepository {
        SettingsRepository::new(&self.db)
    }
}
