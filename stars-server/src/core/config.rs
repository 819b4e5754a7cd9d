use crate::core::{Result, ServerError};
use crate::db::repository::person::{FieldRetention, PersonPolicy};

/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | DATABASE_URL | rocksdb://data/stars.db | SurrealDB 连接字符串 |
/// | DATABASE_NS | stars | 命名空间 |
/// | DATABASE_NAME | DigitalMaster | 数据库名 |
/// | DATABASE_USER / DATABASE_PASSWORD | - | 远程实例 root 登录 |
/// | PORT | 8080 | HTTP 服务端口 |
/// | STATIC_DIR | dist | 前端打包目录 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | - | 日志文件目录 (按天滚动) |
/// | PERSON_RESOURCE | master | 人员资源名 (master / supervisor) |
/// | PERSON_REQUIRED_FIELDS | id,name,branchCode | 创建人员的必填字段 |
/// | PERSON_RETENTION | all | all: 保存整个请求体; whitelist: 只保存必填字段 |
///
/// # 示例
///
/// ```ignore
/// DATABASE_URL=mem:// PORT=9000 PERSON_RESOURCE=supervisor cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// SurrealDB 连接字符串 (mem://, rocksdb://path, ws://host:port)
    pub database_url: String,
    pub database_ns: String,
    pub database_name: String,
    pub database_user: Option<String>,
    pub database_password: Option<String>,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 单页应用静态文件目录
    pub static_dir: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// 人员资源配置
    pub person: PersonPolicy,
}

impl Config {
    /// 从环境变量加载配置
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let http_port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ServerError::Config(format!("PORT is not a valid port: {raw}")))?,
            None => 8080,
        };

        let resource = var("PERSON_RESOURCE").unwrap_or_else(|| "master".into());
        let mut person = PersonPolicy::new(resource.trim()).map_err(ServerError::Config)?;

        if let Some(raw) = var("PERSON_REQUIRED_FIELDS") {
            let fields = raw
                .split(',')
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .map(String::from);
            person = person.with_required_fields(fields);
        }

        if let Some(raw) = var("PERSON_RETENTION") {
            let retention: FieldRetention = raw.parse().map_err(ServerError::Config)?;
            person = person.with_retention(retention);
        }

        Ok(Self {
            database_url: var("DATABASE_URL").unwrap_or_else(|| "rocksdb://data/stars.db".into()),
            database_ns: var("DATABASE_NS").unwrap_or_else(|| "stars".into()),
            database_name: var("DATABASE_NAME").unwrap_or_else(|| "DigitalMaster".into()),
            database_user: var("DATABASE_USER"),
            database_password: var("DATABASE_PASSWORD"),
            http_port,
            static_dir: var("STATIC_DIR").unwrap_or_else(|| "dist".into()),
            log_level: var("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: var("LOG_DIR"),
            person,
        })
    }

    /// 使用内存数据库的配置
    ///
    /// 常用于测试场景
    pub fn in_memory() -> Self {
        Self {
            database_url: "mem://".into(),
            ..Self::default()
        }
    }

    pub fn with_person(mut self, person: PersonPolicy) -> Self {
        self.person = person;
        self
    }

    pub fn with_static_dir(mut self, static_dir: impl Into<String>) -> Self {
        self.static_dir = static_dir.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "rocksdb://data/stars.db".into(),
            database_ns: "stars".into(),
            database_name: "DigitalMaster".into(),
            database_user: None,
            database_password: None,
            http_port: 8080,
            static_dir: "dist".into(),
            log_level: "info".into(),
            log_dir: None,
            person: PersonPolicy::default(),
        }
    }
}
