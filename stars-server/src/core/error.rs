use thiserror::Error;

/// Startup and lifecycle errors
///
/// Request-level failures use [`crate::utils::AppError`] instead.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("数据库错误: {0}")]
    Database(String),

    #[error("内部服务器错误: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<crate::db::repository::RepoError> for ServerError {
    fn from(err: crate::db::repository::RepoError) -> Self {
        ServerError::Database(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ServerError>;
