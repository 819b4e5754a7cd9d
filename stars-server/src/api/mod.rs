//! API 路由模块
//!
//! # 结构
//!
//! - [`people`] - 人员管理接口 (`/master` 或 `/supervisor`)
//! - [`stars`] - 星星记录接口
//! - [`classes`] - 课程管理接口
//! - [`settings`] - 系统设置接口
//! - [`dashboard`] - 个人总览接口
//! - [`health`] - 健康检查

pub mod classes;
pub mod dashboard;
pub mod health;
pub mod people;
pub mod settings;
pub mod stars;

use axum::Router;

use crate::core::ServerState;
use crate::db::repository::PersonPolicy;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router(person: &PersonPolicy) -> Router<ServerState> {
    Router::new()
        .merge(people::router(person.resource()))
        .merge(stars::router())
        .merge(classes::router())
        .merge(settings::router())
        .merge(dashboard::router())
        .merge(health::router())
}
