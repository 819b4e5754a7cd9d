//! Stars Server - 星星积分记录后端
//!
//! # 架构概述
//!
//! - **数据库** (`db`): SurrealDB 文档存储, 每个集合一个 repository
//! - **HTTP API** (`api`): 人员、星星、课程、系统设置与个人总览接口
//! - **服务** (`services`): 个人总览聚合
//!
//! # 模块结构
//!
//! ```text
//! stars-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── db/            # 数据库连接、集合、repository
//! ├── api/           # HTTP 路由和处理器
//! ├── services/      # 聚合服务
//! ├── middleware/    # 请求日志、请求 ID
//! └── utils/         # 错误、日志、校验
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerError, ServerState, build_app};
pub use db::DbService;
pub use db::repository::{FieldRetention, PersonPolicy};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// Load `.env` into the process environment, if present
pub fn setup_environment() {
    match dotenv::dotenv() {
        Ok(_) => {}
        Err(e) if e.not_found() => {}
        Err(e) => eprintln!("Failed to load .env: {e}"),
    }
}

pub fn print_banner() {
    println!(
        r#"
   _____ __
  / ___// /_____ ___________
  \__ \/ __/ __ `/ ___/ ___/
 ___/ / /_/ /_/ / /  (__  )
/____/\__/\__,_/_/  /____/
    "#
    );
}
