//! 服务模块
//!
//! - [`DashboardService`] - 个人总览聚合

pub mod dashboard;

pub use dashboard::DashboardService;
