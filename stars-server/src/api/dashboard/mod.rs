//! Dashboard API 模块
//!
//! `GET /user-data?master_id=...` (the parameter follows the person
//! resource name; `person_id` is accepted everywhere).

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/user-data", get(handler::user_data))
}
