//! Settings API Module
//!
//! Singleton "init info" record: survey link and survey start day.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/init", get(handler::get).put(handler::update))
}
