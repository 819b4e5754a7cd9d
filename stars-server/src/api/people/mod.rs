//! Person API 模块
//!
//! Mounted under the configured resource name, e.g. `/master`.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router(resource: &str) -> Router<ServerState> {
    Router::new().nest(&format!("/{resource}"), routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
