//! Star API 模块
//!
//! `GET /stars/{id}` reads a person's stars by business id, while the
//! write routes on the same path address one star by its record id.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/stars", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::list_for_person)
                .put(handler::update)
                .patch(handler::update)
                .delete(handler::delete),
        )
}
