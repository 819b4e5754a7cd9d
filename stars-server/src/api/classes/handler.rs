//! Class API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::Value;
use shared::models::Document;
use shared::{CreatedResponse, MessageResponse};

use crate::core::ServerState;
use crate::utils::validation::require_object;
use crate::utils::AppResult;

/// GET /class - 获取课程列表
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Document>>> {
    let classes = state.classes().find_all().await?;
    Ok(Json(classes))
}

/// POST /class - 新增课程 (仅接受单笔)
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let Json(payload) = payload?;
    let record = require_object(payload, "Expected a single class record")?;
    let inserted_id = state.classes().create(record).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new("Class record created", inserted_id)),
    ))
}

/// DELETE /class/{id} - 删除课程
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.classes().delete(&id).await?;
    Ok(Json(MessageResponse::new("class record deleted")))
}
