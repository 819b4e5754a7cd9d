//! Star API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::Value;
use shared::models::{Document, StarPayload};
use shared::{BatchCreatedResponse, MessageResponse};

use crate::core::ServerState;
use crate::utils::validation::{require_object, require_payload};
use crate::utils::{AppError, AppResult};

/// GET /stars - 获取所有星星记录
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Document>>> {
    let stars = state.stars().find_all().await?;
    Ok(Json(stars))
}

/// GET /stars/{person_id} - 获取某人的全部星星记录 (含已作废)
pub async fn list_for_person(
    State(state): State<ServerState>,
    Path(person_id): Path<String>,
) -> AppResult<Json<Vec<Document>>> {
    let stars = state.stars().find_by_person(&person_id).await?;
    Ok(Json(stars))
}

/// POST /stars - 新增星星记录 (单笔或批次)
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<BatchCreatedResponse>)> {
    let Json(payload) = payload?;
    let batch: StarPayload = serde_json::from_value(require_payload(payload)?).map_err(|_| {
        AppError::validation("Expected a star record or a list of star records")
    })?;

    let inserted_ids = state.stars().create(batch.into_records()).await?;

    Ok((
        StatusCode::CREATED,
        Json(BatchCreatedResponse::new("Star records created", inserted_ids)),
    ))
}

/// PUT|PATCH /stars/{id} - 更新星星记录 (`{"valid": false}` 即作废)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Json(payload) = payload?;
    let patch = require_object(payload, "Expected an object of fields to update")?;
    state.stars().update(&id, patch).await?;
    Ok(Json(MessageResponse::new("Star record updated")))
}

/// DELETE /stars/{id} - 删除星星记录
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.stars().delete(&id).await?;
    Ok(Json(MessageResponse::new("Star record deleted")))
}
