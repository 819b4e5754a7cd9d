//! Person API Handlers

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

/// GET /{resource} - 获取所有人员
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Document>>> {
    let people = state.people().find_all().await?;
    Ok(Json(people))
}

/// GET /{resource}/{id} - 按业务编号获取人员
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Document>> {
    let person = state.people().get(&id).await?;
    Ok(Json(person))
}

/// POST /{resource} - 创建人员
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let Json(payload) = payload?;
    let repo = state.people();
    let record = require_object(payload, "Expected a single person record")?;
    let inserted_id = repo.create(record).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new(
            format!("{} created", repo.policy().resource()),
            inserted_id,
        )),
    ))
}

/// PUT /{resource}/{id} - 更新人员 (合并字段)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Json(payload) = payload?;
    let repo = state.people();
    let patch = require_object(payload, "Expected an object of fields to update")?;
    repo.update(&id, patch).await?;

    Ok(Json(MessageResponse::new(format!(
        "{} updated",
        repo.policy().resource()
    ))))
}

/// DELETE /{resource}/{id} - 删除人员
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let repo = state.people();
    repo.delete(&id).await?;

    Ok(Json(MessageResponse::new(format!(
        "{} deleted",
        repo.policy().resource()
    ))))
}
