//! Settings API Handlers

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::{Value, json};
use shared::MessageResponse;
use shared::models::{InitInfo, InitInfoUpdate};

use crate::core::ServerState;
use crate::utils::validation::require_object;
use crate::utils::{AppError, AppResult};

/// GET /init - 获取系统设置, 未设置时返回 `{}`
pub async fn get(State(state): State<ServerState>) -> AppResult<Json<Value>> {
    let body = match state.settings().get().await? {
        Some(record) => {
            serde_json::to_value(record).map_err(|e| AppError::internal(e.to_string()))?
        }
        None => json!({}),
    };
    Ok(Json(body))
}

/// PUT /init - 更新系统设置 (不存在则新增)
pub async fn update(
    State(state): State<ServerState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Json(payload) = payload?;
    let fields = require_object(payload, "Expected an object of settings")?;
    let update: InitInfoUpdate = serde_json::from_value(Value::Object(fields))
        .map_err(|e| AppError::validation(format!("Invalid settings: {e}")))?;

    state.settings().update(InitInfo::from(update)).await?;
    Ok(Json(MessageResponse::new("Init info updated")))
}
