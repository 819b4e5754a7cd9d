//! Dashboard API Handlers

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use shared::models::UserData;

use crate::core::ServerState;
use crate::services::DashboardService;
use crate::utils::{AppError, AppResult};

/// Generic alias for the person query parameter
const PERSON_ID_PARAM: &str = "person_id";

/// GET /user-data - 个人总览 (人员、有效星星、课程、系统设置)
pub async fn user_data(
    State(state): State<ServerState>,
    query: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> AppResult<Json<UserData>> {
    let Query(params) = query?;
    let param = state.config.person.query_param();

    let person_id = [param.as_str(), PERSON_ID_PARAM]
        .into_iter()
        .filter_map(|key| params.get(key))
        .find(|id| !id.is_empty())
        .ok_or_else(|| AppError::validation(format!("Missing {param}")))?;

    let data = DashboardService::new(&state).user_data(person_id).await?;
    Ok(Json(data))
}
