use axum::{extract::{Path, Query, State}, response::IntoResponse, Json};
use crate::api::dtos::requests::{LoginRequest, UpdateStatusParams};
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let admin = state
        .admin_service
        .validate_login(&payload.email, &payload.password)
        .await?;

    Ok(Json(admin))
}

pub async fn get_all_complaints(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let complaints = state.admin_service.get_all_complaints().await?;
    Ok(Json(complaints))
}

pub async fn update_complaint_status(
    State(state): State<Arc<AppState>>,
    Path(complaint_id): Path<String>,
    Query(params): Query<UpdateStatusParams>,
) -> Result<impl IntoResponse, AppError> {
    let complaint = state
        .admin_service
        .update_complaint_status(&complaint_id, &params.status)
        .await?;

    Ok(Json(complaint))
}
