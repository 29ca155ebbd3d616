use axum::{extract::{Path, Query, State}, response::IntoResponse, Json};
use crate::api::dtos::requests::{AssignedComplaintRequest, UpdateStatusParams};
use crate::domain::services::complaint_service::SubmitComplaintParams;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;

pub async fn get_all_complaints(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let complaints = state.complaint_service.get_all_complaints().await?;
    Ok(Json(complaints))
}

pub async fn submit_complaint(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AssignedComplaintRequest>,
) -> Result<impl IntoResponse, AppError> {
    let complaint = state
        .complaint_service
        .submit_complaint(
            &payload.user_id,
            &payload.department_id,
            SubmitComplaintParams {
                title: payload.title,
                description: payload.description,
                location: payload.location,
                priority: payload.priority,
            },
        )
        .await?;

    Ok(Json(complaint))
}

pub async fn update_complaint_status(
    State(state): State<Arc<AppState>>,
    Path(complaint_id): Path<String>,
    Query(params): Query<UpdateStatusParams>,
) -> Result<impl IntoResponse, AppError> {
    let complaint = state
        .complaint_service
        .update_complaint_status(&complaint_id, &params.status)
        .await?;

    Ok(Json(complaint))
}
