use axum::{extract::{Path, State}, response::IntoResponse, Json};
use crate::api::dtos::requests::{LoginRequest, RegisterUserRequest, SubmitComplaintRequest};
use crate::domain::models::complaint::NewComplaintParams;
use crate::domain::services::user_service::NewUser;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = state
        .user_service
        .register(NewUser {
            name: payload.name,
            email: payload.email,
            password: payload.password,
            phone: payload.phone,
        })
        .await?;

    Ok(Json(user))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.user_service.login(&payload.email, &payload.password).await?;
    Ok(Json(user))
}

pub async fn submit_complaint(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SubmitComplaintRequest>,
) -> Result<impl IntoResponse, AppError> {
    let complaint = state
        .user_service
        .submit_complaint(NewComplaintParams {
            user_id: payload.user_id,
            department_id: payload.department_id,
            title: payload.title,
            description: payload.description,
            location: payload.location,
            priority: payload.priority,
        })
        .await?;

    Ok(Json(complaint))
}

pub async fn get_user_complaints(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let complaints = state.user_service.get_complaints(&user_id).await?;
    Ok(Json(complaints))
}
