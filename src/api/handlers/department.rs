use axum::{extract::{Path, State}, response::IntoResponse, Json};
use crate::api::dtos::requests::{LoginRequest, RegisterDepartmentRequest};
use crate::domain::services::department_service::NewDepartment;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterDepartmentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let department = state
        .department_service
        .register(NewDepartment {
            name: payload.name,
            head_name: payload.head_name,
            email: payload.email,
            password: payload.password,
            phone: payload.phone,
        })
        .await?;

    Ok(Json(department))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let department = state
        .department_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(department))
}

pub async fn get_dept_complaints(
    State(state): State<Arc<AppState>>,
    Path(dept_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let complaints = state.department_service.get_dept_complaints(&dept_id).await?;
    Ok(Json(complaints))
}

pub async fn close_complaint(
    State(state): State<Arc<AppState>>,
    Path(complaint_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let complaint = state.department_service.close_complaint(&complaint_id).await?;
    Ok(Json(complaint))
}

pub async fn list_departments(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let departments = state.department_service.get_all_departments().await?;
    Ok(Json(departments))
}
