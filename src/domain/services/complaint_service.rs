use std::sync::Arc;

use chrono::Utc;

use crate::domain::models::complaint::{Complaint, NewComplaintParams};
use crate::domain::ports::{ComplaintRepository, DepartmentRepository, UserRepository};
use crate::error::AppError;
use tracing::info;

pub struct SubmitComplaintParams {
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub priority: Option<String>,
}

/// Cross-cutting complaint operations. Some of these overlap with what the
/// user, department, and admin services expose on their own surfaces; the
/// overlap is intentional and the per-surface behavior differs (this path
/// requires both foreign keys and defaults the status to "Pending").
pub struct ComplaintService {
    complaints: Arc<dyn ComplaintRepository>,
    users: Arc<dyn UserRepository>,
    departments: Arc<dyn DepartmentRepository>,
}

impl ComplaintService {
    pub fn new(
        complaints: Arc<dyn ComplaintRepository>,
        users: Arc<dyn UserRepository>,
        departments: Arc<dyn DepartmentRepository>,
    ) -> Self {
        Self { complaints, users, departments }
    }

    /// Submit a complaint already assigned to a department. Both foreign keys
    /// are resolved before anything is written; the status starts "Pending".
    pub async fn submit_complaint(
        &self,
        user_id: &str,
        dept_id: &str,
        params: SubmitComplaintParams,
    ) -> Result<Complaint, AppError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".into()))?;
        let department = self
            .departments
            .find_by_id(dept_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Department not found".into()))?;

        let mut complaint = Complaint::new(NewComplaintParams {
            user_id: user.id,
            department_id: Some(department.id),
            title: params.title,
            description: params.description,
            location: params.location,
            priority: params.priority,
        });
        complaint.status = "Pending".to_string();

        let created = self.complaints.create(&complaint).await?;
        info!(
            "Complaint {} submitted for user {} against department {}",
            created.id, created.user_id, dept_id
        );
        Ok(created)
    }

    pub async fn get_all_complaints(&self) -> Result<Vec<Complaint>, AppError> {
        self.complaints.list_all().await
    }

    pub async fn get_dept_complaints(&self, dept_id: &str) -> Result<Vec<Complaint>, AppError> {
        self.departments
            .find_by_id(dept_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Department not found".into()))?;

        self.complaints.list_by_department(dept_id).await
    }

    pub async fn get_user_complaints(&self, user_id: &str) -> Result<Vec<Complaint>, AppError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".into()))?;

        self.complaints.list_by_user(user_id).await
    }

    pub async fn update_complaint_status(
        &self,
        complaint_id: &str,
        status: &str,
    ) -> Result<Complaint, AppError> {
        let mut complaint = self
            .complaints
            .find_by_id(complaint_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Complaint not found".into()))?;

        complaint.status = status.to_string();
        complaint.updated_at = Utc::now();

        self.complaints.update(&complaint).await
    }
}
