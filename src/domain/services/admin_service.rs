use std::sync::Arc;

use chrono::Utc;

use crate::domain::models::admin::Admin;
use crate::domain::models::complaint::Complaint;
use crate::domain::ports::{AdminRepository, ComplaintRepository};
use crate::domain::services::credentials::verify_password;
use crate::error::AppError;
use tracing::info;

pub struct AdminService {
    admins: Arc<dyn AdminRepository>,
    complaints: Arc<dyn ComplaintRepository>,
}

impl AdminService {
    pub fn new(admins: Arc<dyn AdminRepository>, complaints: Arc<dyn ComplaintRepository>) -> Self {
        Self { admins, complaints }
    }

    pub async fn validate_login(&self, email: &str, password: &str) -> Result<Admin, AppError> {
        let admin = self
            .admins
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid credentials".into()))?;

        if !verify_password(password, &admin.password_hash) {
            return Err(AppError::Unauthorized("Invalid credentials".into()));
        }

        Ok(admin)
    }

    pub async fn get_all_complaints(&self) -> Result<Vec<Complaint>, AppError> {
        self.complaints.list_all().await
    }

    /// The status is whatever string the caller supplied. There is no closed
    /// set of states and no transition rules on this surface.
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

        let updated = self.complaints.update(&complaint).await?;
        info!("Admin set complaint {} status to {}", updated.id, updated.status);
        Ok(updated)
    }
}
