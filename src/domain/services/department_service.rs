use std::sync::Arc;

use chrono::Utc;

use crate::domain::models::complaint::Complaint;
use crate::domain::models::department::Department;
use crate::domain::ports::{ComplaintRepository, DepartmentRepository};
use crate::domain::services::credentials::{hash_password, verify_password};
use crate::error::AppError;
use tracing::info;

pub struct NewDepartment {
    pub name: String,
    pub head_name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
}

pub struct DepartmentService {
    departments: Arc<dyn DepartmentRepository>,
    complaints: Arc<dyn ComplaintRepository>,
}

impl DepartmentService {
    pub fn new(
        departments: Arc<dyn DepartmentRepository>,
        complaints: Arc<dyn ComplaintRepository>,
    ) -> Self {
        Self { departments, complaints }
    }

    pub async fn register(&self, new_dept: NewDepartment) -> Result<Department, AppError> {
        if new_dept.email.trim().is_empty() {
            return Err(AppError::Validation("Email is required".into()));
        }
        // A concurrent register that slips past this check still hits the
        // store's UNIQUE index on email and surfaces as a 409 conflict.
        if self.departments.exists_by_email(&new_dept.email).await? {
            return Err(AppError::Validation("Email already registered".into()));
        }

        let password_hash = hash_password(&new_dept.password)?;
        let department = Department::new(
            new_dept.name,
            new_dept.head_name,
            new_dept.email,
            password_hash,
            new_dept.phone,
        );
        let created = self.departments.create(&department).await?;

        info!("Registered department: {} ({})", created.name, created.id);
        Ok(created)
    }

    /// Unknown email and wrong password fail with the same message so the
    /// response does not reveal which of the two was the case.
    pub async fn login(&self, email: &str, password: &str) -> Result<Department, AppError> {
        let department = self
            .departments
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid email or password".into()))?;

        if !verify_password(password, &department.password_hash) {
            return Err(AppError::Unauthorized("Invalid email or password".into()));
        }

        Ok(department)
    }

    pub async fn get_dept_complaints(&self, dept_id: &str) -> Result<Vec<Complaint>, AppError> {
        self.departments
            .find_by_id(dept_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Department not found".into()))?;

        self.complaints.list_by_department(dept_id).await
    }

    /// Idempotent: closing an already-closed complaint leaves it "Closed".
    pub async fn close_complaint(&self, complaint_id: &str) -> Result<Complaint, AppError> {
        let mut complaint = self
            .complaints
            .find_by_id(complaint_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Complaint not found".into()))?;

        complaint.status = "Closed".to_string();
        complaint.updated_at = Utc::now();

        let updated = self.complaints.update(&complaint).await?;
        info!("Closed complaint: {}", updated.id);
        Ok(updated)
    }

    pub async fn get_all_departments(&self) -> Result<Vec<Department>, AppError> {
        self.departments.list_all().await
    }
}
