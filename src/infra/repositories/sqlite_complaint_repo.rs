use crate::domain::{models::complaint::Complaint, ports::ComplaintRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteComplaintRepo {
    pool: SqlitePool,
}

impl SqliteComplaintRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ComplaintRepository for SqliteComplaintRepo {
    async fn create(&self, complaint: &Complaint) -> Result<Complaint, AppError> {
        sqlx::query_as::<_, Complaint>(
            "INSERT INTO complaints (id, user_id, department_id, title, description, location, priority, status, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING id, user_id, department_id, title, description, location, priority, status, created_at, updated_at",
        )
            .bind(&complaint.id)
            .bind(&complaint.user_id)
            .bind(&complaint.department_id)
            .bind(&complaint.title)
            .bind(&complaint.description)
            .bind(&complaint.location)
            .bind(&complaint.priority)
            .bind(&complaint.status)
            .bind(complaint.created_at)
            .bind(complaint.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Complaint>, AppError> {
        sqlx::query_as::<_, Complaint>(
            "SELECT id, user_id, department_id, title, description, location, priority, status, created_at, updated_at FROM complaints WHERE id = ?",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_all(&self) -> Result<Vec<Complaint>, AppError> {
        sqlx::query_as::<_, Complaint>(
            "SELECT id, user_id, department_id, title, description, location, priority, status, created_at, updated_at FROM complaints ORDER BY created_at DESC",
        )
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Complaint>, AppError> {
        sqlx::query_as::<_, Complaint>(
            "SELECT id, user_id, department_id, title, description, location, priority, status, created_at, updated_at FROM complaints WHERE user_id = ? ORDER BY created_at DESC",
        )
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_department(&self, department_id: &str) -> Result<Vec<Complaint>, AppError> {
        sqlx::query_as::<_, Complaint>(
            "SELECT id, user_id, department_id, title, description, location, priority, status, created_at, updated_at FROM complaints WHERE department_id = ? ORDER BY created_at DESC",
        )
            .bind(department_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, complaint: &Complaint) -> Result<Complaint, AppError> {
        sqlx::query_as::<_, Complaint>(
            "UPDATE complaints SET department_id = ?, title = ?, description = ?, location = ?, priority = ?, status = ?, updated_at = ? WHERE id = ? RETURNING id, user_id, department_id, title, description, location, priority, status, created_at, updated_at",
        )
            .bind(&complaint.department_id)
            .bind(&complaint.title)
            .bind(&complaint.description)
            .bind(&complaint.location)
            .bind(&complaint.priority)
            .bind(&complaint.status)
            .bind(complaint.updated_at)
            .bind(&complaint.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
