use crate::domain::{models::department::Department, ports::DepartmentRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteDepartmentRepo {
    pool: SqlitePool,
}

impl SqliteDepartmentRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DepartmentRepository for SqliteDepartmentRepo {
    async fn create(&self, department: &Department) -> Result<Department, AppError> {
        sqlx::query_as::<_, Department>(
            "INSERT INTO departments (id, name, head_name, email, password_hash, phone, created_at) VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING id, name, head_name, email, password_hash, phone, created_at",
        )
            .bind(&department.id)
            .bind(&department.name)
            .bind(&department.head_name)
            .bind(&department.email)
            .bind(&department.password_hash)
            .bind(&department.phone)
            .bind(department.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Department>, AppError> {
        sqlx::query_as::<_, Department>(
            "SELECT id, name, head_name, email, password_hash, phone, created_at FROM departments WHERE id = ?",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Department>, AppError> {
        sqlx::query_as::<_, Department>(
            "SELECT id, name, head_name, email, password_hash, phone, created_at FROM departments WHERE email = ?",
        )
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM departments WHERE email = ?")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(count > 0)
    }

    async fn list_all(&self) -> Result<Vec<Department>, AppError> {
        sqlx::query_as::<_, Department>(
            "SELECT id, name, head_name, email, password_hash, phone, created_at FROM departments ORDER BY name ASC",
        )
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
