use crate::domain::{models::department::Department, ports::DepartmentRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresDepartmentRepo {
    pool: PgPool,
}

impl PostgresDepartmentRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DepartmentRepository for PostgresDepartmentRepo {
    async fn create(&self, department: &Department) -> Result<Department, AppError> {
        sqlx::query_as::<_, Department>(
            "INSERT INTO departments (id, name, head_name, email, password_hash, phone, created_at) VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING id, name, head_name, email, password_hash, phone, created_at",
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
            "SELECT id, name, head_name, email, password_hash, phone, created_at FROM departments WHERE id = $1",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Department>, AppError> {
        sqlx::query_as::<_, Department>(
            "SELECT id, name, head_name, email, password_hash, phone, created_at FROM departments WHERE email = $1",
        )
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM departments WHERE email = $1")
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
