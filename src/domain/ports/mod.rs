use crate::domain::models::{
    admin::Admin, complaint::Complaint, department::Department, user::User,
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
}

#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    async fn create(&self, department: &Department) -> Result<Department, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Department>, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Department>, AppError>;
    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError>;
    async fn list_all(&self) -> Result<Vec<Department>, AppError>;
}

#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn create(&self, admin: &Admin) -> Result<Admin, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, AppError>;
}

#[async_trait]
pub trait ComplaintRepository: Send + Sync {
    async fn create(&self, complaint: &Complaint) -> Result<Complaint, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Complaint>, AppError>;
    async fn list_all(&self) -> Result<Vec<Complaint>, AppError>;
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Complaint>, AppError>;
    async fn list_by_department(&self, department_id: &str) -> Result<Vec<Complaint>, AppError>;
    async fn update(&self, complaint: &Complaint) -> Result<Complaint, AppError>;
}
