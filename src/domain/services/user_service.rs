use std::sync::Arc;

use crate::domain::models::complaint::{Complaint, NewComplaintParams};
use crate::domain::models::user::User;
use crate::domain::ports::{ComplaintRepository, UserRepository};
use crate::domain::services::credentials::{hash_password, verify_password};
use crate::error::AppError;
use tracing::info;

pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
}

pub struct UserService {
    users: Arc<dyn UserRepository>,
    complaints: Arc<dyn ComplaintRepository>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, complaints: Arc<dyn ComplaintRepository>) -> Self {
        Self { users, complaints }
    }

    pub async fn register(&self, new_user: NewUser) -> Result<User, AppError> {
        if self.users.find_by_email(&new_user.email).await?.is_some() {
            return Err(AppError::Conflict("User already exists with this email".into()));
        }

        let password_hash = hash_password(&new_user.password)?;
        let user = User::new(new_user.name, new_user.email, password_hash, new_user.phone);
        let created = self.users.create(&user).await?;

        info!("Registered user: {}", created.id);
        Ok(created)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid credentials".into()))?;

        if !verify_password(password, &user.password_hash) {
            return Err(AppError::Unauthorized("Invalid credentials".into()));
        }

        Ok(user)
    }

    /// Complaints submitted through the user path always start out "Open",
    /// which is the constructor default.
    pub async fn submit_complaint(&self, params: NewComplaintParams) -> Result<Complaint, AppError> {
        let complaint = Complaint::new(params);

        let created = self.complaints.create(&complaint).await?;
        info!("User {} submitted complaint {}", created.user_id, created.id);
        Ok(created)
    }

    // No existence check here: an unknown user id simply yields an empty list.
    pub async fn get_complaints(&self, user_id: &str) -> Result<Vec<Complaint>, AppError> {
        self.complaints.list_by_user(user_id).await
    }
}
