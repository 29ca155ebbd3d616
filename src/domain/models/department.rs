use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Department {
    pub id: String,
    pub name: String,
    pub head_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Department {
    pub fn new(
        name: String,
        head_name: String,
        email: String,
        password_hash: String,
        phone: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            head_name,
            email,
            password_hash,
            phone,
            created_at: Utc::now(),
        }
    }
}
