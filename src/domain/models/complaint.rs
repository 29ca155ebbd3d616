use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Status is deliberately a free string. The two creation paths default it
/// differently ("Open" via the user path, "Pending" via the assignment path)
/// and the admin surface accepts any value.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Complaint {
    pub id: String,
    pub user_id: String,
    pub department_id: Option<String>,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub priority: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewComplaintParams {
    pub user_id: String,
    pub department_id: Option<String>,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub priority: Option<String>,
}

impl Complaint {
    pub fn new(params: NewComplaintParams) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            user_id: params.user_id,
            department_id: params.department_id,
            title: params.title,
            description: params.description,
            location: params.location,
            priority: params.priority.unwrap_or_else(|| "Medium".to_string()),
            status: "Open".to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}
