use serde::Deserialize;

#[derive(Deserialize)]
pub struct RegisterUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
}

#[derive(Deserialize)]
pub struct RegisterDepartmentRequest {
    pub name: String,
    pub head_name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// User-path submission. The department assignment is optional here; the
/// assignment path lives on /api/complaint/submit.
#[derive(Deserialize)]
pub struct SubmitComplaintRequest {
    pub user_id: String,
    pub department_id: Option<String>,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub priority: Option<String>,
}

#[derive(Deserialize)]
pub struct AssignedComplaintRequest {
    pub user_id: String,
    pub department_id: String,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub priority: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateStatusParams {
    pub status: String,
}
