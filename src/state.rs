use std::sync::Arc;
use crate::config::Config;
use crate::domain::ports::{
    AdminRepository, ComplaintRepository, DepartmentRepository, UserRepository,
};
use crate::domain::services::admin_service::AdminService;
use crate::domain::services::complaint_service::ComplaintService;
use crate::domain::services::department_service::DepartmentService;
use crate::domain::services::user_service::UserService;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub department_repo: Arc<dyn DepartmentRepository>,
    pub admin_repo: Arc<dyn AdminRepository>,
    pub complaint_repo: Arc<dyn ComplaintRepository>,
    pub user_service: Arc<UserService>,
    pub department_service: Arc<DepartmentService>,
    pub admin_service: Arc<AdminService>,
    pub complaint_service: Arc<ComplaintService>,
}
