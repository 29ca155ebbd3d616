pub mod sqlite_admin_repo;
pub mod sqlite_complaint_repo;
pub mod sqlite_department_repo;
pub mod sqlite_user_repo;

pub mod postgres_admin_repo;
pub mod postgres_complaint_repo;
pub mod postgres_department_repo;
pub mod postgres_user_repo;
