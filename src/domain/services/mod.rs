pub mod admin_service;
pub mod complaint_service;
pub mod credentials;
pub mod department_service;
pub mod user_service;
