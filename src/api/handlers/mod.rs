pub mod admin;
pub mod complaint;
pub mod department;
pub mod health;
pub mod user;
