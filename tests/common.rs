use complaint_backend::{
    api::router::create_router,
    config::Config,
    domain::models::admin::Admin,
    domain::services::admin_service::AdminService,
    domain::services::complaint_service::ComplaintService,
    domain::services::credentials::hash_password,
    domain::services::department_service::DepartmentService,
    domain::services::user_service::UserService,
    infra::repositories::{
        sqlite_admin_repo::SqliteAdminRepo,
        sqlite_complaint_repo::SqliteComplaintRepo,
        sqlite_department_repo::SqliteDepartmentRepo,
        sqlite_user_repo::SqliteUserRepo,
    },
    state::AppState,
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;
use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            cors_origin: "*".to_string(),
            admin_email: None,
            admin_password: None,
        };

        let user_repo = Arc::new(SqliteUserRepo::new(pool.clone()));
        let department_repo = Arc::new(SqliteDepartmentRepo::new(pool.clone()));
        let admin_repo = Arc::new(SqliteAdminRepo::new(pool.clone()));
        let complaint_repo = Arc::new(SqliteComplaintRepo::new(pool.clone()));

        let state = Arc::new(AppState {
            config: config.clone(),
            user_repo: user_repo.clone(),
            department_repo: department_repo.clone(),
            admin_repo: admin_repo.clone(),
            complaint_repo: complaint_repo.clone(),
            user_service: Arc::new(UserService::new(user_repo.clone(), complaint_repo.clone())),
            department_service: Arc::new(DepartmentService::new(
                department_repo.clone(),
                complaint_repo.clone(),
            )),
            admin_service: Arc::new(AdminService::new(admin_repo.clone(), complaint_repo.clone())),
            complaint_service: Arc::new(ComplaintService::new(
                complaint_repo,
                user_repo,
                department_repo,
            )),
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    pub async fn post_json(&self, uri: &str, payload: &Value) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    pub async fn put(&self, uri: &str) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    pub async fn get(&self, uri: &str) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Admins have no registration endpoint; tests seed one directly the way
    /// the bootstrap path does.
    pub async fn seed_admin(&self, email: &str, password: &str) -> Admin {
        let password_hash = hash_password(password).unwrap();
        let admin = Admin::new(email.to_string(), password_hash);
        self.state.admin_repo.create(&admin).await.unwrap()
    }

    pub async fn register_user(&self, name: &str, email: &str, password: &str) -> Value {
        let response = self
            .post_json(
                "/users/register",
                &serde_json::json!({ "name": name, "email": email, "password": password }),
            )
            .await;
        assert!(
            response.status().is_success(),
            "user registration failed: {}",
            response.status()
        );
        parse_body(response).await
    }

    pub async fn register_department(&self, name: &str, email: &str, password: &str) -> Value {
        let response = self
            .post_json(
                "/departments/register",
                &serde_json::json!({
                    "name": name,
                    "head_name": "Head of Testing",
                    "email": email,
                    "password": password
                }),
            )
            .await;
        assert!(
            response.status().is_success(),
            "department registration failed: {}",
            response.status()
        );
        parse_body(response).await
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}

pub async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
