use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{PgPool, SqlitePool, ConnectOptions};
use tracing::{info, warn};
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::domain::models::admin::Admin;
use crate::domain::ports::{AdminRepository, ComplaintRepository, DepartmentRepository, UserRepository};
use crate::domain::services::admin_service::AdminService;
use crate::domain::services::complaint_service::ComplaintService;
use crate::domain::services::credentials::hash_password;
use crate::domain::services::department_service::DepartmentService;
use crate::domain::services::user_service::UserService;
use crate::state::AppState;
use crate::infra::repositories::{
    postgres_admin_repo::PostgresAdminRepo, postgres_complaint_repo::PostgresComplaintRepo,
    postgres_department_repo::PostgresDepartmentRepo, postgres_user_repo::PostgresUserRepo,
    sqlite_admin_repo::SqliteAdminRepo, sqlite_complaint_repo::SqliteComplaintRepo,
    sqlite_department_repo::SqliteDepartmentRepo, sqlite_user_repo::SqliteUserRepo,
};

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;

    let state = if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts.log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;

        build_state(
            config,
            Arc::new(PostgresUserRepo::new(pool.clone())),
            Arc::new(PostgresDepartmentRepo::new(pool.clone())),
            Arc::new(PostgresAdminRepo::new(pool.clone())),
            Arc::new(PostgresComplaintRepo::new(pool)),
        )
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        build_state(
            config,
            Arc::new(SqliteUserRepo::new(pool.clone())),
            Arc::new(SqliteDepartmentRepo::new(pool.clone())),
            Arc::new(SqliteAdminRepo::new(pool.clone())),
            Arc::new(SqliteComplaintRepo::new(pool)),
        )
    };

    seed_admin(config, state.admin_repo.clone()).await;

    state
}

fn build_state(
    config: &Config,
    user_repo: Arc<dyn UserRepository>,
    department_repo: Arc<dyn DepartmentRepository>,
    admin_repo: Arc<dyn AdminRepository>,
    complaint_repo: Arc<dyn ComplaintRepository>,
) -> AppState {
    let user_service = Arc::new(UserService::new(user_repo.clone(), complaint_repo.clone()));
    let department_service = Arc::new(DepartmentService::new(
        department_repo.clone(),
        complaint_repo.clone(),
    ));
    let admin_service = Arc::new(AdminService::new(admin_repo.clone(), complaint_repo.clone()));
    let complaint_service = Arc::new(ComplaintService::new(
        complaint_repo.clone(),
        user_repo.clone(),
        department_repo.clone(),
    ));

    AppState {
        config: config.clone(),
        user_repo,
        department_repo,
        admin_repo,
        complaint_repo,
        user_service,
        department_service,
        admin_service,
        complaint_service,
    }
}

/// Creates the bootstrap admin account from ADMIN_EMAIL / ADMIN_PASSWORD if
/// it does not exist yet. Admins have no self-service registration surface.
async fn seed_admin(config: &Config, admin_repo: Arc<dyn AdminRepository>) {
    let (Some(email), Some(password)) = (&config.admin_email, &config.admin_password) else {
        warn!("ADMIN_EMAIL / ADMIN_PASSWORD not set, skipping admin bootstrap");
        return;
    };

    match admin_repo.find_by_email(email).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            let password_hash = hash_password(password).expect("Failed to hash admin password");
            let admin = Admin::new(email.clone(), password_hash);
            admin_repo
                .create(&admin)
                .await
                .expect("Failed to seed admin account");
            info!("Seeded bootstrap admin: {}", email);
        }
        Err(e) => panic!("Failed to look up bootstrap admin: {:?}", e),
    }
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
