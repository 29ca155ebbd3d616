use axum::{
    body::Body,
    extract::Request,
    http::HeaderValue,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{admin, complaint, department, health, user};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = if state.config.cors_origin == "*" {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(
                state
                    .config
                    .cors_origin
                    .parse::<HeaderValue>()
                    .expect("CORS_ORIGIN must be a valid origin"),
            )
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .route("/health", get(health::health_check))

        // Users
        .route("/users/register", post(user::register))
        .route("/users/login", post(user::login))
        .route("/users/complaints", post(user::submit_complaint))
        .route("/users/{user_id}/complaints", get(user::get_user_complaints))

        // Departments
        .route("/departments", get(department::list_departments))
        .route("/departments/register", post(department::register))
        .route("/departments/login", post(department::login))
        .route("/departments/{dept_id}/complaints", get(department::get_dept_complaints))
        .route("/departments/complaints/{complaint_id}/close", put(department::close_complaint))

        // Admin
        .route("/admin/login", post(admin::login))
        .route("/admin/complaints", get(admin::get_all_complaints))
        .route("/admin/complaints/{complaint_id}", put(admin::update_complaint_status))

        // Complaint surface (assignment path + cross-cutting queries)
        .route("/api/complaint/all", get(complaint::get_all_complaints))
        .route("/api/complaint/submit", post(complaint::submit_complaint))
        .route("/api/complaint/{complaint_id}", put(complaint::update_complaint_status))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(cors)
        .with_state(state)
}
