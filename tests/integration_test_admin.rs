mod common;

use axum::http::StatusCode;
use common::{parse_body, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_admin_login() {
    let app = TestApp::new().await;
    app.seed_admin("admin@city.gov", "topsecret").await;

    let response = app
        .post_json(
            "/admin/login",
            &json!({ "email": "admin@city.gov", "password": "topsecret" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_body(response).await;
    assert_eq!(body["email"], "admin@city.gov");
    assert!(body.get("password_hash").is_none());

    let bad = app
        .post_json(
            "/admin/login",
            &json!({ "email": "admin@city.gov", "password": "wrong" }),
        )
        .await;
    assert_eq!(bad.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(parse_body(bad).await["error"], "Invalid credentials");
}

#[tokio::test]
async fn test_admin_sees_all_complaints() {
    let app = TestApp::new().await;

    let user = app.register_user("Frank", "frank@example.com", "pw").await;
    let user_id = user["id"].as_str().unwrap();

    for title in ["Graffiti", "Flooding", "Litter"] {
        let response = app
            .post_json(
                "/users/complaints",
                &json!({ "user_id": user_id, "title": title, "description": "details" }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.get("/admin/complaints").await;
    assert_eq!(response.status(), StatusCode::OK);
    let complaints = parse_body(response).await;
    assert_eq!(complaints.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_admin_status_update_accepts_any_string() {
    let app = TestApp::new().await;

    let user = app.register_user("Grace", "grace@example.com", "pw").await;
    let user_id = user["id"].as_str().unwrap();

    let response = app
        .post_json(
            "/users/complaints",
            &json!({ "user_id": user_id, "title": "Leak", "description": "details" }),
        )
        .await;
    let complaint = parse_body(response).await;
    let complaint_id = complaint["id"].as_str().unwrap();

    // Status is an unconstrained string; anything the admin supplies sticks.
    let response = app
        .put(&format!("/admin/complaints/{}?status=Escalated%20To%20Mayor", complaint_id))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(parse_body(response).await["status"], "Escalated To Mayor");

    let response = app.get(&format!("/users/{}/complaints", user_id)).await;
    let complaints = parse_body(response).await;
    assert_eq!(complaints[0]["status"], "Escalated To Mayor");
}

#[tokio::test]
async fn test_admin_status_update_unknown_complaint() {
    let app = TestApp::new().await;

    let response = app.put("/admin/complaints/no-such-id?status=Closed").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(parse_body(response).await["error"], "Complaint not found");
}
