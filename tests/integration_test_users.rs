mod common;

use axum::http::StatusCode;
use common::{parse_body, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_user_registration_and_login() {
    let app = TestApp::new().await;

    let user = app.register_user("Alice", "alice@example.com", "s3cret").await;
    assert_eq!(user["email"], "alice@example.com");
    assert!(!user["id"].as_str().unwrap().is_empty());
    // Hashes never leave the API.
    assert!(user.get("password_hash").is_none());

    let response = app
        .post_json(
            "/users/login",
            &json!({ "email": "alice@example.com", "password": "s3cret" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_body(response).await;
    assert_eq!(body["name"], "Alice");
}

#[tokio::test]
async fn test_duplicate_user_email_rejected() {
    let app = TestApp::new().await;

    app.register_user("Bob", "bob@example.com", "first").await;

    let response = app
        .post_json(
            "/users/register",
            &json!({ "name": "Bob Again", "email": "bob@example.com", "password": "second" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = parse_body(response).await;
    assert_eq!(body["error"], "User already exists with this email");
}

#[tokio::test]
async fn test_user_login_rejects_bad_credentials() {
    let app = TestApp::new().await;

    app.register_user("Carol", "carol@example.com", "correct").await;

    let wrong_password = app
        .post_json(
            "/users/login",
            &json!({ "email": "carol@example.com", "password": "incorrect" }),
        )
        .await;
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(parse_body(wrong_password).await["error"], "Invalid credentials");

    let unknown_email = app
        .post_json(
            "/users/login",
            &json!({ "email": "nobody@example.com", "password": "correct" }),
        )
        .await;
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(parse_body(unknown_email).await["error"], "Invalid credentials");
}

#[tokio::test]
async fn test_user_path_complaint_starts_open() {
    let app = TestApp::new().await;

    let user = app.register_user("Dave", "dave@example.com", "pw").await;
    let user_id = user["id"].as_str().unwrap();

    let response = app
        .post_json(
            "/users/complaints",
            &json!({
                "user_id": user_id,
                "title": "Broken street light",
                "description": "The light on 5th Ave has been out for a week."
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let complaint = parse_body(response).await;
    assert_eq!(complaint["status"], "Open");
    assert_eq!(complaint["user_id"], user_id);
    assert!(complaint["department_id"].is_null());
    assert_eq!(complaint["priority"], "Medium");
}

#[tokio::test]
async fn test_list_user_complaints() {
    let app = TestApp::new().await;

    let user = app.register_user("Eve", "eve@example.com", "pw").await;
    let user_id = user["id"].as_str().unwrap();

    for title in ["Noise", "Potholes"] {
        let response = app
            .post_json(
                "/users/complaints",
                &json!({ "user_id": user_id, "title": title, "description": "details" }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.get(&format!("/users/{}/complaints", user_id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let complaints = parse_body(response).await;
    assert_eq!(complaints.as_array().unwrap().len(), 2);

    // Unknown user ids are not an error on this path, just an empty list.
    let response = app.get("/users/no-such-user/complaints").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(parse_body(response).await.as_array().unwrap().is_empty());
}
