//! Integration tests for the signup and login endpoints

mod common;

use axum::http::StatusCode;
use serde_json::json;

fn unique_email(prefix: &str) -> String {
    format!("{}_{}@example.com", prefix, uuid::Uuid::new_v4())
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_signup_success() {
    let app = common::TestApp::new().await;

    let body = json!({
        "name": "Ann",
        "email": unique_email("signup"),
        "password": "secret1"
    });

    let (status, response) = app.post("/auth/signup", &body.to_string()).await;

    assert_eq!(status, StatusCode::CREATED);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["message"], "User created");
    // The password hash must never appear in a response
    assert!(response.get("password").is_none());
    assert!(response.get("password_hash").is_none());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_signup_duplicate_email() {
    let app = common::TestApp::new().await;

    let email = unique_email("duplicate");
    let body = json!({
        "name": "Ann",
        "email": email,
        "password": "secret1"
    });

    // First registration should succeed
    let (status, _) = app.post("/auth/signup", &body.to_string()).await;
    assert_eq!(status, StatusCode::CREATED);

    // Second registration with same email should fail
    let (status, response) = app.post("/auth/signup", &body.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["error"], "Email already exists");

    // No second identity record was created
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = $1")
        .bind(&email)
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_signup_then_login_yields_token() {
    let app = common::TestApp::new().await;

    let email = unique_email("login");
    let token = app.signup_and_login("Ann", &email, "secret1").await;
    assert!(!token.is_empty());

    // The token authorizes a task request (gate accepts it)
    let (status, _) = app.get_auth("/tasks", &token).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_wrong_password() {
    let app = common::TestApp::new().await;

    let email = unique_email("wrong_pass");
    let signup = json!({
        "name": "Ann",
        "email": email,
        "password": "secret1"
    });
    app.post("/auth/signup", &signup.to_string()).await;

    let login = json!({
        "email": email,
        "password": "secret2"
    });
    let (status, response) = app.post("/auth/login", &login.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["error"], "Wrong password");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_unknown_email() {
    let app = common::TestApp::new().await;

    let login = json!({
        "email": unique_email("nonexistent"),
        "password": "secret1"
    });
    let (status, response) = app.post("/auth/login", &login.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["error"], "User not found");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_stored_email_matching_is_case_sensitive() {
    let app = common::TestApp::new().await;

    let email = unique_email("case");
    app.signup_and_login("Ann", &email, "secret1").await;

    let login = json!({
        "email": email.to_uppercase(),
        "password": "secret1"
    });
    let (status, _) = app.post("/auth/login", &login.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
