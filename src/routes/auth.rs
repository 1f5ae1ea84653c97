//! Authentication routes
//!
//! Provides endpoints for user signup and login.

use crate::error::ApiResult;
use crate::services::UserService;
use crate::state::AppState;
use crate::types::{LoginRequest, MessageResponse, SignupRequest, TokenResponse};
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
}

/// Register a new user
///
/// POST /auth/signup
///
/// Password hashing is offloaded to the blocking thread pool.
async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    UserService::signup(
        state.db(),
        state.passwords(),
        &req.name,
        &req.email,
        &req.password,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User created".to_string(),
        }),
    ))
}

/// Login with email and password
///
/// POST /auth/login
///
/// Password verification is offloaded to the blocking thread pool.
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let token = UserService::login(
        state.db(),
        state.jwt(),
        state.passwords(),
        &req.email,
        &req.password,
    )
    .await?;

    Ok(Json(TokenResponse { token }))
}
