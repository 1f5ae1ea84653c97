//! Task API routes
//!
//! Every handler takes the `AuthUser` extractor, so an unauthenticated
//! request is rejected before any task logic runs.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::repositories::UpdateTaskPatch;
use crate::services::TaskService;
use crate::state::AppState;
use crate::types::{CreateTaskRequest, DeleteTaskResponse, TaskResponse, UpdateTaskRequest};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{post, put},
    Json, Router,
};
use uuid::Uuid;

/// Create task routes
pub fn task_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_task).get(list_tasks))
        .route("/:id", put(update_task).delete(delete_task))
}

/// POST /tasks - Create a task owned by the authenticated user
async fn create_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<TaskResponse>)> {
    let task = TaskService::create(state.db(), auth.user_id, req.title).await?;
    Ok((StatusCode::CREATED, Json(task.into())))
}

/// GET /tasks - List the authenticated user's tasks, newest first
async fn list_tasks(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<TaskResponse>>> {
    let tasks = TaskService::list(state.db(), auth.user_id).await?;
    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

/// PUT /tasks/:id - Update title and/or completion status
async fn update_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateTaskRequest>,
) -> ApiResult<Json<TaskResponse>> {
    let patch = UpdateTaskPatch {
        title: req.title,
        completed: req.completed,
    };

    let task = TaskService::update(state.db(), auth.user_id, id, patch).await?;
    Ok(Json(task.into()))
}

/// DELETE /tasks/:id - Delete a task
async fn delete_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<DeleteTaskResponse>> {
    TaskService::delete(state.db(), auth.user_id, id).await?;

    Ok(Json(DeleteTaskResponse {
        message: "Task deleted successfully".to_string(),
        id: id.to_string(),
    }))
}
