//! Task repository for database operations
//!
//! Every read and mutation is keyed by `(id, user_id)` jointly; a task id
//! alone never authorizes access. Update and delete are single conditional
//! statements, so there is no window between the ownership check and the
//! mutation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Task record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TaskRecord {
    pub id: Uuid,
    pub title: String,
    pub completed: bool,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Partial update for a task; `None` fields keep their stored value
#[derive(Debug, Clone, Default)]
pub struct UpdateTaskPatch {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

/// Task repository for database operations
pub struct TaskRepository;

impl TaskRepository {
    /// Create a new task owned by `user_id`
    pub async fn create(pool: &PgPool, user_id: Uuid, title: &str) -> Result<TaskRecord, sqlx::Error> {
        sqlx::query_as::<_, TaskRecord>(
            r#"
            INSERT INTO tasks (title, completed, user_id)
            VALUES ($1, FALSE, $2)
            RETURNING id, title, completed, user_id, created_at
            "#,
        )
        .bind(title)
        .bind(user_id)
        .fetch_one(pool)
        .await
    }

    /// List a user's tasks, newest first
    pub async fn list_by_owner(pool: &PgPool, user_id: Uuid) -> Result<Vec<TaskRecord>, sqlx::Error> {
        sqlx::query_as::<_, TaskRecord>(
            r#"
            SELECT id, title, completed, user_id, created_at
            FROM tasks
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Update a task if it is owned by `user_id`
    ///
    /// Returns `None` when no task matches, whether the id does not exist
    /// or belongs to another owner.
    pub async fn update_if_owner(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
        patch: UpdateTaskPatch,
    ) -> Result<Option<TaskRecord>, sqlx::Error> {
        sqlx::query_as::<_, TaskRecord>(
            r#"
            UPDATE tasks
            SET title = COALESCE($3, title),
                completed = COALESCE($4, completed)
            WHERE id = $1 AND user_id = $2
            RETURNING id, title, completed, user_id, created_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(patch.title)
        .bind(patch.completed)
        .fetch_optional(pool)
        .await
    }

    /// Delete a task if it is owned by `user_id`
    ///
    /// Same joint-scoping rule as `update_if_owner`.
    pub async fn delete_if_owner(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<TaskRecord>, sqlx::Error> {
        sqlx::query_as::<_, TaskRecord>(
            r#"
            DELETE FROM tasks
            WHERE id = $1 AND user_id = $2
            RETURNING id, title, completed, user_id, created_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
    }
}
