//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod task;
pub mod user;

pub use task::{TaskRecord, TaskRepository, UpdateTaskPatch};
pub use user::{UserRecord, UserRepository};
