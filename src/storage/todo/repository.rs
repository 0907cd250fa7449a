//! The persistence seam for todo items.

use crate::domain::todo::{NewTodo, Todo};
use async_trait::async_trait;

/// Statements the service needs from a relational store.
///
/// Every method is a single round-trip. `update` and `delete` report success whenever the
/// statement executes, whether or not a row matched.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Cheap liveness query (`SELECT 1`).
    async fn ping(&self) -> Result<(), sqlx::Error>;

    /// Creates the `todos` table when it does not exist yet.
    async fn ensure_schema(&self) -> Result<(), sqlx::Error>;

    async fn list(&self) -> Result<Vec<Todo>, sqlx::Error>;

    /// Inserts a row and returns the store-assigned id.
    async fn insert(&self, todo: &NewTodo) -> Result<i32, sqlx::Error>;

    async fn find(&self, id: i32) -> Result<Option<Todo>, sqlx::Error>;

    async fn update(&self, id: i32, todo: &NewTodo) -> Result<(), sqlx::Error>;

    async fn delete(&self, id: i32) -> Result<(), sqlx::Error>;
}
