//! The Todo Service.
//!
//! Maps each operation on todo items to exactly one statement against the store.
//! The service holds no state of its own: the repository is the only source of truth,
//! and it is shared by every request without additional locking.

use crate::domain::todo::{NewTodo, Todo};
use crate::error::TodoError;
use crate::storage::todo::{self, TodoRepository};
use anyhow::Context;
use std::sync::Arc;

#[derive(Clone)]
pub struct TodoService {
    repo: Arc<dyn TodoRepository>,
}

impl TodoService {
    pub fn new(repo: Arc<dyn TodoRepository>) -> Self {
        Self { repo }
    }

    /// Opens the store, verifies it answers, and makes sure the `todos` table exists.
    ///
    /// Any failure here is meant to abort startup.
    pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<Self> {
        let repo = todo::connect(database_url, max_connections)
            .await
            .context("failed to open the todo store")?;
        repo.ping().await.context("todo store did not answer ping")?;
        repo.ensure_schema()
            .await
            .context("failed to create the todos table")?;
        Ok(Self::new(repo))
    }

    pub async fn health(&self) -> Result<(), TodoError> {
        Ok(self.repo.ping().await?)
    }

    pub async fn list(&self) -> Result<Vec<Todo>, TodoError> {
        Ok(self.repo.list().await?)
    }

    pub async fn create(&self, new_todo: NewTodo) -> Result<Todo, TodoError> {
        let id = self.repo.insert(&new_todo).await?;
        Ok(new_todo.with_id(id))
    }

    /// Looks up a todo by the raw id token taken from the request path.
    ///
    /// A token that is not an integer cannot match any row and is reported as not found.
    pub async fn get(&self, id: &str) -> Result<Todo, TodoError> {
        let Some(id) = parse_id(id) else {
            return Err(TodoError::NotFound);
        };
        self.repo.find(id).await?.ok_or(TodoError::NotFound)
    }

    /// Replaces title, description and completed of the row keyed by `id`.
    ///
    /// Succeeds whenever the statement executes, including when no row matched.
    pub async fn update(&self, id: &str, todo: NewTodo) -> Result<(), TodoError> {
        match parse_id(id) {
            Some(id) => Ok(self.repo.update(id, &todo).await?),
            None => Ok(()),
        }
    }

    /// Removes the row keyed by `id`. Same success semantics as [`TodoService::update`].
    pub async fn delete(&self, id: &str) -> Result<(), TodoError> {
        match parse_id(id) {
            Some(id) => Ok(self.repo.delete(id).await?),
            None => Ok(()),
        }
    }
}

fn parse_id(token: &str) -> Option<i32> {
    token.trim().parse::<i32>().ok()
}
