//! Todo repository backed by SQLite (embedded store for tests and local runs).

use crate::domain::todo::{NewTodo, Todo};
use crate::storage::todo::TodoRepository;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

#[derive(Clone)]
pub struct SqliteTodoRepository {
    pool: SqlitePool,
}

impl SqliteTodoRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens a pool for `database_url` (e.g. `sqlite::memory:` or `sqlite://todos.db`).
    ///
    /// Every connection to an in-memory database gets its own empty database, so those
    /// pools are pinned to a single connection that is never recycled.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = if is_in_memory(database_url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new()
                .max_connections(max_connections)
                .connect_with(options)
                .await?
        };
        Ok(Self::new(pool))
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        // AUTOINCREMENT keeps ids of deleted rows from being handed out again.
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS todos (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                completed BOOLEAN NOT NULL DEFAULT FALSE
            )",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Todo>, sqlx::Error> {
        sqlx::query_as::<_, Todo>("SELECT id, title, description, completed FROM todos")
            .fetch_all(&self.pool)
            .await
    }

    async fn insert(&self, todo: &NewTodo) -> Result<i32, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO todos (title, description, completed) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(&todo.title)
        .bind(&todo.description)
        .bind(todo.completed)
        .fetch_one(&self.pool)
        .await
    }

    async fn find(&self, id: i32) -> Result<Option<Todo>, sqlx::Error> {
        sqlx::query_as::<_, Todo>("SELECT id, title, description, completed FROM todos WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn update(&self, id: i32, todo: &NewTodo) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE todos SET title = ?, description = ?, completed = ? WHERE id = ?")
            .bind(&todo.title)
            .bind(&todo.description)
            .bind(todo.completed)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
