//! Todo repository backed by PostgreSQL.

use crate::domain::todo::{NewTodo, Todo};
use crate::storage::todo::TodoRepository;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// A todo repository that uses a PostgreSQL connection pool.
#[derive(Clone)]
pub struct PgTodoRepository {
    pool: PgPool,
}

impl PgTodoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl TodoRepository for PgTodoRepository {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS todos (
                id SERIAL PRIMARY KEY,
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
            "INSERT INTO todos (title, description, completed) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&todo.title)
        .bind(&todo.description)
        .bind(todo.completed)
        .fetch_one(&self.pool)
        .await
    }

    async fn find(&self, id: i32) -> Result<Option<Todo>, sqlx::Error> {
        sqlx::query_as::<_, Todo>(
            "SELECT id, title, description, completed FROM todos WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn update(&self, id: i32, todo: &NewTodo) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE todos SET title = $1, description = $2, completed = $3 WHERE id = $4")
            .bind(&todo.title)
            .bind(&todo.description)
            .bind(todo.completed)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
