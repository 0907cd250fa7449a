pub mod postgres;
pub mod repository;
pub mod sqlite;

pub use postgres::PgTodoRepository;
pub use repository::TodoRepository;
pub use sqlite::SqliteTodoRepository;

use std::sync::Arc;

/// Opens the repository matching the scheme of `database_url`.
///
/// `sqlite:` URLs open an embedded store; anything else is handed to the Postgres driver.
pub async fn connect(
    database_url: &str,
    max_connections: u32,
) -> Result<Arc<dyn TodoRepository>, sqlx::Error> {
    if database_url.starts_with("sqlite:") {
        let repo = SqliteTodoRepository::connect(database_url, max_connections).await?;
        Ok(Arc::new(repo))
    } else {
        let repo = PgTodoRepository::connect(database_url, max_connections).await?;
        Ok(Arc::new(repo))
    }
}
