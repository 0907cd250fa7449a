pub mod app;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::todo_service::TodoService;
pub use domain::todo::{NewTodo, Todo};
pub use error::TodoError;
