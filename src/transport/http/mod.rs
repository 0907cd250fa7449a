pub mod request_log;
pub mod router;
pub mod types;
pub mod handlers {
    pub mod health;
    pub mod todos;
}

pub use router::{create_router, with_frontend, ApiDoc};
pub use types::AppState;
