use crate::domain::todo::{NewTodo, Todo};
use crate::transport::http::handlers::{health, todos};
use crate::transport::http::request_log::log_request;
use crate::transport::http::types::{AppState, ErrorBody, HealthBody, MessageBody};
use axum::middleware;
use axum::routing::get;
use axum::{Json, Router};
use std::path::Path;
use tower_http::services::ServeDir;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        todos::list_todos_handler,
        todos::create_todo_handler,
        todos::get_todo_handler,
        todos::update_todo_handler,
        todos::delete_todo_handler
    ),
    components(schemas(Todo, NewTodo, ErrorBody, MessageBody, HealthBody))
)]
pub struct ApiDoc;

async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health::healthcheck_handler))
        .route(
            "/todos",
            get(todos::list_todos_handler).post(todos::create_todo_handler),
        )
        .route(
            "/todos/:id",
            get(todos::get_todo_handler)
                .put(todos::update_todo_handler)
                .delete(todos::delete_todo_handler),
        )
        .route("/api-docs/openapi.json", get(openapi_handler))
        .layer(middleware::from_fn(log_request))
        .with_state(app_state)
}

/// Mounts a static directory under `/frontend`. It shares nothing with the API routes.
pub fn with_frontend(router: Router, frontend_dir: impl AsRef<Path>) -> Router {
    router.nest_service("/frontend", ServeDir::new(frontend_dir.as_ref()))
}
