use crate::domain::todo::{NewTodo, Todo};
use crate::error::TodoError;
use crate::transport::http::types::{invalid_body, AppState, ErrorBody, MessageBody};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

#[utoipa::path(
    get,
    path = "/todos",
    responses(
        (status = 200, description = "All todo items, in store order", body = [Todo]),
        (status = 500, description = "Store error", body = ErrorBody)
    )
)]
pub async fn list_todos_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Todo>>, TodoError> {
    let todos = state.todo_service.list().await?;
    Ok(Json(todos))
}

#[utoipa::path(
    post,
    path = "/todos",
    request_body = NewTodo,
    responses(
        (status = 201, description = "Todo created", body = Todo),
        (status = 400, description = "Invalid JSON body", body = ErrorBody),
        (status = 500, description = "Store error", body = ErrorBody)
    )
)]
pub async fn create_todo_handler(
    State(state): State<AppState>,
    request: Result<Json<NewTodo>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), TodoError> {
    let Json(new_todo) = request.map_err(invalid_body)?;
    let todo = state.todo_service.create(new_todo).await?;
    log::debug!("created todo {}", todo.id);
    Ok((StatusCode::CREATED, Json(todo)))
}

#[utoipa::path(
    get,
    path = "/todos/{id}",
    params(
        ("id" = String, Path, description = "Todo id")
    ),
    responses(
        (status = 200, description = "Todo found", body = Todo),
        (status = 404, description = "Todo not found", body = ErrorBody),
        (status = 500, description = "Store error", body = ErrorBody)
    )
)]
pub async fn get_todo_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, TodoError> {
    let todo = state.todo_service.get(&id).await?;
    Ok(Json(todo))
}

/// Replaces the todo's fields. Reports success even when no todo has this id.
#[utoipa::path(
    put,
    path = "/todos/{id}",
    params(
        ("id" = String, Path, description = "Todo id")
    ),
    request_body = NewTodo,
    responses(
        (status = 200, description = "Update statement executed", body = MessageBody),
        (status = 400, description = "Invalid JSON body", body = ErrorBody),
        (status = 500, description = "Store error", body = ErrorBody)
    )
)]
pub async fn update_todo_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Result<Json<NewTodo>, JsonRejection>,
) -> Result<Json<MessageBody>, TodoError> {
    let Json(todo) = request.map_err(invalid_body)?;
    state.todo_service.update(&id, todo).await?;
    Ok(Json(MessageBody::new("Todo updated")))
}

/// Deletes the todo. Reports success even when no todo has this id.
#[utoipa::path(
    delete,
    path = "/todos/{id}",
    params(
        ("id" = String, Path, description = "Todo id")
    ),
    responses(
        (status = 200, description = "Delete statement executed", body = MessageBody),
        (status = 500, description = "Store error", body = ErrorBody)
    )
)]
pub async fn delete_todo_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, TodoError> {
    state.todo_service.delete(&id).await?;
    Ok(Json(MessageBody::new("Todo deleted")))
}
