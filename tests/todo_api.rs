//! HTTP-level tests: the router is driven in-process against an in-memory SQLite store.

use axum::body::Body;
use axum::http::{self, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use todo_service::transport::http::{create_router, with_frontend, AppState};
use todo_service::{Todo, TodoService};
use tower::ServiceExt;

async fn test_app() -> Router {
    let todo_service = TodoService::connect("sqlite::memory:", 1).await.unwrap();
    create_router(AppState { todo_service })
}

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn create(app: &Router, body: &str) -> Todo {
    let resp = app
        .clone()
        .oneshot(json_request("POST", "/todos", body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    body_json(resp).await
}

// --- health ---

#[tokio::test]
async fn healthz_reports_ok() {
    let app = test_app().await;
    let resp = app.oneshot(empty_request("GET", "/healthz")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body, json!({ "status": "ok" }));
}

// --- list ---

#[tokio::test]
async fn list_todos_empty_is_an_array() {
    let app = test_app().await;
    let resp = app.oneshot(empty_request("GET", "/todos")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn list_todos_returns_created_items() {
    let app = test_app().await;
    let a = create(&app, r#"{"title":"A"}"#).await;
    let b = create(&app, r#"{"title":"B","description":"second","completed":true}"#).await;

    let resp = app.oneshot(empty_request("GET", "/todos")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let todos: Vec<Todo> = body_json(resp).await;
    assert_eq!(todos.len(), 2);
    assert!(todos.contains(&a));
    assert!(todos.contains(&b));
}

// --- create ---

#[tokio::test]
async fn create_todo_returns_201_with_id() {
    let app = test_app().await;
    let todo = create(
        &app,
        r#"{"title":"Test Todo","description":"This is a test todo","completed":false}"#,
    )
    .await;

    assert!(todo.id >= 0);
    assert_eq!(todo.title, "Test Todo");
    assert_eq!(todo.description, "This is a test todo");
    assert!(!todo.completed);
}

#[tokio::test]
async fn create_todo_defaults_description_and_completed() {
    let app = test_app().await;
    let todo = create(&app, r#"{"title":"Only a title"}"#).await;

    assert_eq!(todo.description, "");
    assert!(!todo.completed);
}

#[tokio::test]
async fn create_todo_accepts_null_description_and_completed() {
    let app = test_app().await;
    let todo = create(
        &app,
        r#"{"title":"x","description":null,"completed":null}"#,
    )
    .await;

    assert_eq!(todo.title, "x");
    assert_eq!(todo.description, "");
    assert!(!todo.completed);
}

#[tokio::test]
async fn create_todo_with_wrong_title_type_is_400() {
    let app = test_app().await;
    let resp = app
        .oneshot(json_request("POST", "/todos", r#"{"title": 123}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("title"));
}

#[tokio::test]
async fn create_todo_without_title_is_400() {
    let app = test_app().await;
    let resp = app
        .oneshot(json_request("POST", "/todos", r#"{"description":"no title"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_todo_with_malformed_json_is_400() {
    let app = test_app().await;
    let resp = app
        .oneshot(json_request("POST", "/todos", "{not json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = body_json(resp).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn create_todo_without_content_type_is_400() {
    let app = test_app().await;
    let req = Request::builder()
        .method("POST")
        .uri("/todos")
        .body(Body::from(r#"{"title":"x"}"#))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- get ---

#[tokio::test]
async fn get_todo_returns_created_item() {
    let app = test_app().await;
    let created = create(&app, r#"{"title":"Fetch me","description":"d"}"#).await;

    let resp = app
        .oneshot(empty_request("GET", &format!("/todos/{}", created.id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Todo = body_json(resp).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn get_missing_todo_is_404() {
    let app = test_app().await;
    let resp = app
        .oneshot(empty_request("GET", "/todos/999999"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = body_json(resp).await;
    assert_eq!(body, json!({ "error": "Todo not found" }));
}

#[tokio::test]
async fn get_with_non_numeric_id_is_404() {
    let app = test_app().await;
    let resp = app
        .oneshot(empty_request("GET", "/todos/abc"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- update ---

#[tokio::test]
async fn update_todo_replaces_all_fields() {
    let app = test_app().await;
    let created = create(&app, r#"{"title":"Test Todo","description":"old"}"#).await;

    let resp = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/todos/{}", created.id),
            r#"{"title":"Updated Todo","completed":true}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body, json!({ "message": "Todo updated" }));

    let resp = app
        .oneshot(empty_request("GET", &format!("/todos/{}", created.id)))
        .await
        .unwrap();
    let fetched: Todo = body_json(resp).await;
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.title, "Updated Todo");
    assert_eq!(fetched.description, "");
    assert!(fetched.completed);
}

#[tokio::test]
async fn update_ignores_id_in_body() {
    let app = test_app().await;
    let created = create(&app, r#"{"title":"Keep my id"}"#).await;

    let resp = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/todos/{}", created.id),
            r#"{"id":4242,"title":"Renamed"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .oneshot(empty_request("GET", &format!("/todos/{}", created.id)))
        .await
        .unwrap();
    let fetched: Todo = body_json(resp).await;
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.title, "Renamed");
}

#[tokio::test]
async fn update_missing_todo_still_reports_success() {
    let app = test_app().await;
    let resp = app
        .oneshot(json_request("PUT", "/todos/999999", r#"{"title":"ghost"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body, json!({ "message": "Todo updated" }));
}

#[tokio::test]
async fn update_with_invalid_body_is_400() {
    let app = test_app().await;
    let created = create(&app, r#"{"title":"x"}"#).await;

    let resp = app
        .oneshot(json_request(
            "PUT",
            &format!("/todos/{}", created.id),
            r#"{"title":"x","completed":"yes"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- delete ---

#[tokio::test]
async fn delete_todo_then_get_is_404() {
    let app = test_app().await;
    let created = create(&app, r#"{"title":"Delete me"}"#).await;

    let resp = app
        .clone()
        .oneshot(empty_request("DELETE", &format!("/todos/{}", created.id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body, json!({ "message": "Todo deleted" }));

    let resp = app
        .oneshot(empty_request("GET", &format!("/todos/{}", created.id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_missing_todo_still_reports_success() {
    let app = test_app().await;
    let resp = app
        .oneshot(empty_request("DELETE", "/todos/999999"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body, json!({ "message": "Todo deleted" }));
}

// --- full lifecycle ---

#[tokio::test]
async fn buy_milk_lifecycle() {
    let app = test_app().await;
    let created = create(
        &app,
        r#"{"title":"Buy milk","description":"2%","completed":false}"#,
    )
    .await;
    let item_uri = format!("/todos/{}", created.id);

    let resp = app
        .clone()
        .oneshot(empty_request("GET", &item_uri))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Todo = body_json(resp).await;
    assert_eq!(fetched.title, "Buy milk");
    assert_eq!(fetched.description, "2%");
    assert!(!fetched.completed);

    let resp = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &item_uri,
            r#"{"title":"Buy milk","description":"2%","completed":true}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .clone()
        .oneshot(empty_request("DELETE", &item_uri))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app.oneshot(empty_request("GET", &item_uri)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- openapi ---

#[tokio::test]
async fn openapi_document_lists_todo_paths() {
    let app = test_app().await;
    let resp = app
        .oneshot(empty_request("GET", "/api-docs/openapi.json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let doc: Value = body_json(resp).await;
    assert!(doc["paths"]["/todos"].is_object());
    assert!(doc["paths"]["/todos/{id}"].is_object());
    assert!(doc["paths"]["/healthz"].is_object());
}

// --- static front-end ---

#[tokio::test]
async fn frontend_directory_is_served_separately() {
    let dir = std::env::temp_dir().join(format!("todo-frontend-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("index.html"), "<h1>todos</h1>").unwrap();

    let app = with_frontend(test_app().await, &dir);
    let resp = app
        .clone()
        .oneshot(empty_request("GET", "/frontend/index.html"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"<h1>todos</h1>");

    // The API is unaffected by the mount.
    let resp = app.oneshot(empty_request("GET", "/todos")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let _ = std::fs::remove_dir_all(&dir);
}
