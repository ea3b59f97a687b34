//! Axum HTTP handlers for the demo endpoints.
//!
//! Each handler echoes validated request inputs back as JSON. Inputs that
//! fail coercion are rejected with a structured error before any handler
//! logic runs; none of the handlers perform I/O or keep state.

use axum::{
    body::Bytes,
    extract::{Path, Query},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::domain::fixtures::{self, FakeItem};
use crate::domain::item;
use crate::domain::model_name::ModelName;
use crate::domain::params;
use crate::errors::AppError;

const LONG_DESCRIPTION: &str = "This is an amazing item that has a long description";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user_id: String,
}

#[derive(Debug, Serialize)]
pub struct RouteCatalog {
    pub name: &'static str,
    pub version: &'static str,
    pub routes: &'static [RouteEntry],
}

#[derive(Debug, Serialize)]
pub struct RouteEntry {
    pub method: &'static str,
    pub path: &'static str,
}

/// Kept in step with the route table in `build_app`.
static ROUTE_CATALOG: [RouteEntry; 12] = [
    RouteEntry { method: "GET", path: "/" },
    RouteEntry { method: "POST", path: "/items/" },
    RouteEntry { method: "GET", path: "/items/{item_id}" },
    RouteEntry { method: "PUT", path: "/items/{item_id}" },
    RouteEntry { method: "GET", path: "/name/" },
    RouteEntry { method: "GET", path: "/users/me" },
    RouteEntry { method: "GET", path: "/users/{user_id}" },
    RouteEntry { method: "GET", path: "/users/{user_id}/items/{item_id}" },
    RouteEntry { method: "GET", path: "/model/{model_name}" },
    RouteEntry { method: "GET", path: "/files/{*file_path}" },
    RouteEntry { method: "GET", path: "/health" },
    RouteEntry { method: "GET", path: "/docs" },
];

#[derive(Debug, Deserialize)]
pub struct TextQuery {
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub start_index: Option<String>,
    pub count: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UserItemQuery {
    pub q: Option<String>,
    pub short: Option<String>,
}

pub async fn read_root() -> Json<Value> {
    Json(json!({ "Hello": "World" }))
}

pub async fn read_item(
    Path(item_id): Path<String>,
    Query(query): Query<TextQuery>,
) -> Result<Json<Value>, AppError> {
    let item_id = params::int_segment("item_id", &item_id)?;
    Ok(Json(json!({ "item_id": item_id, "q": query.q })))
}

pub async fn create_item(body: Bytes) -> Result<Json<Value>, AppError> {
    let item = item::parse_item(&body)?;
    let mut payload = item::to_object(&item)?;
    if let Some(total) = item.price_with_tax() {
        payload.insert("price_with_tax".to_string(), json!(total));
    }
    Ok(Json(Value::Object(payload)))
}

pub async fn replace_item(
    Path(item_id): Path<String>,
    Query(query): Query<TextQuery>,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    let item_id = params::int_segment("item_id", &item_id)?;
    let item = item::parse_item(&body)?;

    let mut payload = item::to_object(&item)?;
    payload.insert("item_id".to_string(), json!(item_id));
    if let Some(q) = params::non_empty(query.q) {
        payload.insert("q".to_string(), json!(q));
    }
    Ok(Json(Value::Object(payload)))
}

pub async fn list_item_names(
    Query(query): Query<PageQuery>,
) -> Result<Json<&'static [FakeItem]>, AppError> {
    let start_index = params::index_param("start_index", query.start_index.as_deref(), 0)?;
    let count = params::index_param("count", query.count.as_deref(), 10)?;
    Ok(Json(fixtures::page(start_index, count)))
}

pub async fn read_current_user() -> Json<UserResponse> {
    Json(UserResponse {
        user_id: "the current user".to_string(),
    })
}

pub async fn read_user(Path(user_id): Path<String>) -> Json<UserResponse> {
    Json(UserResponse { user_id })
}

pub async fn read_user_item(
    Path((user_id, item_id)): Path<(String, String)>,
    Query(query): Query<UserItemQuery>,
) -> Result<Json<Value>, AppError> {
    let owner_id = params::int_segment("user_id", &user_id)?;

    let mut payload = Map::new();
    payload.insert("item_id".to_string(), json!(item_id));
    payload.insert("owner_id".to_string(), json!(owner_id));
    if let Some(q) = params::non_empty(query.q) {
        payload.insert("q".to_string(), json!(q));
    }
    if !params::truthy_flag(query.short.as_deref()) {
        payload.insert("description".to_string(), json!(LONG_DESCRIPTION));
    }
    Ok(Json(Value::Object(payload)))
}

pub async fn read_model(Path(model_name): Path<String>) -> Result<Json<Value>, AppError> {
    let model = ModelName::parse(&model_name)?;
    Ok(Json(json!({
        "model_name": model,
        "message": model.message()
    })))
}

pub async fn read_file(Path(file_path): Path<String>) -> Json<Value> {
    Json(json!({ "file_path": file_path }))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn route_docs() -> Json<RouteCatalog> {
    Json(RouteCatalog {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        routes: &ROUTE_CATALOG,
    })
}
