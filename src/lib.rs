use axum::{
    middleware,
    routing::{get, post},
    Router,
};

pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod logging;

pub fn build_app() -> Router {
    Router::new()
        .route("/", get(http::handlers::read_root))
        .route("/items/", post(http::handlers::create_item))
        .route(
            "/items/{item_id}",
            get(http::handlers::read_item).put(http::handlers::replace_item),
        )
        .route("/name/", get(http::handlers::list_item_names))
        // literal route first so `me` is never captured as a user id
        .route("/users/me", get(http::handlers::read_current_user))
        .route("/users/{user_id}", get(http::handlers::read_user))
        .route(
            "/users/{user_id}/items/{item_id}",
            get(http::handlers::read_user_item),
        )
        .route("/model/{model_name}", get(http::handlers::read_model))
        .route("/files/{*file_path}", get(http::handlers::read_file))
        .route("/health", get(http::handlers::health))
        .route("/docs", get(http::handlers::route_docs))
        .layer(middleware::from_fn(logging::request_logging_middleware))
}
