//! HTTP surface: route table, CORS policy, 404 fallback, and the thin
//! handlers that map service results onto response bodies.

use std::collections::HashMap;
use std::time::Instant;

use axum::extract::{Query, Request, State};
use axum::http::{HeaderName, HeaderValue, Method, StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tower_http::cors::{AllowOrigin, CorsLayer};

use aggra_core::{AppConfig, Error};

use crate::error::{error_body, message_body, message_info_body};
use crate::ops;
use crate::state::AppState;
use crate::validation;

/// Build the full application router.
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .route("/ping", get(ping))
        .route("/version", get(version))
        .route("/images", get(images))
        .route("/Nicholas", get(nicholas))
        .route("/Romaguera", get(romaguera))
        .route("/todo", post(create_todo))
        .route("/sorted-users", get(sorted_users))
        .route("/new-todos", get(new_todos))
        .fallback(fallback)
        .layer(cors)
        .layer(middleware::from_fn(log_responses))
        .with_state(state)
}

/// CORS policy: configured origins only, GET/POST, credentials allowed, and
/// the fixed header allow-list.
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_credentials(true)
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-requested-with"),
            HeaderName::from_static("device-remember-token"),
            HeaderName::from_static("access-control-allow-origin"),
            header::ORIGIN,
            header::ACCEPT,
        ])
}

/// Log method, path, status, and latency for every response.
async fn log_responses(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(req).await;

    tracing::debug!(
        %method,
        path,
        status = response.status().as_u16(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "request completed"
    );
    response
}

async fn ping() -> Json<Value> {
    Json(json!({ "message": "pong!" }))
}

async fn version() -> Json<Value> {
    Json(json!({ "message": format!("aggra version {}", env!("CARGO_PKG_VERSION")) }))
}

async fn images(State(state): State<AppState>, Query(query): Query<HashMap<String, String>>) -> Response {
    let params = match validation::validate_pagination(&query) {
        Ok(params) => params,
        Err(details) => {
            return error_body(&Error::Validation { info: details.join(",") });
        }
    };

    match ops::images::page_impl(&state.cache, state.upstream.as_ref(), state.config.cache_ttl(), params).await {
        Ok(page) => Json(page).into_response(),
        Err(err) => error_body(&err),
    }
}

async fn nicholas(State(state): State<AppState>) -> Response {
    let result = ops::user_posts::user_with_posts_impl(
        &state.cache,
        state.upstream.as_ref(),
        state.config.cache_ttl(),
        state.config.featured_user_id,
    )
    .await;

    match result {
        Ok(aggregate) => Json(aggregate).into_response(),
        Err(err) => message_body(&err),
    }
}

async fn romaguera(State(state): State<AppState>) -> Response {
    let result = ops::company_posts::company_posts_impl(
        &state.cache,
        state.upstream.as_ref(),
        state.config.cache_ttl(),
        &state.config.company_needle,
    )
    .await;

    match result {
        Ok(posts) => Json(posts).into_response(),
        Err(err) => message_body(&err),
    }
}

async fn create_todo(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    let draft = match validation::validate_todo(&body) {
        Ok(draft) => draft,
        Err(details) => {
            return message_info_body(&Error::Validation { info: details.join(",") });
        }
    };

    match ops::todos::create_todo_impl(&state.cache, state.upstream.as_ref(), &draft).await {
        Ok(todo) => (StatusCode::CREATED, Json(todo)).into_response(),
        Err(err) => message_info_body(&err),
    }
}

async fn sorted_users(State(state): State<AppState>) -> Response {
    let result = ops::sorted_users::sorted_users_impl(
        &state.cache,
        state.upstream.as_ref(),
        state.config.cache_ttl(),
        &state.config.excluded_domains,
    )
    .await;

    match result {
        Ok(users) => Json(users).into_response(),
        Err(err) => message_info_body(&err),
    }
}

async fn new_todos(State(state): State<AppState>) -> Json<Value> {
    Json(ops::todos::new_todos_impl(&state.cache))
}

/// Incorrect URLs land here.
async fn fallback() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "status": 404,
            "message": "Ohh you are lost, please check the URL/specification and try-again. :)"
        })),
    )
        .into_response()
}
