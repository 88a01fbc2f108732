use anyhow::{anyhow, Context, Result};
use axum::{
    body::Body,
    extract::{DefaultBodyLimit, Request},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{self, AllowOrigin, CorsLayer};

use crate::config::Config;
use crate::errors::ApiError;
use crate::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState, config: &Config) -> Result<Router> {
    let cors = cors_layer(&config.cors_origin)?;

    // Preflight requests are answered by the CORS layer; the outer middleware
    // makes every OPTIONS /analyze reply a 204.
    let analyze = Router::new()
        .route(
            "/analyze",
            post(handlers::analyze_message).options(handlers::analyze_preflight),
        )
        .layer(cors.clone())
        .layer(middleware::from_fn(options_no_content));

    let app = Router::new()
        .route("/", get(handlers::home))
        .route(
            "/upload",
            post(handlers::upload_file).layer(DefaultBodyLimit::max(config.max_upload_bytes)),
        )
        .layer(cors)
        .merge(analyze)
        .layer(CatchPanicLayer::custom(panic_response))
        .with_state(state);

    Ok(app)
}

fn cors_layer(origin: &str) -> Result<CorsLayer> {
    let origin = HeaderValue::from_str(origin)
        .with_context(|| format!("CORS_ORIGIN is not a valid origin: '{origin}'"))?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_methods(cors::Any)
        .allow_headers(cors::Any))
}

async fn options_no_content(request: Request, next: Next) -> Response {
    let is_options = request.method() == Method::OPTIONS;
    let response = next.run(request).await;
    if !is_options {
        return response;
    }

    let (mut parts, _) = response.into_parts();
    parts.status = StatusCode::NO_CONTENT;
    parts.headers.remove(header::CONTENT_LENGTH);
    parts.headers.remove(header::CONTENT_TYPE);
    Response::from_parts(parts, Body::empty())
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "request handler panicked".to_string()
    };

    ApiError::Internal(anyhow!(detail)).into_response()
}
