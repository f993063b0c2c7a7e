use std::time::Duration;

use axum::{
    Json, Router,
    http::{HeaderName, Method, Request, Response, StatusCode, Uri, header},
    routing::get,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{config::AppConfig, state::AppState};

pub mod auth;
pub mod cart;
pub mod debug;
pub mod doc;
pub mod favorites;
pub mod health;
pub mod info;
pub mod products;
pub mod users;

const REQUEST_ID_HEADER: &str = "x-request-id";
const MAX_BODY_BYTES: usize = 1024 * 1024;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router(debug_routes: bool) -> Router<AppState> {
    let router = Router::new()
        .route("/", get(info::api_info))
        .merge(auth::router())
        .nest("/products", products::router())
        .nest("/cart", cart::router())
        .nest("/favorites", favorites::router())
        .nest("/user", users::router());

    if debug_routes {
        router.nest("/debug", debug::router())
    } else {
        router
    }
}

/// Any origin, the four verbs the storefront uses, and preflight handling.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

pub fn create_app(state: AppState, config: &AppConfig) -> Router {
    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<_>| {
            let request_id = request
                .headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|value| value.to_str().ok())
                .unwrap_or("-");
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = %request_id
            )
        })
        .on_request(|_request: &Request<_>, _span: &tracing::Span| {
            tracing::info!("request started");
        })
        .on_response(|response: &Response<_>, latency: Duration, _span: &tracing::Span| {
            tracing::info!(
                status = %response.status(),
                ms = %latency.as_millis(),
                "request finished"
            );
        });

    Router::new()
        .route("/test", get(health::database_check))
        .nest("/api", create_api_router(config.debug_routes))
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(
                    request_id_header.clone(),
                    MakeRequestUuid,
                ))
                .layer(trace_layer)
                .layer(PropagateRequestIdLayer::new(request_id_header))
                .layer(cors_layer()),
        )
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .with_state(state)
}

#[derive(Serialize)]
struct NotFoundBody {
    error: String,
    path: String,
}

async fn not_found(uri: Uri) -> (StatusCode, Json<NotFoundBody>) {
    let body = NotFoundBody {
        error: "Not Found".to_string(),
        path: uri.path().to_string(),
    };
    (StatusCode::NOT_FOUND, Json(body))
}
