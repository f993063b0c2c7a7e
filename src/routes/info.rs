use std::collections::BTreeMap;

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiInfo {
    pub message: String,
    pub version: String,
    pub endpoints: BTreeMap<String, String>,
}

#[utoipa::path(
    get,
    path = "/api",
    responses(
        (status = 200, description = "Service banner and endpoint overview", body = ApiInfo),
    ),
    tag = "Health"
)]
pub async fn api_info() -> Json<ApiInfo> {
    let endpoints = [
        ("products", "GET /api/products"),
        ("product_by_id", "GET /api/products/{id}"),
        ("register", "POST /api/register"),
        ("login", "POST /api/login"),
        ("cart", "GET /api/cart/{userId}"),
        ("favorites", "GET /api/favorites/{userId}"),
        ("profile", "GET /api/user/profile?userId="),
        ("docs", "GET /docs"),
    ]
    .into_iter()
    .map(|(name, route)| (name.to_string(), route.to_string()))
    .collect();

    Json(ApiInfo {
        message: "Storefront backend is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints,
    })
}
