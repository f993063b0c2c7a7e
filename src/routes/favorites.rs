use axum::{
    Json, Router,
    extract::State,
    routing::{delete, get, post},
};

use crate::{
    dto::favorites::{FavoriteCheck, FavoriteList, FavoriteRequest},
    error::{AppResult, ErrorBody},
    extract::{AppJson, AppPath},
    response::{ApiResponse, Empty},
    services::favorite_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/add", post(add_favorite))
        .route("/remove", delete(remove_favorite))
        .route("/check/{user_id}/{product_id}", get(check_favorite))
        .route("/{user_id}", get(list_favorites))
}

#[utoipa::path(
    get,
    path = "/api/favorites/{user_id}",
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Favorites joined with product data", body = ApiResponse<FavoriteList>),
        (status = 500, description = "Store error", body = ErrorBody)
    ),
    tag = "Favorites"
)]
pub async fn list_favorites(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<i32>,
) -> AppResult<Json<ApiResponse<FavoriteList>>> {
    let resp = favorite_service::list_favorites(&state.orm, user_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/favorites/add",
    request_body = FavoriteRequest,
    responses(
        (status = 200, description = "Added, or already present", body = ApiResponse<Empty>),
        (status = 500, description = "Store error", body = ErrorBody)
    ),
    tag = "Favorites"
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    AppJson(payload): AppJson<FavoriteRequest>,
) -> AppResult<Json<ApiResponse<Empty>>> {
    let resp = favorite_service::add_favorite(&state.orm, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/favorites/remove",
    request_body = FavoriteRequest,
    responses(
        (status = 200, description = "Removed (no-op when absent)", body = ApiResponse<Empty>),
        (status = 500, description = "Store error", body = ErrorBody)
    ),
    tag = "Favorites"
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    AppJson(payload): AppJson<FavoriteRequest>,
) -> AppResult<Json<ApiResponse<Empty>>> {
    let resp = favorite_service::remove_favorite(&state.orm, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/favorites/check/{user_id}/{product_id}",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("product_id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Whether the product is a favorite", body = ApiResponse<FavoriteCheck>),
        (status = 500, description = "Store error", body = ErrorBody)
    ),
    tag = "Favorites"
)]
pub async fn check_favorite(
    State(state): State<AppState>,
    AppPath((user_id, product_id)): AppPath<(i32, i32)>,
) -> AppResult<Json<ApiResponse<FavoriteCheck>>> {
    let resp = favorite_service::check_favorite(&state.orm, user_id, product_id).await?;
    Ok(Json(resp))
}
