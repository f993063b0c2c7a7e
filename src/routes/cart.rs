use axum::{
    Json, Router,
    extract::State,
    routing::{delete, get, post, put},
};

use crate::{
    dto::cart::{AddToCartRequest, CartContents, RemoveFromCartRequest, UpdateCartRequest},
    error::{AppResult, ErrorBody},
    extract::{AppJson, AppPath},
    response::{ApiResponse, Empty},
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/add", post(add_to_cart))
        .route("/update", put(update_cart))
        .route("/remove", delete(remove_from_cart))
        .route("/{user_id}", get(cart_list))
}

#[utoipa::path(
    get,
    path = "/api/cart/{user_id}",
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Cart lines joined with product data", body = ApiResponse<CartContents>),
        (status = 500, description = "Store error", body = ErrorBody)
    ),
    tag = "Cart"
)]
pub async fn cart_list(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<i32>,
) -> AppResult<Json<ApiResponse<CartContents>>> {
    let resp = cart_service::list_cart(&state.orm, user_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/cart/add",
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Item added, or its quantity increased", body = ApiResponse<Empty>),
        (status = 500, description = "Store error", body = ErrorBody)
    ),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    AppJson(payload): AppJson<AddToCartRequest>,
) -> AppResult<Json<ApiResponse<Empty>>> {
    let resp = cart_service::add_to_cart(&state.orm, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/cart/update",
    request_body = UpdateCartRequest,
    responses(
        (status = 200, description = "Quantity set, or line removed when quantity <= 0", body = ApiResponse<Empty>),
        (status = 500, description = "Store error", body = ErrorBody)
    ),
    tag = "Cart"
)]
pub async fn update_cart(
    State(state): State<AppState>,
    AppJson(payload): AppJson<UpdateCartRequest>,
) -> AppResult<Json<ApiResponse<Empty>>> {
    let resp = cart_service::update_cart(&state.orm, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/cart/remove",
    request_body = RemoveFromCartRequest,
    responses(
        (status = 200, description = "Line removed (no-op when absent)", body = ApiResponse<Empty>),
        (status = 500, description = "Store error", body = ErrorBody)
    ),
    tag = "Cart"
)]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RemoveFromCartRequest>,
) -> AppResult<Json<ApiResponse<Empty>>> {
    let resp = cart_service::remove_from_cart(&state.orm, payload).await?;
    Ok(Json(resp))
}
