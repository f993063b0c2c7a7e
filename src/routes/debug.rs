use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    diagnostics::{self, UserBrief},
    error::{AppResult, ErrorBody},
    models::CartItem,
    state::AppState,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct CartDebug {
    pub status: String,
    pub cart: Vec<CartItem>,
    pub users: Vec<UserBrief>,
    pub message: String,
}

/// Mounted only when `DEBUG_ROUTES` is enabled.
pub fn router() -> Router<AppState> {
    Router::new().route("/cart", get(cart_debug))
}

#[utoipa::path(
    get,
    path = "/api/debug/cart",
    responses(
        (status = 200, description = "Every cart row and a summary of every user", body = CartDebug),
        (status = 500, description = "Store error", body = ErrorBody)
    ),
    tag = "Debug"
)]
pub async fn cart_debug(State(state): State<AppState>) -> AppResult<Json<CartDebug>> {
    let cart = diagnostics::dump_cart(state.orm.as_ref()).await?;
    let users = diagnostics::user_summaries(state.orm.as_ref()).await?;
    tracing::debug!(cart = cart.len(), users = users.len(), "debug cart dump");

    Ok(Json(CartDebug {
        status: "debug".to_string(),
        cart,
        users,
        message: "Cart debug information".to_string(),
    }))
}
