use axum::{
    Json, Router,
    extract::State,
    routing::get,
};

use crate::{
    dto::users::{ProfileQuery, ProfileResponse},
    error::{AppResult, ErrorBody},
    extract::AppQuery,
    response::ApiResponse,
    services::user_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/profile", get(profile))
}

#[utoipa::path(
    get,
    path = "/api/user/profile",
    params(ProfileQuery),
    responses(
        (status = 200, description = "User profile", body = ApiResponse<ProfileResponse>),
        (status = 400, description = "Missing or invalid userId", body = ErrorBody),
        (status = 404, description = "User not found", body = ErrorBody)
    ),
    tag = "Users"
)]
pub async fn profile(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ProfileQuery>,
) -> AppResult<Json<ApiResponse<ProfileResponse>>> {
    let resp = user_service::get_profile(&state.orm, query.user_id.as_deref()).await?;
    Ok(Json(resp))
}
