use axum::{Json, extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{services::health_service, state::AppState};

#[derive(Debug, Serialize, ToSchema)]
pub struct DatabaseCheck {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[utoipa::path(
    get,
    path = "/test",
    responses(
        (status = 200, description = "Server and database are up", body = DatabaseCheck),
        (status = 500, description = "Database unreachable", body = DatabaseCheck),
    ),
    tag = "Health"
)]
pub async fn database_check(State(state): State<AppState>) -> (StatusCode, Json<DatabaseCheck>) {
    match health_service::database_time(&state.orm).await {
        Ok(time) => (
            StatusCode::OK,
            Json(DatabaseCheck {
                status: "Server and database are up".to_string(),
                time: Some(time),
                error: None,
            }),
        ),
        Err(err) => {
            tracing::error!(error = %err, "database check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(DatabaseCheck {
                    status: "Database error".to_string(),
                    time: None,
                    error: Some(err.to_string()),
                }),
            )
        }
    }
}
