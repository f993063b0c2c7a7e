use serde::Serialize;
use utoipa::ToSchema;

/// Success envelope: `{"status": "success", "message"?: ..., ...data}`.
///
/// The payload's fields are flattened into the top-level object, so
/// `ApiResponse<ProductList>` serializes as `{status, count, products}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "success".to_string(),
            message: None,
            data,
        }
    }

    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            status: "success".to_string(),
            message: Some(message.into()),
            data,
        }
    }
}

/// Payload for responses that only carry a status and a message.
#[derive(Debug, Default, Serialize, ToSchema)]
pub struct Empty {}
