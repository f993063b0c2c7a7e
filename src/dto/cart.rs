use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::CartLine;

fn default_quantity() -> i32 {
    1
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub user_id: i32,
    pub product_id: i32,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
    #[serde(default)]
    pub selected_memory: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCartRequest {
    pub user_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    #[serde(default)]
    pub selected_memory: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFromCartRequest {
    pub user_id: i32,
    pub product_id: i32,
    #[serde(default)]
    pub selected_memory: Option<String>,
}

/// A missing or null memory option is stored as the empty string so it can
/// take part in the cart's unique key.
pub fn memory_key(selected_memory: Option<String>) -> String {
    selected_memory.unwrap_or_default()
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartContents {
    pub cart: Vec<CartLine>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_defaults_quantity_and_memory() {
        let req: AddToCartRequest =
            serde_json::from_str(r#"{"userId": 1, "productId": 5}"#).unwrap();
        assert_eq!(req.quantity, 1);
        assert_eq!(memory_key(req.selected_memory), "");
    }

    #[test]
    fn null_memory_is_normalized() {
        let req: RemoveFromCartRequest =
            serde_json::from_str(r#"{"userId": 1, "productId": 5, "selectedMemory": null}"#)
                .unwrap();
        assert_eq!(memory_key(req.selected_memory), "");
    }

    #[test]
    fn explicit_memory_is_kept() {
        let req: UpdateCartRequest = serde_json::from_str(
            r#"{"userId": 1, "productId": 5, "quantity": 3, "selectedMemory": "256GB"}"#,
        )
        .unwrap();
        assert_eq!(req.quantity, 3);
        assert_eq!(memory_key(req.selected_memory), "256GB");
    }
}
