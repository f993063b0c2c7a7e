use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::FavoriteLine;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRequest {
    pub user_id: i32,
    pub product_id: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FavoriteList {
    pub favorites: Vec<FavoriteLine>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FavoriteCheck {
    #[serde(rename = "isFavorite")]
    pub is_favorite: bool,
}
