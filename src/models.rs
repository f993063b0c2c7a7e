use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromQueryResult, ToSchema)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: Decimal,
    pub main_image: Option<String>,
    pub image_urls: Vec<String>,
    pub memory_options: Vec<String>,
    pub color_options: Vec<String>,
    pub description: Vec<String>,
    pub delivery: Vec<String>,
    pub bonus: Option<String>,
    pub category: String,
}

/// A cart row joined with the product fields the storefront renders.
#[derive(Debug, Clone, Serialize, FromQueryResult, ToSchema)]
pub struct CartLine {
    pub id: i32,
    pub user_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub selected_memory: String,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub price: Decimal,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, FromQueryResult, ToSchema)]
pub struct CartItem {
    pub id: i32,
    pub user_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub selected_memory: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, FromQueryResult, ToSchema)]
pub struct FavoriteLine {
    pub id: i32,
    pub user_id: i32,
    pub product_id: i32,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub price: Decimal,
    pub image_url: Option<String>,
}

/// The public columns of a user; never includes the password hash.
#[derive(Debug, Clone, Serialize, FromQueryResult, ToSchema)]
pub struct UserProfile {
    pub id: i32,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub newsletter: bool,
}

#[derive(Debug, Clone, Serialize, FromQueryResult, ToSchema)]
pub struct UserSummary {
    pub id: i32,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Row used only while checking a login attempt.
#[derive(Debug, FromQueryResult)]
pub struct UserCredentials {
    pub id: i32,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password_hash: String,
}

impl From<UserCredentials> for UserSummary {
    fn from(row: UserCredentials) -> Self {
        Self {
            id: row.id,
            email: row.email,
            first_name: row.first_name,
            last_name: row.last_name,
        }
    }
}
