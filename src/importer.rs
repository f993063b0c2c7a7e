//! Repopulates `products` from the static catalogue file.

use rust_decimal::Decimal;
use sea_orm::ConnectionTrait;
use serde::Deserialize;

use crate::{catalog::classify, db, error::AppResult};

pub const CLEAR_PRODUCTS: &str = "DELETE FROM products";

pub const INSERT_PRODUCT: &str = r#"
    INSERT INTO products (
        id, name, price, main_image, image_urls,
        memory_options, color_options, description,
        delivery, bonus, category
    ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
"#;

/// One entry of the catalogue file. List fields may be omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductSeed {
    pub id: i32,
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub main_image: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub memory_options: Vec<String>,
    #[serde(default)]
    pub color_options: Vec<String>,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub delivery: Vec<String>,
    #[serde(default)]
    pub bonus: Option<String>,
}

pub fn parse_catalogue(json: &str) -> serde_json::Result<Vec<ProductSeed>> {
    serde_json::from_str(json)
}

/// Deletes every product, then inserts `products` one by one.
///
/// There is no transaction: if insert N fails, the table keeps the N-1 rows
/// already written and the error is returned.
pub async fn import_products<C: ConnectionTrait>(
    conn: &C,
    products: &[ProductSeed],
) -> AppResult<usize> {
    tracing::info!(total = products.len(), "starting product import");

    let cleared = db::execute(conn, CLEAR_PRODUCTS, vec![]).await?;
    tracing::info!(cleared, "products table cleared");

    for product in products {
        let category = classify(i64::from(product.id));
        db::execute(
            conn,
            INSERT_PRODUCT,
            vec![
                product.id.into(),
                product.name.clone().into(),
                product.price.into(),
                product.main_image.clone().into(),
                product.images.clone().into(),
                product.memory_options.clone().into(),
                product.color_options.clone().into(),
                product.description.clone().into(),
                product.delivery.clone().into(),
                product.bonus.clone().into(),
                category.as_str().into(),
            ],
        )
        .await?;
        tracing::info!(id = product.id, name = %product.name, %category, "product imported");
    }

    tracing::info!(count = products.len(), "product import finished");
    Ok(products.len())
}
