use crate::{
    db::{self, OrmConn},
    dto::products::{ProductDetail, ProductList},
    error::{AppError, AppResult},
    models::Product,
    response::ApiResponse,
};

pub const LIST_PRODUCTS: &str = "SELECT * FROM products ORDER BY id";
pub const GET_PRODUCT: &str = "SELECT * FROM products WHERE id = $1";

pub async fn list_products(conn: &OrmConn) -> AppResult<ApiResponse<ProductList>> {
    let products: Vec<Product> = db::fetch_all(conn, LIST_PRODUCTS, vec![]).await?;
    let data = ProductList {
        count: products.len(),
        products,
    };
    Ok(ApiResponse::success(data))
}

pub async fn get_product(conn: &OrmConn, id: i32) -> AppResult<ApiResponse<ProductDetail>> {
    let product: Option<Product> = db::fetch_optional(conn, GET_PRODUCT, vec![id.into()]).await?;
    let product = match product {
        Some(p) => p,
        None => return Err(AppError::NotFound("Product not found".into())),
    };
    Ok(ApiResponse::success(ProductDetail { product }))
}
