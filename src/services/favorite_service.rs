use sea_orm::FromQueryResult;

use crate::{
    db::{self, OrmConn},
    dto::favorites::{FavoriteCheck, FavoriteList, FavoriteRequest},
    error::AppResult,
    models::FavoriteLine,
    response::{ApiResponse, Empty},
};

pub const LIST_FAVORITES: &str = r#"
    SELECT f.id, f.user_id, f.product_id, f.created_at,
           p.name, p.price, p.main_image AS image_url
    FROM favorites f
    JOIN products p ON p.id = f.product_id
    WHERE f.user_id = $1
    ORDER BY f.id
"#;

pub const INSERT_FAVORITE: &str = r#"
    INSERT INTO favorites (user_id, product_id)
    VALUES ($1, $2)
    ON CONFLICT (user_id, product_id) DO NOTHING
"#;

pub const DELETE_FAVORITE: &str =
    "DELETE FROM favorites WHERE user_id = $1 AND product_id = $2";

pub const FAVORITE_EXISTS: &str = r#"
    SELECT EXISTS (
        SELECT 1 FROM favorites WHERE user_id = $1 AND product_id = $2
    ) AS is_favorite
"#;

#[derive(FromQueryResult)]
struct ExistsRow {
    is_favorite: bool,
}

pub async fn list_favorites(
    conn: &OrmConn,
    user_id: i32,
) -> AppResult<ApiResponse<FavoriteList>> {
    let favorites: Vec<FavoriteLine> =
        db::fetch_all(conn, LIST_FAVORITES, vec![user_id.into()]).await?;
    Ok(ApiResponse::success(FavoriteList { favorites }))
}

/// Adding an existing favorite is a successful no-op.
pub async fn add_favorite(
    conn: &OrmConn,
    payload: FavoriteRequest,
) -> AppResult<ApiResponse<Empty>> {
    let inserted = db::execute(
        conn,
        INSERT_FAVORITE,
        vec![payload.user_id.into(), payload.product_id.into()],
    )
    .await?;

    let message = if inserted == 0 {
        "Item already in favorites"
    } else {
        tracing::debug!(
            user_id = payload.user_id,
            product_id = payload.product_id,
            "favorite added"
        );
        "Item added to favorites"
    };

    Ok(ApiResponse::with_message(message, Empty {}))
}

pub async fn remove_favorite(
    conn: &OrmConn,
    payload: FavoriteRequest,
) -> AppResult<ApiResponse<Empty>> {
    let removed = db::execute(
        conn,
        DELETE_FAVORITE,
        vec![payload.user_id.into(), payload.product_id.into()],
    )
    .await?;
    tracing::debug!(
        user_id = payload.user_id,
        product_id = payload.product_id,
        removed,
        "favorite removed"
    );

    Ok(ApiResponse::with_message("Item removed from favorites", Empty {}))
}

pub async fn check_favorite(
    conn: &OrmConn,
    user_id: i32,
    product_id: i32,
) -> AppResult<ApiResponse<FavoriteCheck>> {
    let row: ExistsRow =
        db::fetch_one(conn, FAVORITE_EXISTS, vec![user_id.into(), product_id.into()]).await?;
    Ok(ApiResponse::success(FavoriteCheck {
        is_favorite: row.is_favorite,
    }))
}
