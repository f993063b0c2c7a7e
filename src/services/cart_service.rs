use crate::{
    db::{self, OrmConn},
    dto::cart::{
        AddToCartRequest, CartContents, RemoveFromCartRequest, UpdateCartRequest, memory_key,
    },
    error::AppResult,
    models::CartLine,
    response::{ApiResponse, Empty},
};

pub const LIST_CART: &str = r#"
    SELECT c.id, c.user_id, c.product_id, c.quantity, c.selected_memory, c.created_at,
           p.name, p.price, p.main_image AS image_url
    FROM cart c
    JOIN products p ON p.id = c.product_id
    WHERE c.user_id = $1
    ORDER BY c.id
"#;

/// Single-statement upsert: the unique (user, product, memory) key makes
/// concurrent adds collapse into one row whose quantity is the sum.
pub const UPSERT_CART_ITEM: &str = r#"
    INSERT INTO cart (user_id, product_id, quantity, selected_memory)
    VALUES ($1, $2, $3, $4)
    ON CONFLICT (user_id, product_id, selected_memory)
    DO UPDATE SET quantity = cart.quantity + EXCLUDED.quantity
"#;

pub const SET_CART_QUANTITY: &str = r#"
    UPDATE cart SET quantity = $1
    WHERE user_id = $2 AND product_id = $3 AND selected_memory = $4
"#;

pub const DELETE_CART_ITEM: &str = r#"
    DELETE FROM cart
    WHERE user_id = $1 AND product_id = $2 AND selected_memory = $3
"#;

pub async fn list_cart(conn: &OrmConn, user_id: i32) -> AppResult<ApiResponse<CartContents>> {
    let cart: Vec<CartLine> = db::fetch_all(conn, LIST_CART, vec![user_id.into()]).await?;
    tracing::debug!(user_id, items = cart.len(), "cart loaded");
    Ok(ApiResponse::success(CartContents { cart }))
}

pub async fn add_to_cart(
    conn: &OrmConn,
    payload: AddToCartRequest,
) -> AppResult<ApiResponse<Empty>> {
    let selected_memory = memory_key(payload.selected_memory);
    tracing::debug!(
        user_id = payload.user_id,
        product_id = payload.product_id,
        quantity = payload.quantity,
        %selected_memory,
        "adding to cart"
    );

    db::execute(
        conn,
        UPSERT_CART_ITEM,
        vec![
            payload.user_id.into(),
            payload.product_id.into(),
            payload.quantity.into(),
            selected_memory.into(),
        ],
    )
    .await?;

    Ok(ApiResponse::with_message("Item added to cart", Empty {}))
}

/// Sets the absolute quantity; zero or less removes the line instead.
pub async fn update_cart(
    conn: &OrmConn,
    payload: UpdateCartRequest,
) -> AppResult<ApiResponse<Empty>> {
    let selected_memory = memory_key(payload.selected_memory);

    if payload.quantity <= 0 {
        let removed = db::execute(
            conn,
            DELETE_CART_ITEM,
            vec![
                payload.user_id.into(),
                payload.product_id.into(),
                selected_memory.into(),
            ],
        )
        .await?;
        tracing::debug!(
            user_id = payload.user_id,
            product_id = payload.product_id,
            removed,
            "cart line removed"
        );
    } else {
        let updated = db::execute(
            conn,
            SET_CART_QUANTITY,
            vec![
                payload.quantity.into(),
                payload.user_id.into(),
                payload.product_id.into(),
                selected_memory.into(),
            ],
        )
        .await?;
        tracing::debug!(
            user_id = payload.user_id,
            product_id = payload.product_id,
            quantity = payload.quantity,
            updated,
            "cart quantity set"
        );
    }

    Ok(ApiResponse::with_message("Cart updated", Empty {}))
}

pub async fn remove_from_cart(
    conn: &OrmConn,
    payload: RemoveFromCartRequest,
) -> AppResult<ApiResponse<Empty>> {
    let removed = db::execute(
        conn,
        DELETE_CART_ITEM,
        vec![
            payload.user_id.into(),
            payload.product_id.into(),
            memory_key(payload.selected_memory).into(),
        ],
    )
    .await?;
    tracing::debug!(
        user_id = payload.user_id,
        product_id = payload.product_id,
        removed,
        "cart line removed"
    );

    Ok(ApiResponse::with_message("Item removed from cart", Empty {}))
}
