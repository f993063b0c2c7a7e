use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    diagnostics::UserBrief,
    dto::{
        auth::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, RegisteredUser},
        cart::{AddToCartRequest, CartContents, RemoveFromCartRequest, UpdateCartRequest},
        favorites::{FavoriteCheck, FavoriteList, FavoriteRequest},
        products::{ProductDetail, ProductList},
        users::ProfileResponse,
    },
    error::ErrorBody,
    models::{CartItem, CartLine, FavoriteLine, Product, UserProfile, UserSummary},
    response::{ApiResponse, Empty},
    routes::{auth, cart, debug, favorites, health, info, products, users},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::database_check,
        info::api_info,
        products::list_products,
        products::get_product,
        auth::register,
        auth::login,
        cart::cart_list,
        cart::add_to_cart,
        cart::update_cart,
        cart::remove_from_cart,
        favorites::list_favorites,
        favorites::add_favorite,
        favorites::remove_favorite,
        favorites::check_favorite,
        users::profile,
        debug::cart_debug
    ),
    components(
        schemas(
            Product,
            CartLine,
            CartItem,
            FavoriteLine,
            UserProfile,
            UserSummary,
            UserBrief,
            RegisteredUser,
            RegisterRequest,
            LoginRequest,
            RegisterResponse,
            LoginResponse,
            AddToCartRequest,
            UpdateCartRequest,
            RemoveFromCartRequest,
            CartContents,
            FavoriteRequest,
            FavoriteList,
            FavoriteCheck,
            ProductList,
            ProductDetail,
            ProfileResponse,
            Empty,
            ErrorBody,
            ApiResponse<ProductList>,
            ApiResponse<CartContents>,
            ApiResponse<FavoriteList>
        )
    ),
    tags(
        (name = "Health", description = "Liveness and service info"),
        (name = "Products", description = "Product catalogue"),
        (name = "Auth", description = "Registration and login"),
        (name = "Cart", description = "Shopping cart"),
        (name = "Favorites", description = "Favorites list"),
        (name = "Users", description = "User profile"),
        (name = "Debug", description = "Diagnostics, disabled by default"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
