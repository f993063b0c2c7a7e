pub mod auth;
pub mod cart;
pub mod favorites;
pub mod products;
pub mod users;
