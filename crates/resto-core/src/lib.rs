//! Domain model, services, and token handling for the Restaurants API.

pub mod category;
pub mod config;
pub mod error;
pub mod login;
pub mod models;
pub mod restaurant;
pub mod token;
pub mod traits;

#[cfg(test)]
pub(crate) mod testutil;

pub use category::CategoryService;
pub use config::JwtConfig;
pub use error::AppError;
pub use login::LoginService;
pub use models::{Category, Credentials, NewRestaurant, NewUser, Restaurant, User};
pub use restaurant::RestaurantService;
pub use token::{Claims, JwtKeys};
pub use traits::{CategoryStore, RestaurantStore, UserStore};
