pub mod category_repository;
pub mod config;
pub mod database;
pub mod error;
pub mod restaurant_repository;
pub mod user_repository;

pub use category_repository::CategoryRepository;
pub use config::DatabaseConfig;
pub use database::Database;
pub use restaurant_repository::RestaurantRepository;
pub use user_repository::UserRepository;
