use std::future::Future;

use crate::error::AppError;
use crate::models::{Category, NewRestaurant, NewUser, Restaurant, User};

/// Persists and retrieves categories.
pub trait CategoryStore: Send + Sync + Clone {
    /// All categories, ordered by id.
    fn list(&self) -> impl Future<Output = Result<Vec<Category>, AppError>> + Send;

    fn get(&self, id: i32) -> impl Future<Output = Result<Option<Category>, AppError>> + Send;

    /// Look up a category by its exact name.
    fn find_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<Category>, AppError>> + Send;

    /// Insert a category. The id is assigned by the store.
    fn insert(&self, name: &str) -> impl Future<Output = Result<Category, AppError>> + Send;

    /// Overwrite the stored row. Returns the number of rows touched.
    fn update(&self, category: &Category) -> impl Future<Output = Result<u64, AppError>> + Send;

    /// Delete a category and, through the foreign key, its restaurants.
    /// Returns false if nothing was deleted.
    fn delete(&self, id: i32) -> impl Future<Output = Result<bool, AppError>> + Send;

    fn exists(&self, id: i32) -> impl Future<Output = Result<bool, AppError>> + Send;
}

/// Persists and retrieves restaurants. Every returned restaurant has its
/// category resolved.
pub trait RestaurantStore: Send + Sync + Clone {
    /// All restaurants, ordered by id.
    fn list(&self) -> impl Future<Output = Result<Vec<Restaurant>, AppError>> + Send;

    fn get(&self, id: i32) -> impl Future<Output = Result<Option<Restaurant>, AppError>> + Send;

    /// Restaurants whose name contains `fragment` (case-sensitive).
    fn search_by_name(
        &self,
        fragment: &str,
    ) -> impl Future<Output = Result<Vec<Restaurant>, AppError>> + Send;

    /// All restaurants, best rating first.
    fn top_rated(&self) -> impl Future<Output = Result<Vec<Restaurant>, AppError>> + Send;

    fn by_category(
        &self,
        category_id: i32,
    ) -> impl Future<Output = Result<Vec<Restaurant>, AppError>> + Send;

    fn insert(
        &self,
        restaurant: &NewRestaurant,
    ) -> impl Future<Output = Result<Restaurant, AppError>> + Send;

    /// Overwrite every mutable column. Returns the number of rows touched.
    fn update(
        &self,
        id: i32,
        restaurant: &NewRestaurant,
    ) -> impl Future<Output = Result<u64, AppError>> + Send;

    /// Returns false if nothing was deleted.
    fn delete(&self, id: i32) -> impl Future<Output = Result<bool, AppError>> + Send;
}

/// Looks up login accounts.
pub trait UserStore: Send + Sync + Clone {
    /// Find a user whose username matches case-insensitively.
    fn find_by_username(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Option<User>, AppError>> + Send;

    fn insert(&self, user: &NewUser) -> impl Future<Output = Result<User, AppError>> + Send;
}
