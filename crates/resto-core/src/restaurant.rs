use crate::error::AppError;
use crate::models::{NewRestaurant, Restaurant};
use crate::traits::{CategoryStore, RestaurantStore};

/// Message returned when a restaurant points at a category that does not exist.
pub const INVALID_CATEGORY: &str = "Invalid categoryId. Category not found.";

/// Message returned for any unexpected failure while updating a restaurant.
pub const UPDATE_FAILED: &str = "An error occurred while updating the restaurant.";

/// CRUD and filtered queries over restaurants.
///
/// Every restaurant returned by this service has its category resolved.
#[derive(Clone)]
pub struct RestaurantService<R, C>
where
    R: RestaurantStore,
    C: CategoryStore,
{
    restaurants: R,
    categories: C,
}

impl<R, C> RestaurantService<R, C>
where
    R: RestaurantStore,
    C: CategoryStore,
{
    pub fn new(restaurants: R, categories: C) -> Self {
        Self {
            restaurants,
            categories,
        }
    }

    pub async fn list(&self) -> Result<Vec<Restaurant>, AppError> {
        self.restaurants.list().await
    }

    pub async fn get(&self, id: i32) -> Result<Restaurant, AppError> {
        self.restaurants
            .get(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Restaurants whose name contains `fragment`.
    pub async fn search_by_name(&self, fragment: &str) -> Result<Vec<Restaurant>, AppError> {
        self.restaurants.search_by_name(fragment).await
    }

    /// All restaurants, best rated first.
    pub async fn top_rated(&self) -> Result<Vec<Restaurant>, AppError> {
        self.restaurants.top_rated().await
    }

    pub async fn by_category(&self, category_id: i32) -> Result<Vec<Restaurant>, AppError> {
        self.restaurants.by_category(category_id).await
    }

    /// Persist a new restaurant after checking its category exists.
    pub async fn create(&self, restaurant: &NewRestaurant) -> Result<Restaurant, AppError> {
        restaurant.validate()?;

        if self.categories.get(restaurant.category_id).await?.is_none() {
            return Err(AppError::BadRequest(INVALID_CATEGORY.into()));
        }

        let created = self.restaurants.insert(restaurant).await?;
        tracing::info!(
            restaurant_id = created.id,
            category_id = created.category_id,
            "Restaurant created"
        );
        Ok(created)
    }

    /// Overwrite name, address, city, category, and rating of an existing restaurant.
    ///
    /// Besides validation and a missing restaurant, every failure is logged
    /// and reported as a generic [`AppError::Internal`].
    pub async fn update(&self, id: i32, restaurant: &NewRestaurant) -> Result<(), AppError> {
        restaurant.validate()?;

        match self.apply_update(id, restaurant).await {
            Ok(()) => Ok(()),
            Err(err @ AppError::NotFound(_)) => Err(err),
            Err(err) => {
                tracing::error!(restaurant_id = id, error = %err, "Restaurant update failed");
                Err(AppError::Internal(UPDATE_FAILED.into()))
            }
        }
    }

    async fn apply_update(&self, id: i32, restaurant: &NewRestaurant) -> Result<(), AppError> {
        if self.restaurants.get(id).await?.is_none() {
            return Err(not_found(id));
        }

        match self.restaurants.update(id, restaurant).await? {
            0 => Err(not_found(id)),
            _ => Ok(()),
        }
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !self.restaurants.delete(id).await? {
            return Err(not_found(id));
        }
        tracing::info!(restaurant_id = id, "Restaurant deleted");
        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Restaurant with id {id} not found."))
}
