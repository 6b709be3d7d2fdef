use serde::{Deserialize, Serialize};

use resto_core::models::{Category, Credentials, NewRestaurant, Restaurant};

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// Body of `POST`/`PUT /api/categories`.
///
/// A missing `id` reads as 0; missing text reads as empty and fails validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRequest {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub name: String,
}

impl From<CategoryRequest> for Category {
    fn from(body: CategoryRequest) -> Self {
        Category {
            id: body.id,
            name: body.name,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: i32,
    pub name: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}

// ---------------------------------------------------------------------------
// Restaurants
// ---------------------------------------------------------------------------

/// Body of `POST`/`PUT /api/restaurants`. Never carries an id.
///
/// A missing `categoryId` reads as 0, which no category has.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantCreateDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub category_id: i32,
    #[serde(default)]
    pub rating: f64,
}

impl From<RestaurantCreateDto> for NewRestaurant {
    fn from(dto: RestaurantCreateDto) -> Self {
        NewRestaurant {
            name: dto.name,
            address: dto.address,
            city: dto.city,
            category_id: dto.category_id,
            rating: dto.rating,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantResponse {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub city: String,
    pub category_id: i32,
    pub rating: f64,
    pub category: CategoryResponse,
}

impl From<Restaurant> for RestaurantResponse {
    fn from(r: Restaurant) -> Self {
        Self {
            id: r.id,
            name: r.name,
            address: r.address,
            city: r.city,
            category_id: r.category_id,
            rating: r.rating,
            category: r.category.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchByNameQuery {
    #[serde(default)]
    pub name: String,
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl From<LoginRequest> for Credentials {
    fn from(body: LoginRequest) -> Self {
        Credentials {
            username: body.username,
            password: body.password,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

// ---------------------------------------------------------------------------
// Health & errors
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
