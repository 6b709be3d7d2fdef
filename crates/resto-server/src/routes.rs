use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Extension, Router, middleware};

use resto_core::Claims;
use resto_core::models::Restaurant;

use crate::auth::require_bearer_token;
use crate::dto::{
    CategoryRequest, CategoryResponse, HealthResponse, LoginRequest, LoginResponse,
    RestaurantCreateDto, RestaurantResponse, SearchByNameQuery,
};
use crate::error::ApiError;
use crate::state::AppState;

/// Build the full router with all routes and middleware.
pub fn router(state: Arc<AppState>) -> Router {
    let protected = Router::new()
        .route("/api/categories", post(create_category))
        .route(
            "/api/categories/{id}",
            put(update_category).delete(delete_category),
        )
        .route("/api/restaurants", post(create_restaurant))
        .route(
            "/api/restaurants/{id}",
            put(update_restaurant).delete(delete_restaurant),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_bearer_token,
        ));

    let public = Router::new()
        .route("/api/categories", get(list_categories))
        .route("/api/categories/{id}", get(get_category))
        .route("/api/restaurants", get(list_restaurants))
        .route("/api/restaurants/SearchByName", get(search_restaurants))
        .route("/api/restaurants/TopRated", get(top_rated_restaurants))
        .route(
            "/api/restaurants/ByCategory/{category_id}",
            get(restaurants_by_category),
        )
        .route("/api/restaurants/{id}", get(get_restaurant))
        .route("/api/login", post(login))
        .route("/health", get(health));

    public.merge(protected).with_state(state)
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let categories = state
        .categories()
        .list()
        .await
        .map_err(ApiError::unavailable_as_not_found)?;

    let response: Vec<CategoryResponse> = categories.into_iter().map(Into::into).collect();
    Ok(axum::Json(response))
}

pub async fn get_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let category = state
        .categories()
        .get(id)
        .await
        .map_err(ApiError::unavailable_as_not_found)?;

    Ok(axum::Json(CategoryResponse::from(category)))
}

pub async fn create_category(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    axum::Json(body): axum::Json<CategoryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let created = state.categories().create(&body.into()).await?;
    tracing::debug!(user = %claims.sub, category_id = created.id, "Category created via API");

    let location = format!("/api/categories/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        axum::Json(CategoryResponse::from(created)),
    ))
}

pub async fn update_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    axum::Json(body): axum::Json<CategoryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state.categories().update(id, &body.into()).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .categories()
        .delete(id)
        .await
        .map_err(ApiError::unavailable_as_not_found)?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Restaurants
// ---------------------------------------------------------------------------

fn restaurant_list(restaurants: Vec<Restaurant>) -> axum::Json<Vec<RestaurantResponse>> {
    axum::Json(restaurants.into_iter().map(Into::into).collect())
}

pub async fn list_restaurants(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let restaurants = state
        .restaurants()
        .list()
        .await
        .map_err(ApiError::unavailable_as_not_found)?;
    Ok(restaurant_list(restaurants))
}

pub async fn get_restaurant(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let restaurant = state
        .restaurants()
        .get(id)
        .await
        .map_err(ApiError::unavailable_as_not_found)?;
    Ok(axum::Json(RestaurantResponse::from(restaurant)))
}

pub async fn search_restaurants(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchByNameQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let restaurants = state
        .restaurants()
        .search_by_name(&query.name)
        .await
        .map_err(ApiError::unavailable_as_not_found)?;
    Ok(restaurant_list(restaurants))
}

pub async fn top_rated_restaurants(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let restaurants = state
        .restaurants()
        .top_rated()
        .await
        .map_err(ApiError::unavailable_as_not_found)?;
    Ok(restaurant_list(restaurants))
}

pub async fn restaurants_by_category(
    State(state): State<Arc<AppState>>,
    Path(category_id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let restaurants = state
        .restaurants()
        .by_category(category_id)
        .await
        .map_err(ApiError::unavailable_as_not_found)?;
    Ok(restaurant_list(restaurants))
}

pub async fn create_restaurant(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    axum::Json(body): axum::Json<RestaurantCreateDto>,
) -> Result<impl IntoResponse, ApiError> {
    let created = state.restaurants().create(&body.into()).await?;
    tracing::debug!(user = %claims.sub, restaurant_id = created.id, "Restaurant created via API");

    let location = format!("/api/restaurants/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        axum::Json(RestaurantResponse::from(created)),
    ))
}

pub async fn update_restaurant(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    axum::Json(body): axum::Json<RestaurantCreateDto>,
) -> Result<impl IntoResponse, ApiError> {
    state.restaurants().update(id, &body.into()).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_restaurant(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .restaurants()
        .delete(id)
        .await
        .map_err(ApiError::unavailable_as_not_found)?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

pub async fn login(
    State(state): State<Arc<AppState>>,
    axum::Json(body): axum::Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let token = state.login().login(&body.into()).await?;
    Ok(axum::Json(LoginResponse { token }))
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let db_status = match state.db.health_check().await {
        Ok(()) => "ok",
        Err(_) => "error",
    };

    let status = if db_status == "ok" {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let response = HealthResponse {
        status: if db_status == "ok" {
            "healthy"
        } else {
            "unhealthy"
        },
        database: db_status,
    };

    (status, axum::Json(response))
}
