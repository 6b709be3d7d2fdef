//! Test utilities: an in-memory implementation of every store trait.
//!
//! Handwritten fake for dependency injection in unit tests. State lives
//! behind `Arc<Mutex<_>>` so clones share it, like connections to one
//! database.

use std::sync::{Arc, Mutex};

use crate::config::JwtConfig;
use crate::error::AppError;
use crate::models::{Category, NewRestaurant, NewUser, Restaurant, User};
use crate::traits::{CategoryStore, RestaurantStore, UserStore};

/// JWT settings shared by the unit tests.
pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        key: "an-hs256-test-key-of-at-least-32-bytes".into(),
        issuer: "resto-api".into(),
        audience: "resto-clients".into(),
        ttl_minutes: 15,
    }
}

/// The canonical login user.
pub fn alice() -> User {
    User {
        id: 1,
        username: "alice".into(),
        password: "correct-pw".into(),
        email_address: "alice@example.com".into(),
        role: "admin".into(),
        surname: "Liddell".into(),
        given_name: "Alice".into(),
    }
}

#[derive(Default)]
struct State {
    categories: Vec<Category>,
    restaurants: Vec<RestaurantRow>,
    users: Vec<User>,
    next_id: i32,
    drop_next_category_update: bool,
}

struct RestaurantRow {
    id: i32,
    fields: NewRestaurant,
}

impl State {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }

    fn resolve(&self, row: &RestaurantRow) -> Restaurant {
        let category = self
            .categories
            .iter()
            .find(|c| c.id == row.fields.category_id)
            .cloned()
            .expect("foreign key guarantees the category exists");
        Restaurant {
            id: row.id,
            name: row.fields.name.clone(),
            address: row.fields.address.clone(),
            city: row.fields.city.clone(),
            category_id: row.fields.category_id,
            rating: row.fields.rating,
            category,
        }
    }

    fn resolve_where(&self, keep: impl Fn(&RestaurantRow) -> bool) -> Vec<Restaurant> {
        self.restaurants
            .iter()
            .filter(|row| keep(row))
            .map(|row| self.resolve(row))
            .collect()
    }

    fn check_category(&self, category_id: i32) -> Result<(), AppError> {
        if self.categories.iter().any(|c| c.id == category_id) {
            Ok(())
        } else {
            Err(AppError::DatabaseError(format!(
                "foreign key violation: category {category_id} does not exist"
            )))
        }
    }
}

/// In-memory store behaving like the PostgreSQL schema, cascade included.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(self, user: User) -> Self {
        self.state.lock().unwrap().users.push(user);
        self
    }

    /// Make the next category update report zero rows touched, as if a
    /// concurrent writer had won.
    pub fn drop_next_category_update(&self) {
        self.state.lock().unwrap().drop_next_category_update = true;
    }
}

impl CategoryStore for InMemoryStore {
    async fn list(&self) -> Result<Vec<Category>, AppError> {
        Ok(self.state.lock().unwrap().categories.clone())
    }

    async fn get(&self, id: i32) -> Result<Option<Category>, AppError> {
        let state = self.state.lock().unwrap();
        Ok(state.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, AppError> {
        let state = self.state.lock().unwrap();
        Ok(state.categories.iter().find(|c| c.name == name).cloned())
    }

    async fn insert(&self, name: &str) -> Result<Category, AppError> {
        let mut state = self.state.lock().unwrap();
        let category = Category {
            id: state.next_id(),
            name: name.to_string(),
        };
        state.categories.push(category.clone());
        Ok(category)
    }

    async fn update(&self, category: &Category) -> Result<u64, AppError> {
        let mut state = self.state.lock().unwrap();
        if std::mem::take(&mut state.drop_next_category_update) {
            return Ok(0);
        }
        match state.categories.iter_mut().find(|c| c.id == category.id) {
            Some(stored) => {
                stored.name = category.name.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let mut state = self.state.lock().unwrap();
        let before = state.categories.len();
        state.categories.retain(|c| c.id != id);
        if state.categories.len() == before {
            return Ok(false);
        }
        state.restaurants.retain(|r| r.fields.category_id != id);
        Ok(true)
    }

    async fn exists(&self, id: i32) -> Result<bool, AppError> {
        let state = self.state.lock().unwrap();
        Ok(state.categories.iter().any(|c| c.id == id))
    }
}

impl RestaurantStore for InMemoryStore {
    async fn list(&self) -> Result<Vec<Restaurant>, AppError> {
        Ok(self.state.lock().unwrap().resolve_where(|_| true))
    }

    async fn get(&self, id: i32) -> Result<Option<Restaurant>, AppError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .resolve_where(|r| r.id == id)
            .pop())
    }

    async fn search_by_name(&self, fragment: &str) -> Result<Vec<Restaurant>, AppError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .resolve_where(|r| r.fields.name.contains(fragment)))
    }

    async fn top_rated(&self) -> Result<Vec<Restaurant>, AppError> {
        let mut restaurants = self.state.lock().unwrap().resolve_where(|_| true);
        restaurants.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        Ok(restaurants)
    }

    async fn by_category(&self, category_id: i32) -> Result<Vec<Restaurant>, AppError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .resolve_where(|r| r.fields.category_id == category_id))
    }

    async fn insert(&self, restaurant: &NewRestaurant) -> Result<Restaurant, AppError> {
        let mut state = self.state.lock().unwrap();
        state.check_category(restaurant.category_id)?;
        let row = RestaurantRow {
            id: state.next_id(),
            fields: restaurant.clone(),
        };
        let created = state.resolve(&row);
        state.restaurants.push(row);
        Ok(created)
    }

    async fn update(&self, id: i32, restaurant: &NewRestaurant) -> Result<u64, AppError> {
        let mut state = self.state.lock().unwrap();
        state.check_category(restaurant.category_id)?;
        match state.restaurants.iter_mut().find(|r| r.id == id) {
            Some(row) => {
                row.fields = restaurant.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let mut state = self.state.lock().unwrap();
        let before = state.restaurants.len();
        state.restaurants.retain(|r| r.id != id);
        Ok(state.restaurants.len() != before)
    }
}

impl UserStore for InMemoryStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let state = self.state.lock().unwrap();
        let wanted = username.to_lowercase();
        Ok(state
            .users
            .iter()
            .find(|u| u.username.to_lowercase() == wanted)
            .cloned())
    }

    async fn insert(&self, user: &NewUser) -> Result<User, AppError> {
        let mut state = self.state.lock().unwrap();
        let created = User {
            id: state.next_id(),
            username: user.username.clone(),
            password: user.password.clone(),
            email_address: user.email_address.clone(),
            role: user.role.clone(),
            surname: user.surname.clone(),
            given_name: user.given_name.clone(),
        };
        state.users.push(created.clone());
        Ok(created)
    }
}
