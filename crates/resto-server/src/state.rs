use resto_core::{CategoryService, JwtKeys, LoginService, RestaurantService};
use resto_db::{CategoryRepository, Database, RestaurantRepository, UserRepository};

/// Shared application state, available to all route handlers via `State<Arc<AppState>>`.
pub struct AppState {
    pub db: Database,
    /// Signs tokens on login and verifies them on protected routes.
    pub keys: JwtKeys,
}

impl AppState {
    pub fn new(db: Database, keys: JwtKeys) -> Self {
        Self { db, keys }
    }

    pub fn categories(&self) -> CategoryService<CategoryRepository> {
        CategoryService::new(self.db.category_repo())
    }

    pub fn restaurants(&self) -> RestaurantService<RestaurantRepository, CategoryRepository> {
        RestaurantService::new(self.db.restaurant_repo(), self.db.category_repo())
    }

    pub fn login(&self) -> LoginService<UserRepository> {
        LoginService::new(self.db.user_repo(), self.keys.clone())
    }
}
