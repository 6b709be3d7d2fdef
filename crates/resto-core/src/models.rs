use std::fmt;

use crate::error::AppError;

/// Maximum length of every persisted text column (`VARCHAR(255)`).
pub const MAX_TEXT_LEN: usize = 255;

/// A restaurant category (e.g. "Italian", "Bistro").
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

impl Category {
    /// Check the same constraints the `categories` table enforces.
    pub fn validate(&self) -> Result<(), AppError> {
        require_text("name", &self.name)
    }
}

/// A persisted restaurant with its category resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub city: String,
    pub category_id: i32,
    pub rating: f64,
    pub category: Category,
}

/// Field values for creating a restaurant or overwriting an existing one.
///
/// Carries no id: identifiers are always assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRestaurant {
    pub name: String,
    pub address: String,
    pub city: String,
    pub category_id: i32,
    pub rating: f64,
}

impl NewRestaurant {
    pub fn validate(&self) -> Result<(), AppError> {
        require_text("name", &self.name)?;
        require_text("address", &self.address)?;
        require_text("city", &self.city)?;
        if !self.rating.is_finite() {
            return Err(AppError::Validation("rating must be a finite number".into()));
        }
        Ok(())
    }
}

/// A login account. Only ever read for credential checks.
#[derive(Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password: String,
    pub email_address: String,
    pub role: String,
    pub surname: String,
    pub given_name: String,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("email_address", &self.email_address)
            .field("role", &self.role)
            .field("surname", &self.surname)
            .field("given_name", &self.given_name)
            .finish()
    }
}

/// DTO for inserting a new user.
#[derive(Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub email_address: String,
    pub role: String,
    pub surname: String,
    pub given_name: String,
}

impl NewUser {
    pub fn validate(&self) -> Result<(), AppError> {
        require_text("username", &self.username)?;
        if self.password.is_empty() {
            return Err(AppError::Validation("password is required".into()));
        }
        Ok(())
    }
}

/// Username/password pair submitted to the login endpoint.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Required text field, at most [`MAX_TEXT_LEN`] characters.
fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} is required")));
    }
    if value.chars().count() > MAX_TEXT_LEN {
        return Err(AppError::Validation(format!(
            "{field} must be at most {MAX_TEXT_LEN} characters"
        )));
    }
    Ok(())
}
