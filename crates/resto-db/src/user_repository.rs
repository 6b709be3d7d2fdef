use sqlx::{PgPool, Pool, Postgres};

use resto_core::error::AppError;
use resto_core::models::{NewUser, User};
use resto_core::traits::UserStore;

use crate::error::{is_unique_violation, map_sqlx_error};

/// Repository for login accounts in PostgreSQL.
#[derive(Clone)]
pub struct UserRepository {
    pool: Pool<Postgres>,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i32,
    username: String,
    password: String,
    email_address: String,
    role: String,
    surname: String,
    given_name: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            username: row.username,
            password: row.password,
            email_address: row.email_address,
            role: row.role,
            surname: row.surname,
            given_name: row.given_name,
        }
    }
}

impl UserStore for UserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, password, email_address, role, surname, given_name
            FROM users
            WHERE LOWER(username) = LOWER($1)
            LIMIT 1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(Into::into))
    }

    async fn insert(&self, user: &NewUser) -> Result<User, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (username, password, email_address, role, surname, given_name)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, username, password, email_address, role, surname, given_name
            "#,
        )
        .bind(&user.username)
        .bind(&user.password)
        .bind(&user.email_address)
        .bind(&user.role)
        .bind(&user.surname)
        .bind(&user.given_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::BadRequest(format!("Username '{}' already exists", user.username))
            } else {
                map_sqlx_error(e)
            }
        })?;

        Ok(row.into())
    }
}
