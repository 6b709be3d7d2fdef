use sqlx::{PgPool, Pool, Postgres};

use resto_core::error::AppError;
use resto_core::models::{Category, NewRestaurant, Restaurant};
use resto_core::restaurant::INVALID_CATEGORY;
use resto_core::traits::RestaurantStore;

use crate::error::{is_foreign_key_violation, map_sqlx_error};

/// Restaurants joined with their category. Callers append WHERE/ORDER BY.
const SELECT_JOINED: &str = r#"
    SELECT r.id, r.name, r.address, r.city, r.category_id, r.rating,
           c.name AS category_name
    FROM restaurants r
    JOIN categories c ON c.id = r.category_id
"#;

/// Repository for restaurants in PostgreSQL.
///
/// Every read joins `categories` so the returned restaurants carry their
/// category.
#[derive(Clone)]
pub struct RestaurantRepository {
    pool: Pool<Postgres>,
}

impl RestaurantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_joined(
        &self,
        tail: &str,
        bind: Option<RestaurantFilter<'_>>,
    ) -> Result<Vec<Restaurant>, AppError> {
        let sql = format!("{SELECT_JOINED} {tail}");
        let query = sqlx::query_as::<_, RestaurantRow>(&sql);
        let query = match bind {
            Some(RestaurantFilter::Id(id)) => query.bind(id),
            Some(RestaurantFilter::Text(text)) => query.bind(text),
            None => query,
        };

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

/// The single parameter a joined read may bind as `$1`.
enum RestaurantFilter<'a> {
    Id(i32),
    Text(&'a str),
}

// -- Internal row type for sqlx deserialization --

#[derive(sqlx::FromRow)]
struct RestaurantRow {
    id: i32,
    name: String,
    address: String,
    city: String,
    category_id: i32,
    rating: f64,
    category_name: String,
}

impl From<RestaurantRow> for Restaurant {
    fn from(row: RestaurantRow) -> Self {
        Restaurant {
            id: row.id,
            name: row.name,
            address: row.address,
            city: row.city,
            category_id: row.category_id,
            rating: row.rating,
            category: Category {
                id: row.category_id,
                name: row.category_name,
            },
        }
    }
}

impl RestaurantStore for RestaurantRepository {
    async fn list(&self) -> Result<Vec<Restaurant>, AppError> {
        self.fetch_joined("ORDER BY r.id", None).await
    }

    async fn get(&self, id: i32) -> Result<Option<Restaurant>, AppError> {
        let mut rows = self
            .fetch_joined("WHERE r.id = $1", Some(RestaurantFilter::Id(id)))
            .await?;
        Ok(rows.pop())
    }

    async fn search_by_name(&self, fragment: &str) -> Result<Vec<Restaurant>, AppError> {
        // PostgreSQL text cannot hold NUL, so no stored name contains one.
        if fragment.contains('\0') {
            return Ok(Vec::new());
        }
        // strpos keeps % and _ literal, unlike LIKE.
        self.fetch_joined(
            "WHERE strpos(r.name, $1) > 0 ORDER BY r.id",
            Some(RestaurantFilter::Text(fragment)),
        )
        .await
    }

    async fn top_rated(&self) -> Result<Vec<Restaurant>, AppError> {
        self.fetch_joined("ORDER BY r.rating DESC, r.id", None).await
    }

    async fn by_category(&self, category_id: i32) -> Result<Vec<Restaurant>, AppError> {
        self.fetch_joined(
            "WHERE r.category_id = $1 ORDER BY r.id",
            Some(RestaurantFilter::Id(category_id)),
        )
        .await
    }

    async fn insert(&self, restaurant: &NewRestaurant) -> Result<Restaurant, AppError> {
        let row = sqlx::query_as::<_, RestaurantRow>(
            r#"
            WITH inserted AS (
                INSERT INTO restaurants (name, address, city, category_id, rating)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, name, address, city, category_id, rating
            )
            SELECT i.id, i.name, i.address, i.city, i.category_id, i.rating,
                   c.name AS category_name
            FROM inserted i
            JOIN categories c ON c.id = i.category_id
            "#,
        )
        .bind(&restaurant.name)
        .bind(&restaurant.address)
        .bind(&restaurant.city)
        .bind(restaurant.category_id)
        .bind(restaurant.rating)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // The category can vanish between the service's check and this insert.
            if is_foreign_key_violation(&e) {
                AppError::BadRequest(INVALID_CATEGORY.into())
            } else {
                map_sqlx_error(e)
            }
        })?;

        Ok(row.into())
    }

    async fn update(&self, id: i32, restaurant: &NewRestaurant) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE restaurants
            SET name = $2, address = $3, city = $4, category_id = $5, rating = $6
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&restaurant.name)
        .bind(&restaurant.address)
        .bind(&restaurant.city)
        .bind(restaurant.category_id)
        .bind(restaurant.rating)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query(r#"DELETE FROM restaurants WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}
