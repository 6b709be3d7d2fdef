use sqlx::{PgPool, Pool, Postgres};

use resto_core::error::AppError;
use resto_core::models::Category;
use resto_core::traits::CategoryStore;

use crate::error::map_sqlx_error;

/// Repository for categories in PostgreSQL.
#[derive(Clone)]
pub struct CategoryRepository {
    pool: Pool<Postgres>,
}

impl CategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// -- Internal row type for sqlx deserialization --

#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: i32,
    name: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category {
            id: row.id,
            name: row.name,
        }
    }
}

impl CategoryStore for CategoryRepository {
    async fn list(&self) -> Result<Vec<Category>, AppError> {
        let rows = sqlx::query_as::<_, CategoryRow>(r#"SELECT id, name FROM categories ORDER BY id"#)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get(&self, id: i32) -> Result<Option<Category>, AppError> {
        let row =
            sqlx::query_as::<_, CategoryRow>(r#"SELECT id, name FROM categories WHERE id = $1"#)
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(row.map(Into::into))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, AppError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"SELECT id, name FROM categories WHERE name = $1 ORDER BY id LIMIT 1"#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(Into::into))
    }

    async fn insert(&self, name: &str) -> Result<Category, AppError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"INSERT INTO categories (name) VALUES ($1) RETURNING id, name"#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.into())
    }

    async fn update(&self, category: &Category) -> Result<u64, AppError> {
        let result = sqlx::query(r#"UPDATE categories SET name = $2 WHERE id = $1"#)
            .bind(category.id)
            .bind(&category.name)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        // restaurants.category_id is ON DELETE CASCADE
        let result = sqlx::query(r#"DELETE FROM categories WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn exists(&self, id: i32) -> Result<bool, AppError> {
        let (exists,): (bool,) =
            sqlx::query_as(r#"SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)"#)
                .bind(id)
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(exists)
    }
}
