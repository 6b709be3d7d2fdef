use crate::error::AppError;
use crate::models::Category;
use crate::traits::CategoryStore;

/// CRUD over categories.
#[derive(Clone)]
pub struct CategoryService<S: CategoryStore> {
    store: S,
}

impl<S: CategoryStore> CategoryService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Category>, AppError> {
        self.store.list().await
    }

    pub async fn get(&self, id: i32) -> Result<Category, AppError> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category with id {id} not found.")))
    }

    /// Persist a new category. Any id on the input is ignored.
    pub async fn create(&self, category: &Category) -> Result<Category, AppError> {
        category.validate()?;
        let created = self.store.insert(&category.name).await?;
        tracing::info!(category_id = created.id, name = %created.name, "Category created");
        Ok(created)
    }

    /// Overwrite the category stored under `id`.
    ///
    /// The body's id must equal `id`. A write that touches no row is re-checked:
    /// a vanished row is `NotFound`, a row that still exists is a `Conflict`.
    pub async fn update(&self, id: i32, category: &Category) -> Result<(), AppError> {
        if category.id != id {
            return Err(AppError::BadRequest(format!(
                "Category id {} does not match route id {id}",
                category.id
            )));
        }
        category.validate()?;

        if self.store.update(category).await? > 0 {
            return Ok(());
        }

        if self.store.exists(id).await? {
            Err(AppError::Conflict(format!(
                "Category {id} exists but could not be updated"
            )))
        } else {
            Err(AppError::NotFound(format!("Category with id {id} not found.")))
        }
    }

    /// Delete a category. Restaurants referencing it are removed with it.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !self.store.delete(id).await? {
            return Err(AppError::NotFound(format!("Category with id {id} not found.")));
        }
        tracing::info!(category_id = id, "Category deleted");
        Ok(())
    }

    /// Return the category with this exact name, creating it if missing.
    pub async fn find_or_create(&self, name: &str) -> Result<Category, AppError> {
        if let Some(existing) = self.store.find_by_name(name).await? {
            return Ok(existing);
        }
        self.create(&Category {
            id: 0,
            name: name.to_string(),
        })
        .await
    }
}
