//! Bar menu catalog service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::menu_item::MenuItemRepository,
    error::AppError,
    model::menu_item::{CreateMenuItemParams, MenuItem, UpdateMenuItemParams},
};

pub struct MenuItemService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MenuItemService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a menu item
    pub async fn create(&self, params: CreateMenuItemParams) -> Result<MenuItem, AppError> {
        validate_name(&params.name)?;
        validate_category(&params.category)?;
        validate_price(params.price)?;

        Ok(MenuItemRepository::new(self.db).create(params).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<MenuItem>, AppError> {
        Ok(MenuItemRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<MenuItem>, AppError> {
        Ok(MenuItemRepository::new(self.db).find_by_id(id).await?)
    }

    /// Distinct categories across the catalog
    pub async fn get_categories(&self) -> Result<Vec<String>, AppError> {
        Ok(MenuItemRepository::new(self.db).get_categories().await?)
    }

    /// Applies a partial update. Existing orders keep the prices they were placed with.
    pub async fn update(&self, params: UpdateMenuItemParams) -> Result<MenuItem, AppError> {
        if let Some(name) = &params.name {
            validate_name(name)?;
        }
        if let Some(category) = &params.category {
            validate_category(category)?;
        }
        if let Some(price) = params.price {
            validate_price(price)?;
        }

        let id = params.id;
        MenuItemRepository::new(self.db)
            .update(params)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Menu item {} not found", id)))
    }

    /// Deletes a menu item that no order line references.
    ///
    /// # Returns
    /// - `Ok(())` - Menu item removed
    /// - `Err(AppError::NotFound)` - No menu item with that ID
    /// - `Err(AppError::Conflict)` - Item appears in existing orders; mark it unavailable instead
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = MenuItemRepository::new(self.db);

        if repo.is_referenced(id).await? {
            return Err(AppError::Conflict(format!(
                "Menu item {} is referenced by existing orders",
                id
            )));
        }

        if !repo.delete(id).await? {
            return Err(AppError::NotFound(format!("Menu item {} not found", id)));
        }

        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::BadRequest("Menu item name is required".to_string()));
    }

    Ok(())
}

fn validate_category(category: &str) -> Result<(), AppError> {
    if category.trim().is_empty() {
        return Err(AppError::BadRequest("Category is required".to_string()));
    }

    Ok(())
}

fn validate_price(price: i64) -> Result<(), AppError> {
    if price < 0 {
        return Err(AppError::BadRequest("Price must not be negative".to_string()));
    }

    Ok(())
}
