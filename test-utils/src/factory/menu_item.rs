//! Menu item factory for creating test bar catalog entries.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test menu items with customizable fields.
pub struct MenuItemFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    category: String,
    price: i64,
    available: bool,
}

impl<'a> MenuItemFactory<'a> {
    /// Creates a new MenuItemFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Item {id}"`
    /// - category: `"Drinks"`
    /// - price: `1_500`
    /// - available: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Item {}", next_id()),
            category: "Drinks".to_string(),
            price: 1_500,
            available: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    pub fn available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    /// Builds and inserts the menu item into the database.
    pub async fn build(self) -> Result<entity::menu_item::Model, DbErr> {
        entity::menu_item::ActiveModel {
            name: ActiveValue::Set(self.name),
            category: ActiveValue::Set(self.category),
            price: ActiveValue::Set(self.price),
            description: ActiveValue::Set(None),
            available: ActiveValue::Set(self.available),
            image: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available menu item with default values.
pub async fn create_menu_item(db: &DatabaseConnection) -> Result<entity::menu_item::Model, DbErr> {
    MenuItemFactory::new(db).build().await
}
