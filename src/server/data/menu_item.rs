//! Bar menu item repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::menu_item::{CreateMenuItemParams, MenuItem, UpdateMenuItemParams};

pub struct MenuItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MenuItemRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateMenuItemParams) -> Result<MenuItem, DbErr> {
        let entity = entity::menu_item::ActiveModel {
            name: ActiveValue::Set(params.name),
            category: ActiveValue::Set(params.category),
            price: ActiveValue::Set(params.price),
            description: ActiveValue::Set(params.description),
            available: ActiveValue::Set(params.available),
            image: ActiveValue::Set(params.image),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(MenuItem::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<MenuItem>, DbErr> {
        let entity = entity::prelude::MenuItem::find_by_id(id).one(self.db).await?;

        Ok(entity.map(MenuItem::from_entity))
    }

    /// Gets the menu items with the given IDs. Missing IDs are skipped.
    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<Vec<MenuItem>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::MenuItem::find()
            .filter(entity::menu_item::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(MenuItem::from_entity).collect())
    }

    /// Gets the whole menu grouped by category, then by name.
    pub async fn get_all(&self) -> Result<Vec<MenuItem>, DbErr> {
        let entities = entity::prelude::MenuItem::find()
            .order_by_asc(entity::menu_item::Column::Category)
            .order_by_asc(entity::menu_item::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(MenuItem::from_entity).collect())
    }

    /// Gets the distinct categories in alphabetical order.
    pub async fn get_categories(&self) -> Result<Vec<String>, DbErr> {
        entity::prelude::MenuItem::find()
            .select_only()
            .column(entity::menu_item::Column::Category)
            .distinct()
            .order_by_asc(entity::menu_item::Column::Category)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(MenuItem))` - Updated item
    /// - `Ok(None)` - No menu item with that ID
    pub async fn update(&self, params: UpdateMenuItemParams) -> Result<Option<MenuItem>, DbErr> {
        let Some(existing) = entity::prelude::MenuItem::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::menu_item::ActiveModel = existing.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(category) = params.category {
            active.category = ActiveValue::Set(category);
        }
        if let Some(price) = params.price {
            active.price = ActiveValue::Set(price);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(available) = params.available {
            active.available = ActiveValue::Set(available);
        }
        if let Some(image) = params.image {
            active.image = ActiveValue::Set(Some(image));
        }

        let entity = active.update(self.db).await?;

        Ok(Some(MenuItem::from_entity(entity)))
    }

    /// Whether any order line references the menu item.
    pub async fn is_referenced(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::MenuItemId.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::MenuItem::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
