//! Bar menu item domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::menu_item::{CreateMenuItemDto, MenuItemDto, UpdateMenuItemDto};

#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub price: i64,
    pub description: Option<String>,
    pub available: bool,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl MenuItem {
    pub fn from_entity(entity: entity::menu_item::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            category: entity.category,
            price: entity.price,
            description: entity.description,
            available: entity.available,
            image: entity.image,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> MenuItemDto {
        MenuItemDto {
            id: self.id,
            name: self.name,
            category: self.category,
            price: self.price,
            description: self.description,
            available: self.available,
            image: self.image,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateMenuItemParams {
    pub name: String,
    pub category: String,
    pub price: i64,
    pub description: Option<String>,
    pub available: bool,
    pub image: Option<String>,
}

impl CreateMenuItemParams {
    pub fn from_dto(dto: CreateMenuItemDto) -> Self {
        Self {
            name: dto.name,
            category: dto.category,
            price: dto.price,
            description: dto.description,
            available: dto.available,
            image: dto.image,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateMenuItemParams {
    pub id: i32,
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<i64>,
    pub description: Option<String>,
    pub available: Option<bool>,
    pub image: Option<String>,
}

impl UpdateMenuItemParams {
    pub fn from_dto(id: i32, dto: UpdateMenuItemDto) -> Self {
        Self {
            id,
            name: dto.name,
            category: dto.category,
            price: dto.price,
            description: dto.description,
            available: dto.available,
            image: dto.image,
        }
    }
}
