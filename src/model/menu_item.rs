use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct MenuItemDto {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub price: i64,
    pub description: Option<String>,
    pub available: bool,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateMenuItemDto {
    pub name: String,
    pub category: String,
    pub price: i64,
    pub description: Option<String>,
    #[serde(default = "default_available")]
    pub available: bool,
    pub image: Option<String>,
}

fn default_available() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateMenuItemDto {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<i64>,
    pub description: Option<String>,
    pub available: Option<bool>,
    pub image: Option<String>,
}
