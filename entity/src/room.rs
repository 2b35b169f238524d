use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::RoomType;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "room")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub room_number: i32,
    pub room_type: RoomType,
    /// Price of one night in the smallest unit of the configured currency.
    pub nightly_price: i64,
    pub available: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub photo: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::reservation::Entity")]
    Reservation,
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
