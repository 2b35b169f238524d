pub use sea_orm_migration::prelude::*;

mod m20261019_000001_create_user_table;
mod m20261019_000002_create_access_token_table;
mod m20261019_000003_create_password_reset_token_table;
mod m20261019_000004_create_room_table;
mod m20261019_000005_create_reservation_table;
mod m20261019_000006_create_menu_item_table;
mod m20261019_000007_create_order_table;
mod m20261019_000008_create_order_item_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261019_000001_create_user_table::Migration),
            Box::new(m20261019_000002_create_access_token_table::Migration),
            Box::new(m20261019_000003_create_password_reset_token_table::Migration),
            Box::new(m20261019_000004_create_room_table::Migration),
            Box::new(m20261019_000005_create_reservation_table::Migration),
            Box::new(m20261019_000006_create_menu_item_table::Migration),
            Box::new(m20261019_000007_create_order_table::Migration),
            Box::new(m20261019_000008_create_order_item_table::Migration),
        ]
    }
}
