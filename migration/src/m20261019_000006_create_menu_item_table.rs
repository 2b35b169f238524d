use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MenuItem::Table)
                    .if_not_exists()
                    .col(pk_auto(MenuItem::Id))
                    .col(string(MenuItem::Name))
                    .col(string(MenuItem::Category))
                    .col(big_integer(MenuItem::Price))
                    .col(text_null(MenuItem::Description))
                    .col(boolean(MenuItem::Available).default(true))
                    .col(string_null(MenuItem::Image))
                    .col(
                        timestamp_with_time_zone(MenuItem::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MenuItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MenuItem {
    Table,
    Id,
    Name,
    Category,
    Price,
    Description,
    Available,
    Image,
    CreatedAt,
}
