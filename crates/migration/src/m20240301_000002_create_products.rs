//! Create `products` table.
//!
//! `categoryid` points at `categories.id` but carries no FK constraint;
//! deleting a referenced category is intentionally not guarded against.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(pk_auto(Products::Id))
                    .col(string(Products::Name).not_null())
                    .col(double(Products::Price).not_null())
                    .col(integer(Products::Stock).not_null())
                    .col(integer(Products::CategoryId).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Products::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
    Name,
    Price,
    Stock,
    #[sea_orm(iden = "categoryid")]
    CategoryId,
}
