use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Recipes::Table)
                    .if_not_exists()
                    .col(pk_auto(Recipes::Id))
                    .col(string(Recipes::Name))
                    .col(string_null(Recipes::Description))
                    .col(string(Recipes::Period))
                    .col(string(Recipes::Type))
                    .col(string(Recipes::Presentation))
                    .col(timestamp(Recipes::CreatedAt))
                    .col(timestamp(Recipes::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Recipes::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Recipes {
    Table,
    Id,
    Name,
    Description,
    Period,
    Type,
    Presentation,
    CreatedAt,
    UpdatedAt,
    CreatedBy,
    UpdatedBy,
}
