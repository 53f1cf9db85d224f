use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ingredients::Table)
                    .if_not_exists()
                    .col(pk_auto(Ingredients::Id))
                    .col(string(Ingredients::Name))
                    .col(string_null(Ingredients::Description))
                    .col(string(Ingredients::Type))
                    .col(timestamp(Ingredients::CreatedAt))
                    .col(timestamp(Ingredients::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ingredients::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Ingredients {
    Table,
    Id,
    Name,
    Description,
    Type,
    CreatedAt,
    UpdatedAt,
    CreatedBy,
    UpdatedBy,
}
