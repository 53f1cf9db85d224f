use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Units::Table)
                    .if_not_exists()
                    .col(pk_auto(Units::Id))
                    .col(string(Units::Name))
                    .col(string(Units::Abbreviation))
                    .col(integer(Units::Base))
                    .col(timestamp(Units::CreatedAt))
                    .col(timestamp(Units::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Units::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Units {
    Table,
    Id,
    Name,
    Abbreviation,
    Base,
    CreatedAt,
    UpdatedAt,
    CreatedBy,
    UpdatedBy,
}
