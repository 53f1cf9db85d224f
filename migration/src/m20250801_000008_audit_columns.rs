use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20250801_000001_categories::Categories, m20250801_000002_units::Units,
    m20250801_000003_ingredients::Ingredients, m20250801_000004_recipes::Recipes,
    m20250801_000005_recipe_ingredients::RecipeIngredients,
};

/// Second schema revision: adds `created_by`/`updated_by` audit columns to the
/// five core tables. The columns are nullable integers without a foreign key
/// to users, matching the persisted schema contract.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        add_audit_columns(manager, Categories::Table, Categories::CreatedBy, Categories::UpdatedBy)
            .await?;
        add_audit_columns(manager, Units::Table, Units::CreatedBy, Units::UpdatedBy).await?;
        add_audit_columns(
            manager,
            Ingredients::Table,
            Ingredients::CreatedBy,
            Ingredients::UpdatedBy,
        )
        .await?;
        add_audit_columns(manager, Recipes::Table, Recipes::CreatedBy, Recipes::UpdatedBy).await?;
        add_audit_columns(
            manager,
            RecipeIngredients::Table,
            RecipeIngredients::CreatedBy,
            RecipeIngredients::UpdatedBy,
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_audit_columns(manager, Categories::Table, Categories::CreatedBy, Categories::UpdatedBy)
            .await?;
        drop_audit_columns(manager, Units::Table, Units::CreatedBy, Units::UpdatedBy).await?;
        drop_audit_columns(
            manager,
            Ingredients::Table,
            Ingredients::CreatedBy,
            Ingredients::UpdatedBy,
        )
        .await?;
        drop_audit_columns(manager, Recipes::Table, Recipes::CreatedBy, Recipes::UpdatedBy).await?;
        drop_audit_columns(
            manager,
            RecipeIngredients::Table,
            RecipeIngredients::CreatedBy,
            RecipeIngredients::UpdatedBy,
        )
        .await?;

        Ok(())
    }
}

async fn add_audit_columns<T, C>(
    manager: &SchemaManager<'_>,
    table: T,
    created_by: C,
    updated_by: C,
) -> Result<(), DbErr>
where
    T: IntoTableRef + 'static,
    C: IntoIden + 'static,
{
    manager
        .alter_table(
            Table::alter()
                .table(table)
                .add_column(integer_null(created_by))
                .add_column(integer_null(updated_by))
                .to_owned(),
        )
        .await
}

async fn drop_audit_columns<T, C>(
    manager: &SchemaManager<'_>,
    table: T,
    created_by: C,
    updated_by: C,
) -> Result<(), DbErr>
where
    T: IntoTableRef + 'static,
    C: IntoIden + 'static,
{
    manager
        .alter_table(
            Table::alter()
                .table(table)
                .drop_column(created_by)
                .drop_column(updated_by)
                .to_owned(),
        )
        .await
}
