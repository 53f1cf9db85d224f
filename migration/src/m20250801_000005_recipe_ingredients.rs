use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20250801_000002_units::Units, m20250801_000003_ingredients::Ingredients,
    m20250801_000004_recipes::Recipes,
};

static IDX_RECIPE_INGREDIENTS_ID_RECIPE: &str = "idx-recipe_ingredients-id_recipe";
static FK_RECIPE_INGREDIENTS_ID_RECIPE: &str = "fk-recipe_ingredients-id_recipe";
static FK_RECIPE_INGREDIENTS_ID_INGREDIENT: &str = "fk-recipe_ingredients-id_ingredient";
static FK_RECIPE_INGREDIENTS_ID_UNIT: &str = "fk-recipe_ingredients-id_unit";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RecipeIngredients::Table)
                    .if_not_exists()
                    .col(pk_auto(RecipeIngredients::Id))
                    .col(integer(RecipeIngredients::IdRecipe))
                    .col(integer(RecipeIngredients::IdIngredient))
                    .col(double(RecipeIngredients::Quantity))
                    .col(integer(RecipeIngredients::IdUnit))
                    .col(timestamp(RecipeIngredients::CreatedAt))
                    .col(timestamp(RecipeIngredients::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RECIPE_INGREDIENTS_ID_RECIPE)
                    .table(RecipeIngredients::Table)
                    .col(RecipeIngredients::IdRecipe)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RECIPE_INGREDIENTS_ID_RECIPE)
                    .from_tbl(RecipeIngredients::Table)
                    .from_col(RecipeIngredients::IdRecipe)
                    .to_tbl(Recipes::Table)
                    .to_col(Recipes::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RECIPE_INGREDIENTS_ID_INGREDIENT)
                    .from_tbl(RecipeIngredients::Table)
                    .from_col(RecipeIngredients::IdIngredient)
                    .to_tbl(Ingredients::Table)
                    .to_col(Ingredients::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RECIPE_INGREDIENTS_ID_UNIT)
                    .from_tbl(RecipeIngredients::Table)
                    .from_col(RecipeIngredients::IdUnit)
                    .to_tbl(Units::Table)
                    .to_col(Units::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_RECIPE_INGREDIENTS_ID_UNIT)
                    .table(RecipeIngredients::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_RECIPE_INGREDIENTS_ID_INGREDIENT)
                    .table(RecipeIngredients::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_RECIPE_INGREDIENTS_ID_RECIPE)
                    .table(RecipeIngredients::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RECIPE_INGREDIENTS_ID_RECIPE)
                    .table(RecipeIngredients::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RecipeIngredients::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum RecipeIngredients {
    Table,
    Id,
    IdRecipe,
    IdIngredient,
    Quantity,
    IdUnit,
    CreatedAt,
    UpdatedAt,
    CreatedBy,
    UpdatedBy,
}
