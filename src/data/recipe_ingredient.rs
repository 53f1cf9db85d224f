use chrono::{NaiveDateTime, Utc};
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::model::composition::CompositionWrite;

pub struct RecipeIngredientRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RecipeIngredientRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn list_by_recipe(
        &self,
        recipe_id: i32,
    ) -> Result<Vec<entity::recipe_ingredient::Model>, DbErr> {
        entity::prelude::RecipeIngredient::find()
            .filter(entity::recipe_ingredient::Column::IdRecipe.eq(recipe_id))
            .all(self.db)
            .await
    }

    /// True when any composition row of the recipe was written after
    /// `reference_time`.
    pub async fn updated_after(
        &self,
        recipe_id: i32,
        reference_time: NaiveDateTime,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::RecipeIngredient::find()
            .filter(entity::recipe_ingredient::Column::IdRecipe.eq(recipe_id))
            .filter(entity::recipe_ingredient::Column::UpdatedAt.gt(reference_time))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts or updates composition rows for one recipe and returns the
    /// persisted rows. The parent recipe id is stamped onto every row.
    pub async fn upsert_many(
        &self,
        recipe_id: i32,
        rows: Vec<CompositionWrite>,
        actor: Option<i32>,
    ) -> Result<Vec<entity::recipe_ingredient::Model>, DbErr> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let now = Utc::now().naive_utc();
        let (with_id, without_id): (Vec<_>, Vec<_>) = rows
            .into_iter()
            .partition(|row| row.id_recipe_ingredient.is_some());

        let mut persisted = Vec::new();

        if !without_id.is_empty() {
            let models = without_id
                .into_iter()
                .map(|row| to_active_model(recipe_id, row, now, actor));

            let mut created = entity::prelude::RecipeIngredient::insert_many(models)
                .exec_with_returning(self.db)
                .await?;
            persisted.append(&mut created);
        }

        if !with_id.is_empty() {
            let models = with_id
                .into_iter()
                .map(|row| to_active_model(recipe_id, row, now, actor));

            let mut updated = entity::prelude::RecipeIngredient::insert_many(models)
                .on_conflict(
                    OnConflict::column(entity::recipe_ingredient::Column::Id)
                        .update_columns([
                            entity::recipe_ingredient::Column::IdRecipe,
                            entity::recipe_ingredient::Column::IdIngredient,
                            entity::recipe_ingredient::Column::Quantity,
                            entity::recipe_ingredient::Column::IdUnit,
                            entity::recipe_ingredient::Column::UpdatedAt,
                            entity::recipe_ingredient::Column::UpdatedBy,
                        ])
                        .to_owned(),
                )
                .exec_with_returning(self.db)
                .await?;
            persisted.append(&mut updated);
        }

        Ok(persisted)
    }

    /// Deletes composition rows by id and returns the deleted rows.
    pub async fn delete_by_ids(
        &self,
        ids: &[i32],
    ) -> Result<Vec<entity::recipe_ingredient::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::RecipeIngredient::delete_many()
            .filter(entity::recipe_ingredient::Column::Id.is_in(ids.iter().copied()))
            .exec_with_returning(self.db)
            .await
    }

    /// Deletes every composition row of the given recipes, returning the
    /// deleted rows. Run before deleting the recipes themselves.
    pub async fn delete_by_recipes(
        &self,
        recipe_ids: &[i32],
    ) -> Result<Vec<entity::recipe_ingredient::Model>, DbErr> {
        if recipe_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::RecipeIngredient::delete_many()
            .filter(entity::recipe_ingredient::Column::IdRecipe.is_in(recipe_ids.iter().copied()))
            .exec_with_returning(self.db)
            .await
    }
}

fn to_active_model(
    recipe_id: i32,
    row: CompositionWrite,
    now: NaiveDateTime,
    actor: Option<i32>,
) -> entity::recipe_ingredient::ActiveModel {
    entity::recipe_ingredient::ActiveModel {
        id: row
            .id_recipe_ingredient
            .map_or(ActiveValue::NotSet, ActiveValue::Set),
        id_recipe: ActiveValue::Set(recipe_id),
        id_ingredient: ActiveValue::Set(row.id_ingredient),
        quantity: ActiveValue::Set(row.quantity),
        id_unit: ActiveValue::Set(row.id_unit),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        created_by: ActiveValue::Set(actor),
        updated_by: ActiveValue::Set(actor),
    }
}
