//! Composition queries: joins across recipes, recipe_ingredients,
//! ingredients, and units reshaped into the rows the client renders. The
//! merge/group work happens in memory over plain repository reads.

use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DbErr};

use crate::{
    data::{
        ingredient::IngredientRepository, recipe::RecipeRepository,
        recipe_ingredient::RecipeIngredientRepository, unit::UnitRepository,
    },
    model::composition::{CompositionRow, RecipeWithIngredients},
};

pub struct CompositionService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CompositionService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Every ingredient with blank quantity/unit columns: the composition of
    /// a recipe that does not exist yet.
    pub async fn empty(&self) -> Result<Vec<CompositionRow>, DbErr> {
        let ingredients = IngredientRepository::new(self.db).list_by_name().await?;

        Ok(ingredients.into_iter().map(CompositionRow::vacant).collect())
    }

    /// Every ingredient, outer-merged with the recipe's composition rows.
    /// Ingredients on the recipe carry quantity/unit; the rest carry nulls.
    pub async fn loaded(&self, recipe_id: i32) -> Result<Vec<CompositionRow>, DbErr> {
        let ingredients = IngredientRepository::new(self.db).list_by_name().await?;
        let on_recipe = self.links_by_ingredient(recipe_id).await?;

        Ok(ingredients
            .into_iter()
            .map(|ingredient| match on_recipe.get(&ingredient.id) {
                Some((link, unit)) => CompositionRow::occupied(ingredient, link, unit),
                None => CompositionRow::vacant(ingredient),
            })
            .collect())
    }

    /// Only the rows actually on the recipe, with ingredient and unit
    /// details, in ingredient-name order.
    pub async fn snapshot(&self, recipe_id: i32) -> Result<Vec<CompositionRow>, DbErr> {
        let links = RecipeIngredientRepository::new(self.db)
            .list_by_recipe(recipe_id)
            .await?;

        let ingredient_ids: Vec<i32> = links.iter().map(|link| link.id_ingredient).collect();
        let ingredients: HashMap<i32, entity::ingredient::Model> =
            IngredientRepository::new(self.db)
                .find_by_ids(&ingredient_ids)
                .await?
                .into_iter()
                .map(|ingredient| (ingredient.id, ingredient))
                .collect();

        let unit_ids: Vec<i32> = links.iter().map(|link| link.id_unit).collect();
        let units: HashMap<i32, entity::unit::Model> = UnitRepository::new(self.db)
            .find_by_ids(&unit_ids)
            .await?
            .into_iter()
            .map(|unit| (unit.id, unit))
            .collect();

        let mut rows: Vec<CompositionRow> = links
            .iter()
            .filter_map(|link| {
                let ingredient = ingredients.get(&link.id_ingredient)?;
                let unit = units.get(&link.id_unit)?;

                Some(CompositionRow::occupied(ingredient.clone(), link, unit))
            })
            .collect();

        rows.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(rows)
    }

    /// A recipe with its composition embedded, or `None` when the recipe
    /// does not exist.
    pub async fn recipe_with_ingredients(
        &self,
        recipe_id: i32,
    ) -> Result<Option<RecipeWithIngredients>, DbErr> {
        let recipe = match RecipeRepository::new(self.db).find_by_id(recipe_id).await? {
            Some(recipe) => recipe,
            None => return Ok(None),
        };

        let ingredients = self.snapshot(recipe_id).await?;

        Ok(Some(RecipeWithIngredients {
            recipe: recipe.into(),
            ingredients,
        }))
    }

    /// Index the recipe's composition rows (with their units) by ingredient id.
    async fn links_by_ingredient(
        &self,
        recipe_id: i32,
    ) -> Result<HashMap<i32, (entity::recipe_ingredient::Model, entity::unit::Model)>, DbErr> {
        let links = RecipeIngredientRepository::new(self.db)
            .list_by_recipe(recipe_id)
            .await?;

        let unit_ids: Vec<i32> = links.iter().map(|link| link.id_unit).collect();
        let units: HashMap<i32, entity::unit::Model> = UnitRepository::new(self.db)
            .find_by_ids(&unit_ids)
            .await?
            .into_iter()
            .map(|unit| (unit.id, unit))
            .collect();

        Ok(links
            .into_iter()
            .filter_map(|link| {
                let unit = units.get(&link.id_unit)?.clone();

                Some((link.id_ingredient, (link, unit)))
            })
            .collect())
    }
}
