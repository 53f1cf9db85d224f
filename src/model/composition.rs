//! Shapes for recipe composition: the joined recipe/ingredient/unit rows the
//! client renders as a grid, and the composite submit/delete payloads.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::catalog::{RecipeDto, RecipeWrite};

/// One row of the composition grid: an ingredient, outer-merged with the
/// quantity and unit it carries on a given recipe. Ingredients not on the
/// recipe carry nulls in the quantity/unit columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CompositionRow {
    pub id_recipe_ingredient: Option<i32>,
    pub id_ingredient: i32,
    pub name: String,
    pub description: Option<String>,
    pub r#type: String,
    pub quantity: Option<f64>,
    pub id_unit: Option<i32>,
    /// Unit name, when the ingredient is on the recipe
    pub unit: Option<String>,
}

impl CompositionRow {
    /// Row for an ingredient that is not on the recipe (blank grid cell).
    pub fn vacant(ingredient: entity::ingredient::Model) -> Self {
        Self {
            id_recipe_ingredient: None,
            id_ingredient: ingredient.id,
            name: ingredient.name,
            description: ingredient.description,
            r#type: ingredient.r#type,
            quantity: None,
            id_unit: None,
            unit: None,
        }
    }

    /// Row for an ingredient present on the recipe.
    pub fn occupied(
        ingredient: entity::ingredient::Model,
        link: &entity::recipe_ingredient::Model,
        unit: &entity::unit::Model,
    ) -> Self {
        Self {
            id_recipe_ingredient: Some(link.id),
            id_ingredient: ingredient.id,
            name: ingredient.name,
            description: ingredient.description,
            r#type: ingredient.r#type,
            quantity: Some(link.quantity),
            id_unit: Some(unit.id),
            unit: Some(unit.name.clone()),
        }
    }
}

/// One ingredient-quantity row of a submitted composition. An absent
/// `id_recipe_ingredient` inserts; a present one updates. The parent recipe
/// id is taken from the submission, not the row.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompositionWrite {
    pub id_recipe_ingredient: Option<i32>,
    pub id_ingredient: i32,
    pub quantity: f64,
    pub id_unit: i32,
}

/// Payload of the composite submit endpoint: the recipe form plus the full
/// list of composition rows as currently composed. Rows stored on the recipe
/// but absent here are deleted (server-side diff).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmitRecipeRequest {
    pub form_data: RecipeWrite,
    #[serde(default)]
    pub recipe_ingredients_rows: Vec<CompositionWrite>,
    /// When set alongside `form_data.id`, the submission is rejected as stale
    /// if the recipe or its composition changed after this instant.
    pub reference_time: Option<NaiveDateTime>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmitRecipeData {
    pub form_data: RecipeDto,
    pub recipes_data: Vec<RecipeDto>,
    pub recipe_ingredients_loaded: Vec<CompositionRow>,
    pub recipe_ingredients_snapshot: Vec<CompositionRow>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteRecipeData {
    pub recipes_data: Vec<RecipeDto>,
    pub recipe_ingredients_data: Vec<CompositionRow>,
}

/// A recipe with its composition embedded, for single-recipe reads.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RecipeWithIngredients {
    #[serde(flatten)]
    pub recipe: RecipeDto,
    pub ingredients: Vec<CompositionRow>,
}
