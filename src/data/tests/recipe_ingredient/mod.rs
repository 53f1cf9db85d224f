use larder_test_utils::prelude::*;
use sea_orm::DatabaseConnection;

use crate::{
    data::recipe_ingredient::RecipeIngredientRepository, model::composition::CompositionWrite,
};

mod delete_by_recipe;

/// Inserts the recipe, ingredients, and unit required by the foreign keys.
async fn insert_foreign_key_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::recipe::Model,
        Vec<entity::ingredient::Model>,
        entity::unit::Model,
    ),
    TestError,
> {
    let recipe = fixtures::catalog::insert_recipe(db, "Pancakes").await?;
    let flour = fixtures::catalog::insert_ingredient(db, "Flour", "dry").await?;
    let eggs = fixtures::catalog::insert_ingredient(db, "Eggs", "protein").await?;
    let gram = fixtures::catalog::insert_unit(db, "Gram", "g", 1).await?;

    Ok((recipe, vec![flour, eggs], gram))
}

fn composition_write(
    id: Option<i32>,
    id_ingredient: i32,
    quantity: f64,
    id_unit: i32,
) -> CompositionWrite {
    CompositionWrite {
        id_recipe_ingredient: id,
        id_ingredient,
        quantity,
        id_unit,
    }
}
