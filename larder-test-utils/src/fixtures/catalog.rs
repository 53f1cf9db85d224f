//! Fixture helpers for the catalog tables.
//!
//! Each helper inserts one row through the entity layer and returns the
//! persisted model, so tests can reference generated ids directly.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait};

use crate::error::TestError;

pub async fn insert_category<C: ConnectionTrait>(
    db: &C,
    name: &str,
    category_type: &str,
) -> Result<entity::category::Model, TestError> {
    let model = entity::category::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        r#type: ActiveValue::Set(category_type.to_string()),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(model.insert(db).await?)
}

pub async fn insert_unit<C: ConnectionTrait>(
    db: &C,
    name: &str,
    abbreviation: &str,
    base: i32,
) -> Result<entity::unit::Model, TestError> {
    let model = entity::unit::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        abbreviation: ActiveValue::Set(abbreviation.to_string()),
        base: ActiveValue::Set(base),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(model.insert(db).await?)
}

pub async fn insert_ingredient<C: ConnectionTrait>(
    db: &C,
    name: &str,
    ingredient_type: &str,
) -> Result<entity::ingredient::Model, TestError> {
    let model = entity::ingredient::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        description: ActiveValue::Set(None),
        r#type: ActiveValue::Set(ingredient_type.to_string()),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(model.insert(db).await?)
}

pub async fn insert_recipe<C: ConnectionTrait>(
    db: &C,
    name: &str,
) -> Result<entity::recipe::Model, TestError> {
    let model = entity::recipe::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        description: ActiveValue::Set(None),
        period: ActiveValue::Set("dinner".to_string()),
        r#type: ActiveValue::Set("main".to_string()),
        presentation: ActiveValue::Set("plated".to_string()),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(model.insert(db).await?)
}

/// Links an ingredient onto a recipe. The referenced recipe, ingredient, and
/// unit rows must already exist to satisfy the foreign keys.
pub async fn insert_composition_row<C: ConnectionTrait>(
    db: &C,
    recipe_id: i32,
    ingredient_id: i32,
    quantity: f64,
    unit_id: i32,
) -> Result<entity::recipe_ingredient::Model, TestError> {
    let model = entity::recipe_ingredient::ActiveModel {
        id_recipe: ActiveValue::Set(recipe_id),
        id_ingredient: ActiveValue::Set(ingredient_id),
        quantity: ActiveValue::Set(quantity),
        id_unit: ActiveValue::Set(unit_id),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(model.insert(db).await?)
}
