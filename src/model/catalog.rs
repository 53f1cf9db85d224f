//! Typed request/response structs for the CRUD surface.
//!
//! Each entity has a `Write` shape accepted by the bulk upsert endpoints
//! (an absent `id` inserts, a present `id` updates) and a `Dto` shape
//! returned to clients, converted from the persisted SeaORM model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryWrite {
    pub id: Option<i32>,
    pub name: String,
    pub r#type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
    pub r#type: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
}

impl From<entity::category::Model> for CategoryDto {
    fn from(model: entity::category::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            r#type: model.r#type,
            created_at: model.created_at,
            updated_at: model.updated_at,
            created_by: model.created_by,
            updated_by: model.updated_by,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UnitWrite {
    pub id: Option<i32>,
    pub name: String,
    pub abbreviation: String,
    /// Conversion factor to the canonical unit of the unit's category
    pub base: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UnitDto {
    pub id: i32,
    pub name: String,
    pub abbreviation: String,
    pub base: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
}

impl From<entity::unit::Model> for UnitDto {
    fn from(model: entity::unit::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            abbreviation: model.abbreviation,
            base: model.base,
            created_at: model.created_at,
            updated_at: model.updated_at,
            created_by: model.created_by,
            updated_by: model.updated_by,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IngredientWrite {
    pub id: Option<i32>,
    pub name: String,
    pub description: Option<String>,
    pub r#type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IngredientDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub r#type: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
}

impl From<entity::ingredient::Model> for IngredientDto {
    fn from(model: entity::ingredient::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            r#type: model.r#type,
            created_at: model.created_at,
            updated_at: model.updated_at,
            created_by: model.created_by,
            updated_by: model.updated_by,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecipeWrite {
    pub id: Option<i32>,
    pub name: String,
    pub description: Option<String>,
    pub period: String,
    pub r#type: String,
    pub presentation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecipeDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub period: String,
    pub r#type: String,
    pub presentation: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
}

impl From<entity::recipe::Model> for RecipeDto {
    fn from(model: entity::recipe::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            period: model.period,
            r#type: model.r#type,
            presentation: model.presentation,
            created_at: model.created_at,
            updated_at: model.updated_at,
            created_by: model.created_by,
            updated_by: model.updated_by,
        }
    }
}
