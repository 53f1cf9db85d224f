use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Authentication session bookkeeping. `id_user` intentionally carries no
/// foreign key constraint, matching the persisted schema contract.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sessions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub id_user: i32,
    pub token: String,
    pub status: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
