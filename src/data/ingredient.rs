use chrono::{NaiveDateTime, Utc};
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::{data::expect_single, error::data::DataError, model::catalog::IngredientWrite};

pub struct IngredientRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> IngredientRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<entity::ingredient::Model>, DbErr> {
        entity::prelude::Ingredient::find()
            .order_by_asc(entity::ingredient::Column::Id)
            .all(self.db)
            .await
    }

    /// Composition rows are rendered in ingredient-name order.
    pub async fn list_by_name(&self) -> Result<Vec<entity::ingredient::Model>, DbErr> {
        entity::prelude::Ingredient::find()
            .order_by_asc(entity::ingredient::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::ingredient::Model>, DbErr> {
        entity::prelude::Ingredient::find()
            .filter(entity::ingredient::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }

    pub async fn upsert_many(
        &self,
        rows: Vec<IngredientWrite>,
        actor: Option<i32>,
    ) -> Result<Vec<entity::ingredient::Model>, DbErr> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let now = Utc::now().naive_utc();
        let (with_id, without_id): (Vec<_>, Vec<_>) =
            rows.into_iter().partition(|row| row.id.is_some());

        let mut persisted = Vec::new();

        if !without_id.is_empty() {
            let models = without_id.into_iter().map(|row| to_active_model(row, now, actor));

            let mut created = entity::prelude::Ingredient::insert_many(models)
                .exec_with_returning(self.db)
                .await?;
            persisted.append(&mut created);
        }

        if !with_id.is_empty() {
            let models = with_id.into_iter().map(|row| to_active_model(row, now, actor));

            let mut updated = entity::prelude::Ingredient::insert_many(models)
                .on_conflict(
                    OnConflict::column(entity::ingredient::Column::Id)
                        .update_columns([
                            entity::ingredient::Column::Name,
                            entity::ingredient::Column::Description,
                            entity::ingredient::Column::Type,
                            entity::ingredient::Column::UpdatedAt,
                            entity::ingredient::Column::UpdatedBy,
                        ])
                        .to_owned(),
                )
                .exec_with_returning(self.db)
                .await?;
            persisted.append(&mut updated);
        }

        Ok(persisted)
    }

    pub async fn upsert_one(
        &self,
        row: IngredientWrite,
        actor: Option<i32>,
    ) -> Result<entity::ingredient::Model, DataError> {
        let rows = self.upsert_many(vec![row], actor).await?;

        expect_single(rows)
    }

    pub async fn delete_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::ingredient::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Ingredient::delete_many()
            .filter(entity::ingredient::Column::Id.is_in(ids.iter().copied()))
            .exec_with_returning(self.db)
            .await
    }
}

fn to_active_model(
    row: IngredientWrite,
    now: NaiveDateTime,
    actor: Option<i32>,
) -> entity::ingredient::ActiveModel {
    entity::ingredient::ActiveModel {
        id: row.id.map_or(ActiveValue::NotSet, ActiveValue::Set),
        name: ActiveValue::Set(row.name),
        description: ActiveValue::Set(row.description),
        r#type: ActiveValue::Set(row.r#type),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        created_by: ActiveValue::Set(actor),
        updated_by: ActiveValue::Set(actor),
    }
}
