use chrono::{NaiveDateTime, Utc};
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::{data::expect_single, error::data::DataError, model::catalog::RecipeWrite};

pub struct RecipeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RecipeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<entity::recipe::Model>, DbErr> {
        entity::prelude::Recipe::find()
            .order_by_asc(entity::recipe::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::recipe::Model>, DbErr> {
        entity::prelude::Recipe::find_by_id(id).one(self.db).await
    }

    /// True when the recipe was written after `reference_time`. Used by the
    /// composite submit to reject stale form data.
    pub async fn updated_after(
        &self,
        id: i32,
        reference_time: NaiveDateTime,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Recipe::find()
            .filter(entity::recipe::Column::Id.eq(id))
            .filter(entity::recipe::Column::UpdatedAt.gt(reference_time))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn upsert_many(
        &self,
        rows: Vec<RecipeWrite>,
        actor: Option<i32>,
    ) -> Result<Vec<entity::recipe::Model>, DbErr> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let now = Utc::now().naive_utc();
        let (with_id, without_id): (Vec<_>, Vec<_>) =
            rows.into_iter().partition(|row| row.id.is_some());

        let mut persisted = Vec::new();

        if !without_id.is_empty() {
            let models = without_id.into_iter().map(|row| to_active_model(row, now, actor));

            let mut created = entity::prelude::Recipe::insert_many(models)
                .exec_with_returning(self.db)
                .await?;
            persisted.append(&mut created);
        }

        if !with_id.is_empty() {
            let models = with_id.into_iter().map(|row| to_active_model(row, now, actor));

            let mut updated = entity::prelude::Recipe::insert_many(models)
                .on_conflict(
                    OnConflict::column(entity::recipe::Column::Id)
                        .update_columns([
                            entity::recipe::Column::Name,
                            entity::recipe::Column::Description,
                            entity::recipe::Column::Period,
                            entity::recipe::Column::Type,
                            entity::recipe::Column::Presentation,
                            entity::recipe::Column::UpdatedAt,
                            entity::recipe::Column::UpdatedBy,
                        ])
                        .to_owned(),
                )
                .exec_with_returning(self.db)
                .await?;
            persisted.append(&mut updated);
        }

        Ok(persisted)
    }

    /// Single-row variant of [`Self::upsert_many`]; the composite submit
    /// relies on it to get exactly one persisted recipe back.
    pub async fn upsert_one(
        &self,
        row: RecipeWrite,
        actor: Option<i32>,
    ) -> Result<entity::recipe::Model, DataError> {
        let rows = self.upsert_many(vec![row], actor).await?;

        expect_single(rows)
    }

    /// Deletes recipes by id and returns the deleted rows. Fails with a
    /// foreign-key violation while composition rows still reference the
    /// recipe; the recipe service deletes those first.
    pub async fn delete_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::recipe::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Recipe::delete_many()
            .filter(entity::recipe::Column::Id.is_in(ids.iter().copied()))
            .exec_with_returning(self.db)
            .await
    }
}

fn to_active_model(
    row: RecipeWrite,
    now: NaiveDateTime,
    actor: Option<i32>,
) -> entity::recipe::ActiveModel {
    entity::recipe::ActiveModel {
        id: row.id.map_or(ActiveValue::NotSet, ActiveValue::Set),
        name: ActiveValue::Set(row.name),
        description: ActiveValue::Set(row.description),
        period: ActiveValue::Set(row.period),
        r#type: ActiveValue::Set(row.r#type),
        presentation: ActiveValue::Set(row.presentation),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        created_by: ActiveValue::Set(actor),
        updated_by: ActiveValue::Set(actor),
    }
}
