use chrono::{NaiveDateTime, Utc};
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::{data::expect_single, error::data::DataError, model::catalog::CategoryWrite};

pub struct CategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<entity::category::Model>, DbErr> {
        entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Id)
            .all(self.db)
            .await
    }

    /// Inserts or updates categories and returns the persisted rows, with
    /// generated ids and timestamps. Rows carrying an id take the
    /// conflict-update path; `created_at`/`created_by` survive updates.
    pub async fn upsert_many(
        &self,
        rows: Vec<CategoryWrite>,
        actor: Option<i32>,
    ) -> Result<Vec<entity::category::Model>, DbErr> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let now = Utc::now().naive_utc();
        let (with_id, without_id): (Vec<_>, Vec<_>) =
            rows.into_iter().partition(|row| row.id.is_some());

        let mut persisted = Vec::new();

        if !without_id.is_empty() {
            let models = without_id.into_iter().map(|row| to_active_model(row, now, actor));

            let mut created = entity::prelude::Category::insert_many(models)
                .exec_with_returning(self.db)
                .await?;
            persisted.append(&mut created);
        }

        if !with_id.is_empty() {
            let models = with_id.into_iter().map(|row| to_active_model(row, now, actor));

            let mut updated = entity::prelude::Category::insert_many(models)
                .on_conflict(
                    OnConflict::column(entity::category::Column::Id)
                        .update_columns([
                            entity::category::Column::Name,
                            entity::category::Column::Type,
                            entity::category::Column::UpdatedAt,
                            entity::category::Column::UpdatedBy,
                        ])
                        .to_owned(),
                )
                .exec_with_returning(self.db)
                .await?;
            persisted.append(&mut updated);
        }

        Ok(persisted)
    }

    /// Single-row variant of [`Self::upsert_many`].
    pub async fn upsert_one(
        &self,
        row: CategoryWrite,
        actor: Option<i32>,
    ) -> Result<entity::category::Model, DataError> {
        let rows = self.upsert_many(vec![row], actor).await?;

        expect_single(rows)
    }

    /// Deletes categories by id and returns the deleted rows.
    pub async fn delete_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::category::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Category::delete_many()
            .filter(entity::category::Column::Id.is_in(ids.iter().copied()))
            .exec_with_returning(self.db)
            .await
    }
}

fn to_active_model(
    row: CategoryWrite,
    now: NaiveDateTime,
    actor: Option<i32>,
) -> entity::category::ActiveModel {
    entity::category::ActiveModel {
        id: row.id.map_or(ActiveValue::NotSet, ActiveValue::Set),
        name: ActiveValue::Set(row.name),
        r#type: ActiveValue::Set(row.r#type),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        created_by: ActiveValue::Set(actor),
        updated_by: ActiveValue::Set(actor),
    }
}
