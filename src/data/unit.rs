use chrono::{NaiveDateTime, Utc};
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::{data::expect_single, error::data::DataError, model::catalog::UnitWrite};

pub struct UnitRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UnitRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<entity::unit::Model>, DbErr> {
        entity::prelude::Unit::find()
            .order_by_asc(entity::unit::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::unit::Model>, DbErr> {
        entity::prelude::Unit::find()
            .filter(entity::unit::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }

    pub async fn upsert_many(
        &self,
        rows: Vec<UnitWrite>,
        actor: Option<i32>,
    ) -> Result<Vec<entity::unit::Model>, DbErr> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let now = Utc::now().naive_utc();
        let (with_id, without_id): (Vec<_>, Vec<_>) =
            rows.into_iter().partition(|row| row.id.is_some());

        let mut persisted = Vec::new();

        if !without_id.is_empty() {
            let models = without_id.into_iter().map(|row| to_active_model(row, now, actor));

            let mut created = entity::prelude::Unit::insert_many(models)
                .exec_with_returning(self.db)
                .await?;
            persisted.append(&mut created);
        }

        if !with_id.is_empty() {
            let models = with_id.into_iter().map(|row| to_active_model(row, now, actor));

            let mut updated = entity::prelude::Unit::insert_many(models)
                .on_conflict(
                    OnConflict::column(entity::unit::Column::Id)
                        .update_columns([
                            entity::unit::Column::Name,
                            entity::unit::Column::Abbreviation,
                            entity::unit::Column::Base,
                            entity::unit::Column::UpdatedAt,
                            entity::unit::Column::UpdatedBy,
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
        row: UnitWrite,
        actor: Option<i32>,
    ) -> Result<entity::unit::Model, DataError> {
        let rows = self.upsert_many(vec![row], actor).await?;

        expect_single(rows)
    }

    pub async fn delete_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::unit::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Unit::delete_many()
            .filter(entity::unit::Column::Id.is_in(ids.iter().copied()))
            .exec_with_returning(self.db)
            .await
    }
}

fn to_active_model(
    row: UnitWrite,
    now: NaiveDateTime,
    actor: Option<i32>,
) -> entity::unit::ActiveModel {
    entity::unit::ActiveModel {
        id: row.id.map_or(ActiveValue::NotSet, ActiveValue::Set),
        name: ActiveValue::Set(row.name),
        abbreviation: ActiveValue::Set(row.abbreviation),
        base: ActiveValue::Set(row.base),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        created_by: ActiveValue::Set(actor),
        updated_by: ActiveValue::Set(actor),
    }
}
