use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::model::auth::{SESSION_STATUS_ACTIVE, SESSION_STATUS_REVOKED};

pub struct SessionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SessionRepository<'a, C> {
    /// Creates a new instance of [`SessionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Opens an active session for the user with the given token
    pub async fn create(
        &self,
        user_id: i32,
        token: &str,
    ) -> Result<entity::session::Model, DbErr> {
        let session = entity::session::ActiveModel {
            id_user: ActiveValue::Set(user_id),
            token: ActiveValue::Set(token.to_string()),
            status: ActiveValue::Set(SESSION_STATUS_ACTIVE.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        session.insert(self.db).await
    }

    /// Token uniqueness is assumed rather than enforced; returns the earliest
    /// active match.
    pub async fn find_active_by_token(
        &self,
        token: &str,
    ) -> Result<Option<entity::session::Model>, DbErr> {
        entity::prelude::Session::find()
            .filter(entity::session::Column::Token.eq(token))
            .filter(entity::session::Column::Status.eq(SESSION_STATUS_ACTIVE))
            .one(self.db)
            .await
    }

    /// Marks a session revoked, invalidating its token
    pub async fn revoke(&self, session_id: i32) -> Result<entity::session::Model, DbErr> {
        let session = entity::session::ActiveModel {
            id: ActiveValue::Unchanged(session_id),
            status: ActiveValue::Set(SESSION_STATUS_REVOKED.to_string()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        session.update(self.db).await
    }
}
