use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait};

use crate::{
    constant::{TEST_SESSION_TOKEN, TEST_USER_EMAIL, TEST_USER_NAME},
    error::TestError,
};

pub async fn insert_user<C: ConnectionTrait>(
    db: &C,
    name: &str,
    email: &str,
) -> Result<entity::user::Model, TestError> {
    let model = entity::user::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        email: ActiveValue::Set(email.to_string()),
        status: ActiveValue::Set("active".to_string()),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(model.insert(db).await?)
}

pub async fn insert_session<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    token: &str,
    status: &str,
) -> Result<entity::session::Model, TestError> {
    let model = entity::session::ActiveModel {
        id_user: ActiveValue::Set(user_id),
        token: ActiveValue::Set(token.to_string()),
        status: ActiveValue::Set(status.to_string()),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(model.insert(db).await?)
}

/// Inserts a default user with an active session and returns both, for tests
/// that only need a valid bearer token.
pub async fn insert_user_with_session<C: ConnectionTrait>(
    db: &C,
) -> Result<(entity::user::Model, entity::session::Model), TestError> {
    let user = insert_user(db, TEST_USER_NAME, TEST_USER_EMAIL).await?;
    let session = insert_session(db, user.id, TEST_SESSION_TOKEN, "active").await?;

    Ok((user, session))
}
