use rand::{distr::Alphanumeric, Rng};
use sea_orm::DatabaseConnection;

use crate::{
    data::{session::SessionRepository, user::UserRepository},
    error::{session::SessionError, Error},
    model::auth::{LoginRequest, SESSION_TOKEN_LENGTH},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds or creates the user for the given email and opens an active
    /// session with a fresh random token.
    pub async fn login(&self, request: LoginRequest) -> Result<entity::session::Model, Error> {
        let user_repository = UserRepository::new(self.db);
        let session_repository = SessionRepository::new(self.db);

        let user = match user_repository.find_by_email(&request.email).await? {
            Some(user) => user,
            None => {
                user_repository
                    .create(&request.name, &request.email)
                    .await?
            }
        };

        let token = generate_token();
        let session = session_repository.create(user.id, &token).await?;

        tracing::info!(user_id = %user.id, "Opened session");

        Ok(session)
    }

    /// Revokes the session matching the bearer token.
    pub async fn logout(&self, token: &str) -> Result<entity::session::Model, Error> {
        let session_repository = SessionRepository::new(self.db);

        let session = session_repository
            .find_active_by_token(token)
            .await?
            .ok_or(SessionError::InvalidToken)?;

        let session = session_repository.revoke(session.id).await?;

        tracing::info!(user_id = %session.id_user, "Revoked session");

        Ok(session)
    }

    /// Resolves a bearer token to its active session row. The session's
    /// `id_user` is the audit actor for the request.
    pub async fn validate(&self, token: &str) -> Result<entity::session::Model, Error> {
        let session_repository = SessionRepository::new(self.db);

        session_repository
            .find_active_by_token(token)
            .await?
            .ok_or_else(|| SessionError::InvalidToken.into())
    }
}

fn generate_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_TOKEN_LENGTH)
        .map(char::from)
        .collect()
}
