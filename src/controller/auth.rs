use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    controller::util::session::bearer_token,
    error::Error,
    model::{
        api::{ApiResponse, ErrorDto},
        app::AppState,
        auth::{LoginRequest, TokenDto},
    },
    service::auth::AuthService,
};

pub static AUTH_TAG: &str = "auth";

/// Find or create the user for the given email and open a session
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session opened", body = ApiResponse<TokenDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, Error> {
    let session = AuthService::new(&state.db).login(request).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse {
            data: TokenDto {
                token: session.token,
            },
            message: "Login successful.".to_string(),
        }),
    ))
}

/// Invalidate the bearer session
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Session revoked", body = ApiResponse<TokenDto>),
        (status = 401, description = "Missing or invalid session token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, Error> {
    let token = bearer_token(&headers)?;

    let session = AuthService::new(&state.db).logout(&token).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse {
            data: TokenDto {
                token: session.token,
            },
            message: "Logout successful.".to_string(),
        }),
    ))
}
