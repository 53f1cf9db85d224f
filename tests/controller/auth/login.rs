//! Tests for the login endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use larder::{controller::auth::login, model::app::AppState, model::auth::LoginRequest};
use larder_test_utils::prelude::*;

use crate::controller::body_json;

fn login_request() -> LoginRequest {
    LoginRequest {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
    }
}

/// Expect 200 with a session token for a brand-new email
#[tokio::test]
async fn success_creates_user_and_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = login(State(test.to_app_state::<AppState>()), Json(login_request())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["message"], "Login successful.");
    assert_eq!(body["data"]["token"].as_str().unwrap().len(), 64);

    Ok(())
}

/// Expect the existing user to be reused on a second login
#[tokio::test]
async fn success_reuses_existing_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let first = login(State(test.to_app_state::<AppState>()), Json(login_request())).await;
    assert!(first.is_ok());

    let second = login(State(test.to_app_state::<AppState>()), Json(login_request())).await;
    assert!(second.is_ok());

    let next_user =
        fixtures::user::insert_user(&test.state.db, "Someone", "else@example.com").await?;

    // Two logins created one user, so the fixture lands on the second id
    assert_eq!(next_user.id, 2);

    Ok(())
}

/// Expect 500 when the tables have not been created
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = login(State(test.to_app_state::<AppState>()), Json(login_request())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
