//! Tests for the recipes CRUD endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use larder::{
    controller::recipe::{delete_recipes, upsert_recipes},
    model::{api::DeleteRequest, app::AppState, catalog::RecipeWrite},
};
use larder_test_utils::{constant::TEST_SESSION_TOKEN, prelude::*};

use crate::controller::{bearer_headers, body_json};

fn recipe_write(name: &str) -> RecipeWrite {
    RecipeWrite {
        id: None,
        name: name.to_string(),
        description: None,
        period: "breakfast".to_string(),
        r#type: "sweet".to_string(),
        presentation: "stacked".to_string(),
    }
}

/// Expect 200 and persisted rows on bulk upsert
#[tokio::test]
async fn success_upserts_recipes() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user_session()
        .build()
        .await?;

    let result = upsert_recipes(
        State(test.to_app_state::<AppState>()),
        bearer_headers(TEST_SESSION_TOKEN),
        Json(vec![recipe_write("Pancakes"), recipe_write("Waffles")]),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    Ok(())
}

/// Deleting a recipe that still has composition rows collapses into the 400
/// integrity error at the HTTP boundary
#[tokio::test]
async fn integrity_error_with_composition_rows() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user_session()
        .build()
        .await?;

    let recipe = fixtures::catalog::insert_recipe(&test.state.db, "Pancakes").await?;
    let flour = fixtures::catalog::insert_ingredient(&test.state.db, "Flour", "dry").await?;
    let gram = fixtures::catalog::insert_unit(&test.state.db, "Gram", "g", 1).await?;
    fixtures::catalog::insert_composition_row(&test.state.db, recipe.id, flour.id, 200.0, gram.id)
        .await?;

    let result = delete_recipes(
        State(test.to_app_state::<AppState>()),
        bearer_headers(TEST_SESSION_TOKEN),
        Json(DeleteRequest {
            ids: vec![recipe.id],
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = body_json(resp).await;
    assert_eq!(body["error"], "Integrity error.");

    Ok(())
}

/// Expect 200 once the composition rows are gone
#[tokio::test]
async fn success_deletes_childless_recipe() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user_session()
        .with_recipe("Pancakes")
        .build()
        .await?;

    let result = delete_recipes(
        State(test.to_app_state::<AppState>()),
        bearer_headers(TEST_SESSION_TOKEN),
        Json(DeleteRequest { ids: vec![1] }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
