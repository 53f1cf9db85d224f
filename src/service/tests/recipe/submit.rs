use chrono::{Duration, Utc};
use larder_test_utils::test_setup_with_catalog_tables;

use super::*;
use crate::{
    data::recipe_ingredient::RecipeIngredientRepository,
    error::{data::DataError, Error},
    service::recipe::RecipeService,
};

/// A valid submission creates exactly one recipe row and one composition row
/// per submitted ingredient
#[tokio::test]
async fn creates_recipe_and_composition_rows() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let (ingredients, gram) = seed_catalog(&test.state.db).await?;

    let service = RecipeService::new(&test.state.db);
    let result = service
        .submit(
            submission(
                recipe_form(None, "Pancakes"),
                vec![
                    composition_row(None, ingredients[0].id, 200.0, gram.id),
                    composition_row(None, ingredients[1].id, 50.0, gram.id),
                ],
            ),
            None,
        )
        .await;

    assert!(result.is_ok(), "Error: {:?}", result.err());
    let data = result.unwrap();

    assert_eq!(data.form_data.name, "Pancakes");
    assert_eq!(data.recipes_data.len(), 1);
    assert_eq!(data.recipe_ingredients_snapshot.len(), 2);

    let stored = RecipeIngredientRepository::new(&test.state.db)
        .list_by_recipe(data.form_data.id)
        .await?;
    assert_eq!(stored.len(), 2);

    Ok(())
}

/// Resubmitting with the same primary key updates the row, refreshes
/// updated_at, and leaves created_at unchanged
#[tokio::test]
async fn resubmission_preserves_created_at() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let (ingredients, gram) = seed_catalog(&test.state.db).await?;

    let service = RecipeService::new(&test.state.db);
    let initial = service
        .submit(
            submission(
                recipe_form(None, "Pancakes"),
                vec![composition_row(None, ingredients[0].id, 200.0, gram.id)],
            ),
            None,
        )
        .await
        .unwrap();

    let latest = service
        .submit(
            submission(
                recipe_form(Some(initial.form_data.id), "Crepes"),
                initial
                    .recipe_ingredients_snapshot
                    .iter()
                    .map(|row| {
                        composition_row(
                            row.id_recipe_ingredient,
                            row.id_ingredient,
                            row.quantity.unwrap(),
                            row.id_unit.unwrap(),
                        )
                    })
                    .collect(),
            ),
            None,
        )
        .await
        .unwrap();

    assert_eq!(latest.form_data.id, initial.form_data.id);
    assert_eq!(latest.form_data.name, "Crepes");
    assert_eq!(latest.form_data.created_at, initial.form_data.created_at);
    assert!(latest.form_data.updated_at > initial.form_data.updated_at);
    assert_eq!(latest.recipes_data.len(), 1);

    Ok(())
}

/// The server-side diff inserts rows without an id, updates rows with a known
/// id, and deletes stored rows absent from the input
#[tokio::test]
async fn reconciles_composition_rows() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let (ingredients, gram) = seed_catalog(&test.state.db).await?;

    let service = RecipeService::new(&test.state.db);
    let initial = service
        .submit(
            submission(
                recipe_form(None, "Pancakes"),
                vec![
                    composition_row(None, ingredients[0].id, 200.0, gram.id),
                    composition_row(None, ingredients[1].id, 50.0, gram.id),
                ],
            ),
            None,
        )
        .await
        .unwrap();

    let kept = initial
        .recipe_ingredients_snapshot
        .iter()
        .find(|row| row.id_ingredient == ingredients[0].id)
        .expect("kept row not found");
    let dropped = initial
        .recipe_ingredients_snapshot
        .iter()
        .find(|row| row.id_ingredient == ingredients[1].id)
        .expect("dropped row not found");

    // Keep the first row with a new quantity, drop the second, add a third
    let latest = service
        .submit(
            submission(
                recipe_form(Some(initial.form_data.id), "Pancakes"),
                vec![
                    composition_row(
                        kept.id_recipe_ingredient,
                        kept.id_ingredient,
                        250.0,
                        gram.id,
                    ),
                    composition_row(None, ingredients[2].id, 3.0, gram.id),
                ],
            ),
            None,
        )
        .await
        .unwrap();

    assert_eq!(latest.recipe_ingredients_snapshot.len(), 2);

    let stored = RecipeIngredientRepository::new(&test.state.db)
        .list_by_recipe(initial.form_data.id)
        .await?;
    assert_eq!(stored.len(), 2);

    let kept_stored = stored
        .iter()
        .find(|row| Some(row.id) == kept.id_recipe_ingredient)
        .expect("kept row missing after reconcile");
    assert_eq!(kept_stored.quantity, 250.0);

    assert!(!stored
        .iter()
        .any(|row| Some(row.id) == dropped.id_recipe_ingredient));

    Ok(())
}

/// A reference time earlier than the stored updated_at rejects the submission
#[tokio::test]
async fn stale_reference_time_is_rejected() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let (ingredients, gram) = seed_catalog(&test.state.db).await?;

    let service = RecipeService::new(&test.state.db);
    let initial = service
        .submit(
            submission(
                recipe_form(None, "Pancakes"),
                vec![composition_row(None, ingredients[0].id, 200.0, gram.id)],
            ),
            None,
        )
        .await
        .unwrap();

    let mut resubmission = submission(
        recipe_form(Some(initial.form_data.id), "Pancakes"),
        Vec::new(),
    );
    resubmission.reference_time = Some(initial.form_data.updated_at - Duration::hours(1));

    let result = service.submit(resubmission, None).await;

    assert!(matches!(
        result,
        Err(Error::DataError(DataError::StaleData))
    ));

    Ok(())
}

/// A reference time later than every stored write passes the stale check
#[tokio::test]
async fn fresh_reference_time_is_accepted() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let (ingredients, gram) = seed_catalog(&test.state.db).await?;

    let service = RecipeService::new(&test.state.db);
    let initial = service
        .submit(
            submission(
                recipe_form(None, "Pancakes"),
                vec![composition_row(None, ingredients[0].id, 200.0, gram.id)],
            ),
            None,
        )
        .await
        .unwrap();

    let mut resubmission = submission(
        recipe_form(Some(initial.form_data.id), "Pancakes"),
        initial
            .recipe_ingredients_snapshot
            .iter()
            .map(|row| {
                composition_row(
                    row.id_recipe_ingredient,
                    row.id_ingredient,
                    row.quantity.unwrap(),
                    row.id_unit.unwrap(),
                )
            })
            .collect(),
    );
    resubmission.reference_time = Some(Utc::now().naive_utc() + Duration::hours(1));

    let result = service.submit(resubmission, None).await;

    assert!(result.is_ok(), "Error: {:?}", result.err());

    Ok(())
}

/// A composition row referencing a missing ingredient rolls back the whole
/// submission, including the recipe upsert
#[tokio::test]
async fn rolls_back_on_foreign_key_violation() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let (_, gram) = seed_catalog(&test.state.db).await?;

    let missing_ingredient_id = 999;

    let service = RecipeService::new(&test.state.db);
    let result = service
        .submit(
            submission(
                recipe_form(None, "Pancakes"),
                vec![composition_row(None, missing_ingredient_id, 200.0, gram.id)],
            ),
            None,
        )
        .await;

    assert!(result.is_err());

    let recipes = crate::data::recipe::RecipeRepository::new(&test.state.db)
        .list()
        .await?;
    assert!(recipes.is_empty());

    Ok(())
}

/// The audit actor stamps created_by/updated_by on the recipe
#[tokio::test]
async fn stamps_audit_actor() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let (ingredients, gram) = seed_catalog(&test.state.db).await?;

    let actor = 7;

    let service = RecipeService::new(&test.state.db);
    let data = service
        .submit(
            submission(
                recipe_form(None, "Pancakes"),
                vec![composition_row(None, ingredients[0].id, 200.0, gram.id)],
            ),
            Some(actor),
        )
        .await
        .unwrap();

    assert_eq!(data.form_data.created_by, Some(actor));
    assert_eq!(data.form_data.updated_by, Some(actor));

    Ok(())
}
