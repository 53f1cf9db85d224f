use super::*;

/// Expect Ok when upserting new categories
#[tokio::test]
async fn inserts_new_rows() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Category)?;

    let category_repo = CategoryRepository::new(&test.state.db);
    let result = category_repo
        .upsert_many(
            vec![
                category_write(None, "Flours", "ingredient"),
                category_write(None, "Breakfast", "recipe"),
            ],
            None,
        )
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let created = result.unwrap();

    assert_eq!(created.len(), 2);
    assert!(created.iter().all(|row| row.id > 0));

    Ok(())
}

/// Expect Ok & update when upserting existing categories; created_at is
/// preserved while updated_at refreshes
#[tokio::test]
async fn updates_existing_rows() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Category)?;

    let category_repo = CategoryRepository::new(&test.state.db);
    let initial = category_repo
        .upsert_many(vec![category_write(None, "Flours", "ingredient")], None)
        .await?;

    let initial_entry = initial.first().expect("category not found");
    let initial_created_at = initial_entry.created_at;
    let initial_updated_at = initial_entry.updated_at;

    let latest = category_repo
        .upsert_many(
            vec![category_write(Some(initial_entry.id), "Grains", "ingredient")],
            None,
        )
        .await?;

    let latest_entry = latest.first().expect("category not found");

    assert_eq!(latest_entry.id, initial_entry.id);
    assert_eq!(latest_entry.name, "Grains");
    assert_eq!(latest_entry.created_at, initial_created_at);
    assert!(latest_entry.updated_at > initial_updated_at);

    Ok(())
}

/// Expect Ok when upserting a mix of new and existing categories
#[tokio::test]
async fn upserts_mixed_new_and_existing_rows() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Category)?;

    let category_repo = CategoryRepository::new(&test.state.db);
    let initial = category_repo
        .upsert_many(vec![category_write(None, "Flours", "ingredient")], None)
        .await?;
    let existing = initial.first().expect("category not found");

    let result = category_repo
        .upsert_many(
            vec![
                category_write(Some(existing.id), "Grains", "ingredient"),
                category_write(None, "Breakfast", "recipe"),
            ],
            None,
        )
        .await?;

    assert_eq!(result.len(), 2);

    let updated = result
        .iter()
        .find(|row| row.id == existing.id)
        .expect("updated category not found");
    assert_eq!(updated.name, "Grains");
    assert_eq!(updated.created_at, existing.created_at);

    let inserted = result
        .iter()
        .find(|row| row.id != existing.id)
        .expect("inserted category not found");
    assert_eq!(inserted.name, "Breakfast");

    Ok(())
}

/// Expect Ok with empty result when upserting an empty vector
#[tokio::test]
async fn handles_empty_input() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Category)?;

    let category_repo = CategoryRepository::new(&test.state.db);
    let result = category_repo.upsert_many(vec![], None).await?;

    assert_eq!(result.len(), 0);

    Ok(())
}

/// The acting user stamps created_by on insert and updated_by on update,
/// while the original created_by survives
#[tokio::test]
async fn stamps_audit_actors() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Category)?;

    let category_repo = CategoryRepository::new(&test.state.db);
    let initial = category_repo
        .upsert_many(vec![category_write(None, "Flours", "ingredient")], Some(1))
        .await?;
    let existing = initial.first().expect("category not found");

    assert_eq!(existing.created_by, Some(1));
    assert_eq!(existing.updated_by, Some(1));

    let latest = category_repo
        .upsert_many(
            vec![category_write(Some(existing.id), "Grains", "ingredient")],
            Some(2),
        )
        .await?;
    let updated = latest.first().expect("category not found");

    assert_eq!(updated.created_by, Some(1));
    assert_eq!(updated.updated_by, Some(2));

    Ok(())
}

/// Expect Error when the table has not been created
#[tokio::test]
async fn errors_without_tables() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let category_repo = CategoryRepository::new(&test.state.db);
    let result = category_repo
        .upsert_many(vec![category_write(None, "Flours", "ingredient")], None)
        .await;

    assert!(result.is_err());

    Ok(())
}
