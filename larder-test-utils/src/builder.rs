//! Declarative test builder for test environment setup.
//!
//! Configuration methods chain together and all queued operations execute
//! during the final `build()` call: tables first, then fixtures.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{
    error::TestError,
    fixtures::{catalog, user},
    setup::TestSetup,
};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_catalog_tables: bool,

    categories: Vec<(String, String)>,          // (name, type)
    units: Vec<(String, String, i32)>,          // (name, abbreviation, base)
    ingredients: Vec<(String, String)>,         // (name, type)
    recipes: Vec<String>,                       // name
    users_with_sessions: usize,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_catalog_tables: false,
            categories: Vec::new(),
            units: Vec::new(),
            ingredients: Vec::new(),
            recipes: Vec::new(),
            users_with_sessions: 0,
        }
    }

    /// Create all seven application tables (catalog plus users/sessions).
    pub fn with_catalog_tables(mut self) -> Self {
        self.include_catalog_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Queue a category fixture for insertion during `build()`.
    pub fn with_category(mut self, name: impl Into<String>, category_type: impl Into<String>) -> Self {
        self.categories.push((name.into(), category_type.into()));
        self
    }

    /// Queue a unit fixture for insertion during `build()`.
    pub fn with_unit(
        mut self,
        name: impl Into<String>,
        abbreviation: impl Into<String>,
        base: i32,
    ) -> Self {
        self.units.push((name.into(), abbreviation.into(), base));
        self
    }

    /// Queue an ingredient fixture for insertion during `build()`.
    pub fn with_ingredient(
        mut self,
        name: impl Into<String>,
        ingredient_type: impl Into<String>,
    ) -> Self {
        self.ingredients.push((name.into(), ingredient_type.into()));
        self
    }

    /// Queue a recipe fixture for insertion during `build()`.
    pub fn with_recipe(mut self, name: impl Into<String>) -> Self {
        self.recipes.push(name.into());
        self
    }

    /// Queue a default user with an active session, for endpoints that
    /// require a bearer token.
    pub fn with_user_session(mut self) -> Self {
        self.users_with_sessions += 1;
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let setup = TestSetup::new().await?;

        let mut all_tables = Vec::new();

        if self.include_catalog_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Category),
                schema.create_table_from_entity(entity::prelude::Unit),
                schema.create_table_from_entity(entity::prelude::Ingredient),
                schema.create_table_from_entity(entity::prelude::Recipe),
                schema.create_table_from_entity(entity::prelude::RecipeIngredient),
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Session),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        let db = &setup.state.db;

        for (name, category_type) in self.categories {
            catalog::insert_category(db, &name, &category_type).await?;
        }

        for (name, abbreviation, base) in self.units {
            catalog::insert_unit(db, &name, &abbreviation, base).await?;
        }

        for (name, ingredient_type) in self.ingredients {
            catalog::insert_ingredient(db, &name, &ingredient_type).await?;
        }

        for name in self.recipes {
            catalog::insert_recipe(db, &name).await?;
        }

        for _ in 0..self.users_with_sessions {
            user::insert_user_with_session(db).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
