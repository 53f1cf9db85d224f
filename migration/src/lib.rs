pub use sea_orm_migration::prelude::*;

mod m20250801_000001_categories;
mod m20250801_000002_units;
mod m20250801_000003_ingredients;
mod m20250801_000004_recipes;
mod m20250801_000005_recipe_ingredients;
mod m20250801_000006_users;
mod m20250801_000007_sessions;
mod m20250801_000008_audit_columns;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_000001_categories::Migration),
            Box::new(m20250801_000002_units::Migration),
            Box::new(m20250801_000003_ingredients::Migration),
            Box::new(m20250801_000004_recipes::Migration),
            Box::new(m20250801_000005_recipe_ingredients::Migration),
            Box::new(m20250801_000006_users::Migration),
            Box::new(m20250801_000007_sessions::Migration),
            Box::new(m20250801_000008_audit_columns::Migration),
        ]
    }
}
