pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_account_table;
mod m20250601_000002_create_class_offering_table;
mod m20250601_000003_create_cart_entry_table;
mod m20250601_000004_create_enrollment_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_account_table::Migration),
            Box::new(m20250601_000002_create_class_offering_table::Migration),
            Box::new(m20250601_000003_create_cart_entry_table::Migration),
            Box::new(m20250601_000004_create_enrollment_table::Migration),
        ]
    }
}
