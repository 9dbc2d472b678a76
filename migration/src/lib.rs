pub use sea_orm_migration::prelude::*;

mod m20260810_000001_create_employee_table;
mod m20260810_000002_create_unit_table;
mod m20260810_000003_create_movement_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260810_000001_create_employee_table::Migration),
            Box::new(m20260810_000002_create_unit_table::Migration),
            Box::new(m20260810_000003_create_movement_table::Migration),
        ]
    }
}
