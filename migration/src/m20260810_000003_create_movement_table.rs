use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Movement::Table)
                    .if_not_exists()
                    .col(pk_auto(Movement::Id))
                    // No foreign keys: the ledger is append-only and its rows
                    // must survive hard-deleted units and employees.
                    .col(string(Movement::UnitId))
                    .col(integer(Movement::EmployeeId))
                    .col(string(Movement::MovementType))
                    .col(string(Movement::FromDepartment))
                    .col(string(Movement::ToDepartment))
                    .col(string(Movement::FromSection))
                    .col(string(Movement::ToSection))
                    .col(string(Movement::Notes).default(""))
                    .col(
                        timestamp(Movement::Timestamp)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Movement::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Movement {
    #[sea_orm(iden = "movements")]
    Table,
    Id,
    UnitId,
    EmployeeId,
    MovementType,
    FromDepartment,
    ToDepartment,
    FromSection,
    ToSection,
    Notes,
    Timestamp,
}
