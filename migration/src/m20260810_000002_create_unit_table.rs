use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Unit::Table)
                    .if_not_exists()
                    .col(string(Unit::Id).primary_key())
                    .col(string(Unit::Type))
                    .col(string(Unit::CurrentDepartment))
                    .col(string(Unit::CurrentSection))
                    .col(timestamp(Unit::LastMovementTime))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Unit::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Unit {
    #[sea_orm(iden = "units")]
    Table,
    Id,
    Type,
    CurrentDepartment,
    CurrentSection,
    LastMovementTime,
}
