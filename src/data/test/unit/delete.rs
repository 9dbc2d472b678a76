use super::*;
use sea_orm::EntityTrait;

/// Tests hard-deleting a unit.
///
/// Verifies that the unit row is gone after deletion.
///
/// Expected: Ok with unit removed
#[tokio::test]
async fn deletes_unit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_unitflow_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::unit::UnitFactory::new(db).id("TRK-1").build().await?;

    UnitRepository::new(db).delete("TRK-1").await?;

    let check = entity::prelude::Unit::find_by_id("TRK-1").one(db).await;
    assert!(check.unwrap().is_none());

    Ok(())
}

/// Tests deleting a unit leaves its ledger rows behind.
///
/// Verifies that movement records referencing the unit survive the hard
/// delete, since the ledger has no foreign key to units.
///
/// Expected: Ok with ledger row still present
#[tokio::test]
async fn keeps_ledger_rows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_unitflow_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::employee::create_employee(db).await?;
    let unit = factory::unit::create_unit(db).await?;
    factory::movement::create_movement(db, &unit.id, employee.id).await?;

    UnitRepository::new(db).delete(&unit.id).await?;

    let remaining = entity::prelude::Movement::find().all(db).await;
    assert_eq!(remaining.unwrap().len(), 1);

    Ok(())
}

/// Tests deleting a missing unit.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_unit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_unitflow_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UnitRepository::new(db).delete("NOPE").await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
