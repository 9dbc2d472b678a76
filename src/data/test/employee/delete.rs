use super::*;
use sea_orm::EntityTrait;

/// Tests deleting an employee account.
///
/// Expected: Ok with row removed
#[tokio::test]
async fn deletes_employee() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_unitflow_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::employee::create_employee(db).await?;

    EmployeeRepository::new(db).delete(account.id).await?;

    let check = entity::prelude::Employee::find_by_id(account.id)
        .one(db)
        .await
        .map_err(AppError::DbErr)?;
    assert!(check.is_none());

    Ok(())
}

/// Tests deleting an employee leaves their ledger rows behind.
///
/// Expected: Ok with movement records still present
#[tokio::test]
async fn keeps_ledger_rows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_unitflow_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::employee::create_employee(db).await?;
    let unit = factory::unit::create_unit(db).await?;
    factory::movement::create_movement(db, &unit.id, account.id).await?;

    EmployeeRepository::new(db).delete(account.id).await?;

    let remaining = entity::prelude::Movement::find()
        .all(db)
        .await
        .map_err(AppError::DbErr)?;
    assert_eq!(remaining.len(), 1);

    Ok(())
}

/// Tests deleting a missing employee.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_employee() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_unitflow_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = EmployeeRepository::new(db).delete(999).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
