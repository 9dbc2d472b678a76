use super::*;

/// Tests updating a unit's type label.
///
/// Verifies that only the type changes; the workflow position and timestamp
/// stay untouched.
///
/// Expected: Ok with new type, same position
#[tokio::test]
async fn updates_type_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_unitflow_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let before = factory::unit::UnitFactory::new(db)
        .id("TRK-1")
        .unit_type("truck")
        .build()
        .await?;

    let repo = UnitRepository::new(db);
    let updated = repo.update_type("TRK-1", "tanker".to_string()).await?;

    assert_eq!(updated.unit_type, "tanker");
    assert_eq!(updated.current_department, Department::Operations);
    assert_eq!(updated.current_section, Section::ReadyForLoading);
    assert_eq!(updated.last_movement_time, before.last_movement_time);

    Ok(())
}

/// Tests updating a missing unit.
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

    let result = UnitRepository::new(db)
        .update_type("NOPE", "truck".to_string())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
