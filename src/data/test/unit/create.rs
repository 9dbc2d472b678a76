use super::*;

/// Tests creating a new unit.
///
/// Verifies that the repository inserts a unit with the given id and type
/// and places it in the default starting position.
///
/// Expected: Ok with unit in (operations, ready_for_loading)
#[tokio::test]
async fn creates_unit_in_default_position() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_unitflow_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UnitRepository::new(db);
    let unit = repo
        .create(CreateUnitParams {
            id: "TRK-100".to_string(),
            unit_type: "truck".to_string(),
        })
        .await?;

    assert_eq!(unit.id, "TRK-100");
    assert_eq!(unit.unit_type, "truck");
    assert_eq!(unit.current_department, Department::Operations);
    assert_eq!(unit.current_section, Section::ReadyForLoading);

    Ok(())
}

/// Tests creating a unit with a taken id.
///
/// Verifies that the repository maps the unique constraint violation on the
/// primary key to a conflict instead of a raw database error.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_unitflow_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::unit::UnitFactory::new(db).id("TRK-100").build().await?;

    let repo = UnitRepository::new(db);
    let result = repo
        .create(CreateUnitParams {
            id: "TRK-100".to_string(),
            unit_type: "trailer".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}
