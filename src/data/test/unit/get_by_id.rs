use super::*;

/// Tests fetching an existing unit by id.
///
/// Verifies that the repository returns the stored unit with its catalog
/// position parsed into domain enums.
///
/// Expected: Ok(Some(unit))
#[tokio::test]
async fn returns_existing_unit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_unitflow_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::unit::UnitFactory::new(db)
        .id("TRK-1")
        .department("technical")
        .section("in_maintenance")
        .build()
        .await?;

    let unit = UnitRepository::new(db).get_by_id("TRK-1").await?.unwrap();
    assert_eq!(unit.id, "TRK-1");
    assert_eq!(unit.current_department, Department::Technical);
    assert_eq!(unit.current_section, Section::InMaintenance);

    Ok(())
}

/// Tests fetching a missing unit by id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_unit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_unitflow_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let unit = UnitRepository::new(db).get_by_id("NOPE").await?;
    assert!(unit.is_none());

    Ok(())
}
