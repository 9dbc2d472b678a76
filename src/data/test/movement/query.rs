use super::*;
use chrono::{NaiveDate, TimeZone, Utc};
use sea_orm::EntityTrait;

/// Tests querying the full ledger without filters.
///
/// Verifies that every record comes back, most recent first, each joined
/// with the operator's display name.
///
/// Expected: Ok with all records in descending timestamp order
#[tokio::test]
async fn returns_all_records_most_recent_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_unitflow_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::employee::create_employee(db).await?;
    let unit = factory::unit::create_unit(db).await?;

    let older = Utc.with_ymd_and_hms(2026, 8, 14, 9, 0, 0).unwrap();
    let newer = Utc.with_ymd_and_hms(2026, 8, 15, 9, 0, 0).unwrap();
    factory::movement::MovementFactory::new(db, &unit.id, employee.id)
        .timestamp(older)
        .build()
        .await?;
    factory::movement::MovementFactory::new(db, &unit.id, employee.id)
        .timestamp(newer)
        .build()
        .await?;

    let records = MovementRepository::new(db)
        .query(MovementFilter::default())
        .await?;

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].timestamp, newer);
    assert_eq!(records[1].timestamp, older);
    assert_eq!(records[0].employee_name, employee.name);

    Ok(())
}

/// Tests filtering the ledger by unit.
///
/// Expected: Ok with only the matching unit's records
#[tokio::test]
async fn filters_by_unit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_unitflow_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::employee::create_employee(db).await?;
    let first = factory::unit::create_unit(db).await?;
    let second = factory::unit::create_unit(db).await?;
    factory::movement::create_movement(db, &first.id, employee.id).await?;
    factory::movement::create_movement(db, &second.id, employee.id).await?;

    let records = MovementRepository::new(db)
        .query(MovementFilter {
            unit_id: Some(first.id.clone()),
            ..Default::default()
        })
        .await?;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].unit_id, first.id);

    Ok(())
}

/// Tests filtering the ledger by operator.
///
/// Expected: Ok with only the matching operator's records
#[tokio::test]
async fn filters_by_employee() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_unitflow_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::employee::create_employee(db).await?;
    let second = factory::employee::create_employee(db).await?;
    let unit = factory::unit::create_unit(db).await?;
    factory::movement::create_movement(db, &unit.id, first.id).await?;
    factory::movement::create_movement(db, &unit.id, second.id).await?;

    let records = MovementRepository::new(db)
        .query(MovementFilter {
            employee_id: Some(second.id),
            ..Default::default()
        })
        .await?;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].employee_id, second.id);
    assert_eq!(records[0].employee_name, second.name);

    Ok(())
}

/// Tests the date range boundaries.
///
/// Verifies that `date_from` starts at midnight of its day and `date_to`
/// runs through 23:59:59 of its day, so a record one second into the next
/// day falls outside the range.
///
/// Expected: Ok with only the in-range records
#[tokio::test]
async fn date_range_is_inclusive_of_whole_days() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_unitflow_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::employee::create_employee(db).await?;
    let unit = factory::unit::create_unit(db).await?;

    let factory_at = |ts| {
        factory::movement::MovementFactory::new(db, &unit.id, employee.id)
            .timestamp(ts)
            .build()
    };
    // Day before the range, first second of the range, last second of the
    // range, first second after the range.
    factory_at(Utc.with_ymd_and_hms(2026, 8, 14, 23, 59, 59).unwrap()).await?;
    factory_at(Utc.with_ymd_and_hms(2026, 8, 15, 0, 0, 0).unwrap()).await?;
    factory_at(Utc.with_ymd_and_hms(2026, 8, 16, 23, 59, 59).unwrap()).await?;
    factory_at(Utc.with_ymd_and_hms(2026, 8, 17, 0, 0, 1).unwrap()).await?;

    let records = MovementRepository::new(db)
        .query(MovementFilter {
            date_from: NaiveDate::from_ymd_opt(2026, 8, 15),
            date_to: NaiveDate::from_ymd_opt(2026, 8, 16),
            ..Default::default()
        })
        .await?;

    assert_eq!(records.len(), 2);
    assert_eq!(
        records[0].timestamp,
        Utc.with_ymd_and_hms(2026, 8, 16, 23, 59, 59).unwrap()
    );
    assert_eq!(
        records[1].timestamp,
        Utc.with_ymd_and_hms(2026, 8, 15, 0, 0, 0).unwrap()
    );

    Ok(())
}

/// Tests querying records whose operator was deleted.
///
/// Verifies that the join degrades to an empty display name instead of
/// dropping the record.
///
/// Expected: Ok with the record kept and an empty employee_name
#[tokio::test]
async fn keeps_records_of_deleted_operators() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_unitflow_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = factory::employee::create_employee(db).await?;
    let unit = factory::unit::create_unit(db).await?;
    factory::movement::create_movement(db, &unit.id, employee.id).await?;

    entity::prelude::Employee::delete_by_id(employee.id)
        .exec(db)
        .await
        .map_err(AppError::DbErr)?;

    let records = MovementRepository::new(db)
        .query(MovementFilter::default())
        .await?;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].employee_id, employee.id);
    assert_eq!(records[0].employee_name, "");

    Ok(())
}
