use super::*;
use chrono::{Duration, Utc};

/// Tests listing all units.
///
/// Verifies that units come back ordered by last movement time, most
/// recently moved first.
///
/// Expected: Ok with units in descending last_movement_time order
#[tokio::test]
async fn orders_by_most_recent_movement() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_unitflow_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    factory::unit::UnitFactory::new(db)
        .id("OLD")
        .last_movement_time(now - Duration::days(2))
        .build()
        .await?;
    factory::unit::UnitFactory::new(db)
        .id("NEW")
        .last_movement_time(now)
        .build()
        .await?;
    factory::unit::UnitFactory::new(db)
        .id("MID")
        .last_movement_time(now - Duration::days(1))
        .build()
        .await?;

    let units = UnitRepository::new(db).get_all().await?;
    let ids: Vec<&str> = units.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, vec!["NEW", "MID", "OLD"]);

    Ok(())
}

/// Tests listing with no units stored.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_units() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_unitflow_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let units = UnitRepository::new(db).get_all().await?;
    assert!(units.is_empty());

    Ok(())
}
