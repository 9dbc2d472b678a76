use super::*;

/// Tests looking up the full employee row for login verification.
///
/// Verifies that the stored credential is included, since the auth service
/// needs it for password comparison.
///
/// Expected: Ok(Some(entity)) with the stored password
#[tokio::test]
async fn returns_row_with_credential() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_unitflow_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::employee::EmployeeFactory::new(db)
        .username("azam")
        .password("azam123")
        .build()
        .await?;

    let row = EmployeeRepository::new(db)
        .find_by_username("azam")
        .await?
        .unwrap();

    assert_eq!(row.username, "azam");
    assert_eq!(row.password, "azam123");

    Ok(())
}

/// Tests looking up an unknown username.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_unitflow_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let row = EmployeeRepository::new(db).find_by_username("nobody").await?;
    assert!(row.is_none());

    Ok(())
}
