use super::*;

/// Tests updating an employee's profile fields.
///
/// Verifies that a `None` password leaves the stored credential untouched
/// while the other fields change.
///
/// Expected: Ok with profile updated and credential intact
#[tokio::test]
async fn updates_profile_keeping_credential() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_unitflow_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::employee::EmployeeFactory::new(db)
        .username("azam")
        .password("original")
        .build()
        .await?;

    let repo = EmployeeRepository::new(db);
    let updated = repo
        .update(UpdateEmployeeParams {
            id: account.id,
            name: "Azam Updated".to_string(),
            username: "azam".to_string(),
            department: Department::Commercial,
            work_page: "commercial.html".to_string(),
            password: None,
        })
        .await?;

    assert_eq!(updated.name, "Azam Updated");
    assert_eq!(updated.department, Department::Commercial);

    let stored = repo.find_by_username("azam").await?.unwrap();
    assert_eq!(stored.password, "original");

    Ok(())
}

/// Tests replacing the stored credential.
///
/// Expected: Ok with the new password stored
#[tokio::test]
async fn replaces_credential_when_given() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_unitflow_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::employee::EmployeeFactory::new(db)
        .username("azam")
        .password("original")
        .build()
        .await?;

    let repo = EmployeeRepository::new(db);
    repo.update(UpdateEmployeeParams {
        id: account.id,
        name: account.name.clone(),
        username: "azam".to_string(),
        department: Department::Operations,
        work_page: account.work_page.clone(),
        password: Some("replacement".to_string()),
    })
    .await?;

    let stored = repo.find_by_username("azam").await?.unwrap();
    assert_eq!(stored.password, "replacement");

    Ok(())
}

/// Tests renaming to a taken username.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_taken_username() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_unitflow_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::employee::EmployeeFactory::new(db)
        .username("azam")
        .build()
        .await?;
    let other = factory::employee::EmployeeFactory::new(db)
        .username("sufyan")
        .build()
        .await?;

    let result = EmployeeRepository::new(db)
        .update(UpdateEmployeeParams {
            id: other.id,
            name: other.name.clone(),
            username: "azam".to_string(),
            department: Department::Operations,
            work_page: other.work_page.clone(),
            password: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests updating a missing employee.
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

    let result = EmployeeRepository::new(db)
        .update(UpdateEmployeeParams {
            id: 999,
            name: "Nobody".to_string(),
            username: "nobody".to_string(),
            department: Department::Operations,
            work_page: "operations.html".to_string(),
            password: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
