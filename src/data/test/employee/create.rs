use super::*;

/// Tests creating a new employee account.
///
/// Verifies that the repository inserts the row and returns the domain
/// model without the credential.
///
/// Expected: Ok with employee created
#[tokio::test]
async fn creates_employee() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_unitflow_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EmployeeRepository::new(db);
    let employee = repo
        .create(CreateEmployeeParams {
            name: "Azam".to_string(),
            username: "azam".to_string(),
            password: "hashed".to_string(),
            department: Department::Operations,
            work_page: "operations.html".to_string(),
        })
        .await?;

    assert_eq!(employee.name, "Azam");
    assert_eq!(employee.username, "azam");
    assert_eq!(employee.department, Department::Operations);
    assert_eq!(employee.work_page, "operations.html");

    Ok(())
}

/// Tests creating an employee with a taken username.
///
/// Verifies that the unique constraint on username maps to a conflict.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), AppError> {
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

    let result = EmployeeRepository::new(db)
        .create(CreateEmployeeParams {
            name: "Other".to_string(),
            username: "azam".to_string(),
            password: "hashed".to_string(),
            department: Department::Technical,
            work_page: "technical.html".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}
