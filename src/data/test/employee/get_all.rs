use super::*;

/// Tests listing all employees.
///
/// Verifies that accounts come back ordered by display name.
///
/// Expected: Ok with employees in ascending name order
#[tokio::test]
async fn orders_by_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_unitflow_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::employee::EmployeeFactory::new(db)
        .name("Zafar")
        .build()
        .await?;
    factory::employee::EmployeeFactory::new(db)
        .name("Azam")
        .build()
        .await?;
    factory::employee::EmployeeFactory::new(db)
        .name("Sufyan")
        .build()
        .await?;

    let employees = EmployeeRepository::new(db).get_all().await?;
    let names: Vec<&str> = employees.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Azam", "Sufyan", "Zafar"]);

    Ok(())
}

/// Tests counting employee accounts.
///
/// Expected: Ok with the number of stored accounts
#[tokio::test]
async fn counts_employees() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_unitflow_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EmployeeRepository::new(db);
    assert_eq!(repo.count().await?, 0);

    factory::employee::create_employee(db).await?;
    factory::employee::create_employee(db).await?;

    assert_eq!(repo.count().await?, 2);

    Ok(())
}
