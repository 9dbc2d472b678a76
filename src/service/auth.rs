//! Login verification with dual credential encoding.
//!
//! The employee table is mid-migration from legacy plaintext passwords to
//! bcrypt hashes, so verification tries plaintext equality first and falls
//! back to a bcrypt comparison. The fallback goes away once every stored
//! credential is a hash.

use sea_orm::DatabaseConnection;

use crate::{
    data::employee::EmployeeRepository,
    error::{auth::AuthError, AppError},
    model::employee::Employee,
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verifies a username/password pair.
    ///
    /// # Returns
    /// - `Ok(Employee)` - Credentials valid; the password is already stripped
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown username or
    ///   password mismatch (indistinguishable to the caller)
    pub async fn login(&self, username: &str, password: &str) -> Result<Employee, AppError> {
        let repo = EmployeeRepository::new(self.db);

        let account = repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AuthError::InvalidCredentials(username.to_string()))?;

        if verify_password(password, &account.password) {
            tracing::debug!(username, "login successful");
            Employee::from_entity(account)
        } else {
            Err(AuthError::InvalidCredentials(username.to_string()).into())
        }
    }
}

/// Checks `password` against a stored credential that is either a legacy
/// plaintext value or a bcrypt hash. A stored value that is not a valid
/// bcrypt hash simply fails the fallback comparison.
fn verify_password(password: &str, stored: &str) -> bool {
    if password == stored {
        return true;
    }

    bcrypt::verify(password, stored).unwrap_or(false)
}
