use thiserror::Error;

/// Errors that can occur while setting up or using a test context.
#[derive(Debug, Error)]
pub enum TestError {
    /// Database connection or query failure during test setup.
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}
