//! HTTP request handlers.
//!
//! Controllers validate and convert DTOs, call into repositories or services,
//! and map results back to JSON responses. All error mapping happens through
//! `AppError::into_response`.

pub mod auth;
pub mod employee;
pub mod movement;
pub mod stats;
pub mod unit;
