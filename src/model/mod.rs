//! Domain models and operation parameter types.
//!
//! Domain models are converted from entity models at the repository boundary
//! (where the stored department/section strings are parsed into catalog enums)
//! and transformed to DTOs at the controller boundary.

pub mod employee;
pub mod movement;
pub mod unit;
