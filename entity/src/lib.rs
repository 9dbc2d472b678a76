//! SeaORM entity models for the unitflow database schema.
//!
//! Entities map one-to-one onto the tables created by the `migration` crate.
//! Conversion to domain models happens at the repository boundary in the
//! server crate, never here.

pub mod employee;
pub mod movement;
pub mod prelude;
pub mod unit;
