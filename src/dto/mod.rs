//! Wire-format DTOs for the HTTP API.
//!
//! Field spellings follow the contract of the existing external callers:
//! entity attributes stay snake_case (`current_department`, `last_movement_time`),
//! while request parameters and dashboard keys keep their original camelCase
//! names (`targetDepartment`, `unitsInOps`). Conversion to and from domain
//! models happens at the controller boundary.

pub mod api;
pub mod auth;
pub mod employee;
pub mod movement;
pub mod stats;
pub mod unit;
