//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository)
//! layer. Plain CRUD endpoints call repositories directly; services exist
//! where there is actual logic to hold: the transactional movement engine,
//! credential verification and hashing, and the dashboard aggregations.

pub mod auth;
pub mod employee;
pub mod movement;
pub mod stats;
