//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle required fields and
//! dependencies, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let employee = factory::employee::create_employee(&db).await?;
//!     let unit = factory::unit::create_unit(&db).await?;
//!
//!     // Ledger rows reference the unit and operator that produced them
//!     let record = factory::movement::create_movement(&db, &unit.id, employee.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let unit = factory::unit::UnitFactory::new(&db)
//!     .id("TRK-100")
//!     .unit_type("tanker")
//!     .department("fuel")
//!     .section("awaiting_refuel")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `employee` - Create employee account entities
//! - `unit` - Create tracked unit entities
//! - `movement` - Create movement ledger entities
//! - `helpers` - Shared utilities for unique test identifiers

pub mod employee;
pub mod helpers;
pub mod movement;
pub mod unit;

// Re-export commonly used factory functions for concise usage
pub use employee::create_employee;
pub use movement::create_movement;
pub use unit::create_unit;
