//! Database repository layer for all domain entities.
//!
//! Repositories use SeaORM entity models internally and return domain models
//! to keep the data layer separated from business logic. Entity-to-domain
//! conversion (including parsing stored catalog strings) happens here.
//!
//! The movement engine's transactional write path lives in
//! `service::movement`, not here: the unit-state update and the ledger append
//! must share a transaction.

pub mod employee;
pub mod movement;
pub mod unit;

#[cfg(test)]
mod test;
