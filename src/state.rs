//! Application state shared across all request handlers.
//!
//! `AppState` is initialized once during startup and cloned cheaply for each
//! request through Axum's state extraction: the database connection is a
//! pooled handle and the lock registry is reference-counted.

use sea_orm::DatabaseConnection;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Per-unit serialization of movement operations.
///
/// The movement engine must never run two moves for the same unit id
/// concurrently: both would read the same old state and append contradictory
/// `from_*` values to the ledger. Holding the guard returned by `lock` keeps
/// at most one move in flight per unit while moves on different units proceed
/// in parallel.
#[derive(Clone, Default)]
pub struct UnitLocks {
    inner: Arc<Mutex<HashMap<String, Arc<Mutex<()>>>>>,
}

impl UnitLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the lock for `unit_id`, creating it on first use.
    ///
    /// The registry mutex is held only long enough to fetch or insert the
    /// per-unit entry, so contended units never block unrelated ones.
    pub async fn lock(&self, unit_id: &str) -> OwnedMutexGuard<()> {
        let entry = {
            let mut registry = self.inner.lock().await;
            registry
                .entry(unit_id.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };

        entry.lock_owned().await
    }
}

/// Application state containing shared resources and dependencies.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Registry of per-unit movement locks.
    pub unit_locks: UnitLocks,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            unit_locks: UnitLocks::new(),
        }
    }
}
