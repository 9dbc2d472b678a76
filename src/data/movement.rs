//! Movement ledger repository (read side).
//!
//! Ledger rows are appended only inside the movement engine's transaction;
//! this repository covers the filtered audit queries.

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::{
    error::AppError,
    model::movement::{Movement, MovementFilter},
};

pub struct MovementRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MovementRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Queries the ledger with conjunctive optional filters, most recent first,
    /// each record joined with the operator's display name.
    ///
    /// `date_from` matches from midnight of its day; `date_to` is inclusive
    /// through 23:59:59 of its day.
    pub async fn query(&self, filter: MovementFilter) -> Result<Vec<Movement>, AppError> {
        let mut query = entity::prelude::Movement::find()
            .find_also_related(entity::prelude::Employee)
            .order_by_desc(entity::movement::Column::Timestamp);

        if let Some(unit_id) = filter.unit_id {
            query = query.filter(entity::movement::Column::UnitId.eq(unit_id));
        }
        if let Some(employee_id) = filter.employee_id {
            query = query.filter(entity::movement::Column::EmployeeId.eq(employee_id));
        }
        if let Some(date_from) = filter.date_from {
            let start = date_from.and_hms_opt(0, 0, 0).unwrap().and_utc();
            query = query.filter(entity::movement::Column::Timestamp.gte(start));
        }
        if let Some(date_to) = filter.date_to {
            let end = date_to.and_hms_opt(23, 59, 59).unwrap().and_utc();
            query = query.filter(entity::movement::Column::Timestamp.lte(end));
        }

        query
            .all(self.db)
            .await?
            .into_iter()
            .map(|(movement, employee)| Movement::from_entity(movement, employee))
            .collect()
    }
}
