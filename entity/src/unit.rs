use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// A tracked unit with its current workflow position.
///
/// Department and section are stored as their snake_case wire names and
/// parsed into catalog enums at the repository boundary.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "units")]
pub struct Model {
    /// Caller-assigned unit identifier (e.g. a plate or fleet number).
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Free-form category label ("truck", "trailer", ...).
    #[sea_orm(column_name = "type")]
    pub unit_type: String,
    pub current_department: String,
    pub current_section: String,
    pub last_movement_time: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
