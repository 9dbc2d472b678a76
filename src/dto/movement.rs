use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{Department, Section};

/// Query parameters of `GET /api/movements`. All filters are optional and
/// combined with AND; `dateTo` is inclusive through the end of that day.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct MovementQueryDto {
    pub unit_id: Option<String>,
    pub employee_id: Option<i32>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

/// One ledger record joined with the operator's display name.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct MovementDto {
    pub id: i32,
    pub unit_id: String,
    pub employee_id: i32,
    pub employee_name: String,
    pub movement_type: String,
    pub from_department: Department,
    pub to_department: Department,
    pub from_section: Section,
    pub to_section: Section,
    pub notes: String,
    pub timestamp: DateTime<Utc>,
}
