use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{Department, Section};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CreateUnitDto {
    pub id: String,
    #[serde(rename = "type")]
    pub unit_type: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct UpdateUnitDto {
    #[serde(rename = "type")]
    pub unit_type: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct UnitDto {
    pub id: String,
    #[serde(rename = "type")]
    pub unit_type: String,
    pub current_department: Department,
    pub current_section: Section,
    pub last_movement_time: DateTime<Utc>,
}

/// Body of `PUT /api/units/{id}/move`. Parameter names follow the original
/// wire contract, hence the camelCase rename.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MoveUnitDto {
    pub target_department: Department,
    pub target_section: Section,
    pub employee_id: i32,
    pub movement_type: String,
    pub notes: Option<String>,
}
