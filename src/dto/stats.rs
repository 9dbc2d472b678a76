use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::catalog::Section;

/// Dashboard headline counts (`GET /api/stats`).
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StatsDto {
    pub total_units: u64,
    pub units_in_ops: u64,
    pub units_in_tech: u64,
    pub total_employees: u64,
}

/// Full per-section breakdown (`GET /api/stats/comprehensive`).
///
/// `unit_type_stats` maps every catalog section to a (type -> count) map;
/// sections with no units are present with an empty map, never absent.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ComprehensiveStatsDto {
    pub operations: OperationsStatsDto,
    pub technical: TechnicalStatsDto,
    pub commercial: CommercialStatsDto,
    pub fuel: FuelStatsDto,
    pub unit_type_stats: HashMap<Section, HashMap<String, u64>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct OperationsStatsDto {
    pub ready_for_loading: u64,
    pub under_loading: u64,
    pub in_transit_loaded: u64,
    pub under_unloading: u64,
    pub in_transit_empty: u64,
    pub delivered: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalStatsDto {
    pub awaiting_maintenance: u64,
    pub in_maintenance: u64,
    pub awaiting_spare_parts: u64,
    pub maintenance_completed: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CommercialStatsDto {
    pub awaiting_documents: u64,
    pub document_processing: u64,
    pub document_completed: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct FuelStatsDto {
    pub awaiting_refuel: u64,
    pub refuel_in_progress: u64,
    pub refuel_completed: u64,
}
