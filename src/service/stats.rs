//! Dashboard aggregation over the current unit store snapshot.
//!
//! Counts are recomputed on every request from a single GROUP BY scan; with a
//! fixed section vocabulary and a bounded number of types this stays cheap.
//! Nothing here takes locks, so totals may lag a concurrent move by a moment.

use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, PaginatorTrait, QueryFilter,
    QuerySelect,
};
use std::collections::HashMap;

use crate::{
    catalog::{Department, Section},
    data::employee::EmployeeRepository,
    dto::stats::{
        CommercialStatsDto, ComprehensiveStatsDto, FuelStatsDto, OperationsStatsDto, StatsDto,
        TechnicalStatsDto,
    },
    error::AppError,
};

#[derive(FromQueryResult)]
struct SectionTypeCount {
    section: String,
    unit_type: String,
    count: i64,
}

pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Headline dashboard counts.
    pub async fn stats(&self) -> Result<StatsDto, AppError> {
        let total_units = entity::prelude::Unit::find().count(self.db).await?;
        let units_in_ops = self.count_in_department(Department::Operations).await?;
        let units_in_tech = self.count_in_department(Department::Technical).await?;
        let total_employees = EmployeeRepository::new(self.db).count().await?;

        Ok(StatsDto {
            total_units,
            units_in_ops,
            units_in_tech,
            total_employees,
        })
    }

    /// Per-section counts plus the section -> (type -> count) breakdown.
    ///
    /// Every catalog section appears in `unit_type_stats`, empty sections with
    /// an empty map. Stored sections outside the catalog vocabulary are not
    /// reported.
    pub async fn comprehensive_stats(&self) -> Result<ComprehensiveStatsDto, AppError> {
        let rows = entity::prelude::Unit::find()
            .select_only()
            .column_as(entity::unit::Column::CurrentSection, "section")
            .column_as(entity::unit::Column::UnitType, "unit_type")
            .column_as(entity::unit::Column::Id.count(), "count")
            .group_by(entity::unit::Column::CurrentSection)
            .group_by(entity::unit::Column::UnitType)
            .into_model::<SectionTypeCount>()
            .all(self.db)
            .await?;

        let mut unit_type_stats: HashMap<Section, HashMap<String, u64>> = Section::ALL
            .into_iter()
            .map(|section| (section, HashMap::new()))
            .collect();

        for row in rows {
            if let Ok(section) = row.section.parse::<Section>() {
                unit_type_stats
                    .entry(section)
                    .or_default()
                    .insert(row.unit_type, row.count as u64);
            }
        }

        let count = |section: Section| -> u64 {
            unit_type_stats
                .get(&section)
                .map(|types| types.values().sum())
                .unwrap_or(0)
        };

        Ok(ComprehensiveStatsDto {
            operations: OperationsStatsDto {
                ready_for_loading: count(Section::ReadyForLoading),
                under_loading: count(Section::UnderLoading),
                in_transit_loaded: count(Section::InTransitLoaded),
                under_unloading: count(Section::UnderUnloading),
                in_transit_empty: count(Section::InTransitEmpty),
                delivered: count(Section::Delivered),
            },
            technical: TechnicalStatsDto {
                awaiting_maintenance: count(Section::AwaitingMaintenance),
                in_maintenance: count(Section::InMaintenance),
                awaiting_spare_parts: count(Section::AwaitingSpareParts),
                maintenance_completed: count(Section::MaintenanceCompleted),
            },
            commercial: CommercialStatsDto {
                awaiting_documents: count(Section::AwaitingDocuments),
                document_processing: count(Section::DocumentProcessing),
                document_completed: count(Section::DocumentCompleted),
            },
            fuel: FuelStatsDto {
                awaiting_refuel: count(Section::AwaitingRefuel),
                refuel_in_progress: count(Section::RefuelInProgress),
                refuel_completed: count(Section::RefuelCompleted),
            },
            unit_type_stats,
        })
    }

    async fn count_in_department(&self, department: Department) -> Result<u64, AppError> {
        Ok(entity::prelude::Unit::find()
            .filter(entity::unit::Column::CurrentDepartment.eq(department.as_str()))
            .count(self.db)
            .await?)
    }
}
