//! Closed catalog of departments and workflow sections.
//!
//! Every department/section pair used anywhere in the application goes through
//! these enums; the wire format and the database both use the snake_case names
//! produced by `as_str`. A unit is valid only while its current section belongs
//! to its current department. Membership is the only rule: there is no
//! transition graph, and any valid destination pair is reachable from any state.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Department a unit or employee belongs to.
///
/// `Management` exists only for employee accounts; it owns no workflow
/// sections and can never hold units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    Operations,
    Technical,
    Commercial,
    Fuel,
    Management,
}

/// Workflow section within a department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    // operations
    ReadyForLoading,
    UnderLoading,
    InTransitLoaded,
    UnderUnloading,
    InTransitEmpty,
    Delivered,
    // technical
    AwaitingMaintenance,
    InMaintenance,
    AwaitingSpareParts,
    MaintenanceCompleted,
    // commercial
    AwaitingDocuments,
    DocumentProcessing,
    DocumentCompleted,
    // fuel
    AwaitingRefuel,
    RefuelInProgress,
    RefuelCompleted,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown department '{0}'")]
pub struct UnknownDepartment(pub String);

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown section '{0}'")]
pub struct UnknownSection(pub String);

impl Department {
    /// Wire/storage name of the department.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Operations => "operations",
            Self::Technical => "technical",
            Self::Commercial => "commercial",
            Self::Fuel => "fuel",
            Self::Management => "management",
        }
    }

    /// Sections that are valid inside this department.
    pub fn sections(&self) -> &'static [Section] {
        match self {
            Self::Operations => &[
                Section::ReadyForLoading,
                Section::UnderLoading,
                Section::InTransitLoaded,
                Section::UnderUnloading,
                Section::InTransitEmpty,
                Section::Delivered,
            ],
            Self::Technical => &[
                Section::AwaitingMaintenance,
                Section::InMaintenance,
                Section::AwaitingSpareParts,
                Section::MaintenanceCompleted,
            ],
            Self::Commercial => &[
                Section::AwaitingDocuments,
                Section::DocumentProcessing,
                Section::DocumentCompleted,
            ],
            Self::Fuel => &[
                Section::AwaitingRefuel,
                Section::RefuelInProgress,
                Section::RefuelCompleted,
            ],
            Self::Management => &[],
        }
    }
}

impl Section {
    /// Every known section, in dashboard reporting order.
    pub const ALL: [Section; 16] = [
        Section::ReadyForLoading,
        Section::UnderLoading,
        Section::InTransitLoaded,
        Section::UnderUnloading,
        Section::InTransitEmpty,
        Section::Delivered,
        Section::AwaitingMaintenance,
        Section::InMaintenance,
        Section::AwaitingSpareParts,
        Section::MaintenanceCompleted,
        Section::AwaitingDocuments,
        Section::DocumentProcessing,
        Section::DocumentCompleted,
        Section::AwaitingRefuel,
        Section::RefuelInProgress,
        Section::RefuelCompleted,
    ];

    /// Wire/storage name of the section.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReadyForLoading => "ready_for_loading",
            Self::UnderLoading => "under_loading",
            Self::InTransitLoaded => "in_transit_loaded",
            Self::UnderUnloading => "under_unloading",
            Self::InTransitEmpty => "in_transit_empty",
            Self::Delivered => "delivered",
            Self::AwaitingMaintenance => "awaiting_maintenance",
            Self::InMaintenance => "in_maintenance",
            Self::AwaitingSpareParts => "awaiting_spare_parts",
            Self::MaintenanceCompleted => "maintenance_completed",
            Self::AwaitingDocuments => "awaiting_documents",
            Self::DocumentProcessing => "document_processing",
            Self::DocumentCompleted => "document_completed",
            Self::AwaitingRefuel => "awaiting_refuel",
            Self::RefuelInProgress => "refuel_in_progress",
            Self::RefuelCompleted => "refuel_completed",
        }
    }

    /// Department this section belongs to.
    pub fn department(&self) -> Department {
        match self {
            Self::ReadyForLoading
            | Self::UnderLoading
            | Self::InTransitLoaded
            | Self::UnderUnloading
            | Self::InTransitEmpty
            | Self::Delivered => Department::Operations,
            Self::AwaitingMaintenance
            | Self::InMaintenance
            | Self::AwaitingSpareParts
            | Self::MaintenanceCompleted => Department::Technical,
            Self::AwaitingDocuments | Self::DocumentProcessing | Self::DocumentCompleted => {
                Department::Commercial
            }
            Self::AwaitingRefuel | Self::RefuelInProgress | Self::RefuelCompleted => {
                Department::Fuel
            }
        }
    }
}

/// Checks that `section` is a member of `department`'s section set.
pub fn is_valid_section(department: Department, section: Section) -> bool {
    section.department() == department
}

impl FromStr for Department {
    type Err = UnknownDepartment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "operations" => Ok(Self::Operations),
            "technical" => Ok(Self::Technical),
            "commercial" => Ok(Self::Commercial),
            "fuel" => Ok(Self::Fuel),
            "management" => Ok(Self::Management),
            other => Err(UnknownDepartment(other.to_string())),
        }
    }
}

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .iter()
            .copied()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
