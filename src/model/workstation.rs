use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a desk.
///
/// `Available -> Occupied` on assign, `Occupied -> Available` on unassign.
/// `Reserved` is only ever set by editing the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkstationStatus {
    Available,
    Occupied,
    Reserved,
}

impl WorkstationStatus {
    pub const ALL: [Self; 3] = [Self::Available, Self::Occupied, Self::Reserved];
}

impl fmt::Display for WorkstationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
            Self::Reserved => "reserved",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPosition {
    pub row: u32,
    pub column: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workstation {
    pub id: String,
    pub code: String,
    pub office_id: String,
    pub office_name: String,
    pub floor: i32,
    pub property_id: String,
    pub property_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<GridPosition>,
    pub status: WorkstationStatus,
    /// Employee id of the current occupant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
}

/// Form payload for creating or editing a workstation.
///
/// Floor and property are taken from the owning office.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWorkstation {
    pub code: String,
    pub office_id: String,
    pub position: Option<GridPosition>,
    pub status: WorkstationStatus,
}

impl Workstation {
    /// Eligible for a new assignment.
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.status == WorkstationStatus::Available && self.assigned_to.is_none()
    }
}
