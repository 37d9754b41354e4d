use super::GridPosition;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfficeType {
    /// Open-plan area laid out as a grid of desks.
    Open,
    Private,
    /// Meeting rooms, reception and the like.
    Special,
}

impl fmt::Display for OfficeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Open => "open",
            Self::Private => "private",
            Self::Special => "special",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLayout {
    pub rows: u32,
    pub columns: u32,
}

impl GridLayout {
    /// Largest row or column count a layout may declare.
    pub const MAX_SIDE: u32 = 64;

    #[must_use]
    pub fn is_within_limits(self) -> bool {
        (1..=Self::MAX_SIDE).contains(&self.rows) && (1..=Self::MAX_SIDE).contains(&self.columns)
    }

    /// Positions are 1-based.
    #[must_use]
    pub fn contains(self, position: GridPosition) -> bool {
        (1..=self.rows).contains(&position.row) && (1..=self.columns).contains(&position.column)
    }
}

/// A zone on one floor of a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Office {
    pub id: String,
    pub name: String,
    pub floor: i32,
    pub property_id: String,
    pub property_name: String,
    pub total_workstations: u32,
    /// Cached counter, refreshed by the store on every status change.
    pub occupied_workstations: u32,
    #[serde(rename = "type")]
    pub office_type: OfficeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<GridLayout>,
}

/// Form payload for creating or editing an office.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOffice {
    pub name: String,
    pub floor: i32,
    pub property_id: String,
    pub total_workstations: u32,
    pub office_type: OfficeType,
    pub layout: Option<GridLayout>,
}

impl Office {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.office_type == OfficeType::Open
    }

    /// A desk may sit at `position` only in an open office, inside its layout.
    #[must_use]
    pub fn accepts(&self, position: GridPosition) -> bool {
        self.is_open() && self.layout.is_none_or(|layout| layout.contains(position))
    }
}
