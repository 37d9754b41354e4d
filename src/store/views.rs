//! Read-side projections, recomputed from the collections on every call.

use super::Store;
use crate::model::{
    Assignment, Employee, GridLayout, Office, OfficeType, Property, Workstation,
    WorkstationStatus,
};
use std::collections::BTreeSet;
use std::fmt;

/// Occupied share of a set of workstations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utilization {
    pub occupied: usize,
    pub total: usize,
}

impl Utilization {
    /// Occupied fraction in `0.0..=1.0`, or `None` for an empty set.
    #[must_use]
    pub fn rate(&self) -> Option<f64> {
        (self.total > 0).then(|| self.occupied as f64 / self.total as f64)
    }

    #[must_use]
    pub fn percent(&self) -> Option<f64> {
        self.rate().map(|r| r * 100.0)
    }
}

impl fmt::Display for Utilization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.percent() {
            Some(p) => write!(f, "{p:.1}%"),
            None => f.write_str("n/a"),
        }
    }
}

/// Status breakdown of a set of workstations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Occupancy {
    pub available: usize,
    pub occupied: usize,
    pub reserved: usize,
}

impl Occupancy {
    fn of<'a>(workstations: impl Iterator<Item = &'a Workstation>) -> Self {
        workstations.fold(Self::default(), |mut acc, ws| {
            match ws.status {
                WorkstationStatus::Available => acc.available += 1,
                WorkstationStatus::Occupied => acc.occupied += 1,
                WorkstationStatus::Reserved => acc.reserved += 1,
            }
            acc
        })
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.available + self.occupied + self.reserved
    }

    #[must_use]
    pub fn utilization(&self) -> Utilization {
        Utilization {
            occupied: self.occupied,
            total: self.total(),
        }
    }
}

/// Criteria of the workstation list. `None` and an empty query match all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkstationFilter {
    pub property_id: Option<String>,
    pub office_id: Option<String>,
    pub status: Option<WorkstationStatus>,
    /// Case-insensitive substring of the code.
    pub code_query: String,
}

impl WorkstationFilter {
    #[must_use]
    pub fn matches(&self, ws: &Workstation) -> bool {
        self.property_id.as_ref().is_none_or(|id| *id == ws.property_id)
            && self.office_id.as_ref().is_none_or(|id| *id == ws.office_id)
            && self.status.is_none_or(|s| s == ws.status)
            && contains_ignore_case(&ws.code, &self.code_query)
    }

    /// Back to "show everything".
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Criteria of the office list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OfficeFilter {
    pub property_id: Option<String>,
    pub floor: Option<i32>,
    pub office_type: Option<OfficeType>,
    /// Case-insensitive substring of the name.
    pub name_query: String,
}

impl OfficeFilter {
    #[must_use]
    pub fn matches(&self, office: &Office) -> bool {
        self.property_id
            .as_ref()
            .is_none_or(|id| *id == office.property_id)
            && self.floor.is_none_or(|f| f == office.floor)
            && self.office_type.is_none_or(|t| t == office.office_type)
            && contains_ignore_case(&office.name, &self.name_query)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// An assignment joined with the live employee and workstation records.
#[derive(Debug, Clone, Copy)]
pub struct AssignmentRow<'a> {
    pub assignment: &'a Assignment,
    pub employee: Option<&'a Employee>,
    pub workstation: Option<&'a Workstation>,
    pub office: Option<&'a Office>,
}

impl AssignmentRow<'_> {
    #[must_use]
    pub fn workstation_code(&self) -> &str {
        self.workstation.map_or("-", |ws| ws.code.as_str())
    }

    #[must_use]
    pub fn office_name(&self) -> &str {
        self.office.map_or("-", |o| o.name.as_str())
    }
}

/// One office on a floor plan.
#[derive(Debug, Clone)]
pub struct OfficePlan<'a> {
    pub office: &'a Office,
    pub occupancy: Occupancy,
    /// Row-major grid cells for open offices; empty for other types.
    pub grid: Vec<Vec<Option<&'a Workstation>>>,
    /// Desks without a grid position.
    pub loose: Vec<&'a Workstation>,
}

/// Every office on one floor of a property, for the big-screen view.
#[derive(Debug, Clone)]
pub struct FloorPlan<'a> {
    pub property: &'a Property,
    pub floor: i32,
    pub offices: Vec<OfficePlan<'a>>,
    pub occupancy: Occupancy,
}

impl Store {
    /// Assignments currently binding a desk.
    pub fn active_assignments(&self) -> impl Iterator<Item = &Assignment> + '_ {
        self.assignments.iter().filter(|a| a.is_active())
    }

    /// Workstations that can take a new assignment.
    #[must_use]
    pub fn available_workstations(&self) -> Vec<&Workstation> {
        self.workstations.iter().filter(|ws| ws.is_free()).collect()
    }

    /// Employees without a desk.
    #[must_use]
    pub fn unassigned_employees(&self) -> Vec<&Employee> {
        self.employees.iter().filter(|e| !e.is_seated()).collect()
    }

    #[must_use]
    pub fn occupancy(&self) -> Occupancy {
        Occupancy::of(self.workstations.iter())
    }

    #[must_use]
    pub fn property_occupancy(&self, property_id: &str) -> Occupancy {
        Occupancy::of(
            self.workstations
                .iter()
                .filter(|ws| ws.property_id == property_id),
        )
    }

    /// Computed from the workstation list, not the office's cached counter.
    #[must_use]
    pub fn office_occupancy(&self, office_id: &str) -> Occupancy {
        Occupancy::of(self.workstations.iter().filter(|ws| ws.office_id == office_id))
    }

    #[must_use]
    pub fn floor_occupancy(&self, property_id: &str, floor: i32) -> Occupancy {
        Occupancy::of(
            self.workstations
                .iter()
                .filter(|ws| ws.property_id == property_id && ws.floor == floor),
        )
    }

    #[must_use]
    pub fn utilization(&self) -> Utilization {
        self.occupancy().utilization()
    }

    #[must_use]
    pub fn property_name(&self, id: &str) -> Option<&str> {
        self.property(id).map(|p| p.name.as_str())
    }

    #[must_use]
    pub fn office_name(&self, id: &str) -> Option<&str> {
        self.office(id).map(|o| o.name.as_str())
    }

    #[must_use]
    pub fn filter_workstations(&self, filter: &WorkstationFilter) -> Vec<&Workstation> {
        self.workstations
            .iter()
            .filter(|ws| filter.matches(ws))
            .collect()
    }

    #[must_use]
    pub fn filter_offices(&self, filter: &OfficeFilter) -> Vec<&Office> {
        self.offices.iter().filter(|o| filter.matches(o)).collect()
    }

    /// Distinct floors with at least one office, lowest first.
    #[must_use]
    pub fn floors(&self, property_id: &str) -> Vec<i32> {
        self.offices
            .iter()
            .filter(|o| o.property_id == property_id)
            .map(|o| o.floor)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// All assignment records with their live joins, in insertion order.
    #[must_use]
    pub fn assignment_rows(&self) -> Vec<AssignmentRow<'_>> {
        self.assignments
            .iter()
            .map(|assignment| {
                let workstation = self.workstation(&assignment.workstation_id);
                AssignmentRow {
                    assignment,
                    employee: self.employee(&assignment.employee_id),
                    workstation,
                    office: workstation.and_then(|ws| self.office(&ws.office_id)),
                }
            })
            .collect()
    }

    #[must_use]
    pub fn floor_plan(&self, property_id: &str, floor: i32) -> Option<FloorPlan<'_>> {
        let property = self.property(property_id)?;
        let offices = self
            .offices
            .iter()
            .filter(|o| o.property_id == property_id && o.floor == floor)
            .map(|office| self.office_plan(office))
            .collect();

        Some(FloorPlan {
            property,
            floor,
            offices,
            occupancy: self.floor_occupancy(property_id, floor),
        })
    }

    fn office_plan<'a>(&'a self, office: &'a Office) -> OfficePlan<'a> {
        let desks: Vec<&Workstation> = self
            .workstations
            .iter()
            .filter(|ws| ws.office_id == office.id)
            .collect();

        let (rows, columns) = match office.layout {
            Some(layout) => (layout.rows, layout.columns),
            None => desks
                .iter()
                .filter_map(|ws| ws.position)
                .fold((0, 0), |(r, c), p| (r.max(p.row), c.max(p.column))),
        };

        // Loaded seeds are unchecked; desks past the cap are listed as loose.
        let rows = rows.min(GridLayout::MAX_SIDE);
        let columns = columns.min(GridLayout::MAX_SIDE);

        let mut grid = Vec::new();
        let mut loose = Vec::new();
        if office.is_open() {
            grid = vec![vec![None; columns as usize]; rows as usize];
            for ws in &desks {
                let placed = match ws.position {
                    Some(p) if p.row >= 1 && p.column >= 1 => {
                        let cell = grid
                            .get_mut(p.row as usize - 1)
                            .and_then(|row| row.get_mut(p.column as usize - 1));
                        match cell {
                            Some(slot) if slot.is_none() => {
                                *slot = Some(*ws);
                                true
                            }
                            _ => false,
                        }
                    }
                    _ => false,
                };
                if !placed {
                    loose.push(*ws);
                }
            }
        } else {
            loose = desks.clone();
        }

        OfficePlan {
            office,
            occupancy: Occupancy::of(desks.into_iter()),
            grid,
            loose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use crate::seed::SeedData;
    use pretty_assertions::assert_eq;

    fn builtin() -> Store {
        Store::from_seed(SeedData::builtin(), StoreConfig::default())
    }

    #[test]
    fn utilization_formats_one_decimal() {
        let u = Utilization {
            occupied: 16,
            total: 20,
        };
        assert_eq!(u.to_string(), "80.0%");
        assert_eq!(
            Utilization {
                occupied: 1,
                total: 3
            }
            .to_string(),
            "33.3%"
        );
    }

    #[test]
    fn utilization_of_nothing_is_not_a_number() {
        let u = Utilization::default();
        assert_eq!(u.rate(), None);
        assert_eq!(u.to_string(), "n/a");
    }

    #[test]
    fn available_excludes_reserved_and_occupied() {
        let store = builtin();

        let available = store.available_workstations();

        assert!(available.iter().all(|ws| ws.is_free()));
        assert_eq!(available.len(), store.occupancy().available);
        assert!(available.iter().all(|ws| ws.code != "WS-3-020"));
    }

    #[test]
    fn unassigned_employees_have_no_desk() {
        let store = builtin();

        let unassigned = store.unassigned_employees();

        assert_eq!(unassigned.len(), 6);
        assert!(unassigned.iter().all(|e| e.workstation_id.is_none()));
    }

    #[test]
    fn office_occupancy_matches_cached_counter() {
        let store = builtin();

        for office in store.offices() {
            assert_eq!(
                store.office_occupancy(&office.id).occupied,
                office.occupied_workstations as usize,
                "{}",
                office.name
            );
        }
    }

    #[test]
    fn workstation_filter_combines_criteria() {
        let store = builtin();
        let filter = WorkstationFilter {
            property_id: Some("prop-1".to_string()),
            status: Some(WorkstationStatus::Available),
            code_query: "ws-5".to_string(),
            ..WorkstationFilter::default()
        };

        let codes: Vec<&str> = store
            .filter_workstations(&filter)
            .iter()
            .map(|ws| ws.code.as_str())
            .collect();

        assert_eq!(
            codes,
            vec!["WS-5-019", "WS-5-020", "WS-5-021", "WS-5-022", "WS-5-023", "WS-5-024"]
        );
    }

    #[test]
    fn office_filter_by_floor_and_type() {
        let store = builtin();
        let filter = OfficeFilter {
            floor: Some(3),
            office_type: Some(OfficeType::Private),
            ..OfficeFilter::default()
        };

        let names: Vec<&str> = store
            .filter_offices(&filter)
            .iter()
            .map(|o| o.name.as_str())
            .collect();

        assert_eq!(names, vec!["Room 301", "Room 302"]);
    }

    #[test]
    fn floors_are_sorted_and_distinct() {
        let store = builtin();
        assert_eq!(store.floors("prop-1"), vec![3, 5]);
        assert!(store.floors("missing").is_empty());
    }

    #[test]
    fn floor_plan_places_desks_on_grid() {
        let store = builtin();

        let plan = store.floor_plan("prop-1", 3).unwrap();

        assert_eq!(plan.offices.len(), 4);
        let open = &plan.offices[0];
        assert_eq!(open.grid.len(), 4);
        assert_eq!(open.grid[0].len(), 5);
        assert_eq!(open.grid[0][0].map(|ws| ws.code.as_str()), Some("WS-3-001"));
        assert_eq!(open.grid[3][4].map(|ws| ws.code.as_str()), Some("WS-3-020"));
        assert!(open.loose.is_empty());

        let private = &plan.offices[1];
        assert!(private.grid.is_empty());
        assert_eq!(private.loose.len(), 1);
        assert_eq!(plan.occupancy.total(), 22);
    }

    #[test]
    fn floor_plan_grid_is_capped_for_oversized_seed_layouts() {
        let mut seed = SeedData::builtin();
        seed.offices[0].layout = Some(GridLayout {
            rows: 100_000,
            columns: 100_000,
        });
        seed.workstations[0].position = Some(crate::model::GridPosition {
            row: 90_000,
            column: 1,
        });
        let store = Store::from_seed(seed, StoreConfig::default());

        let plan = store.floor_plan("prop-1", 3).unwrap();

        let open = &plan.offices[0];
        assert_eq!(open.grid.len(), GridLayout::MAX_SIDE as usize);
        assert!(open
            .grid
            .iter()
            .all(|row| row.len() == GridLayout::MAX_SIDE as usize));
        assert_eq!(
            open.loose.iter().map(|ws| ws.code.as_str()).collect::<Vec<_>>(),
            vec!["WS-3-001"]
        );
    }

    #[test]
    fn assignment_rows_join_live_records() {
        let store = builtin();

        let rows = store.assignment_rows();

        assert_eq!(rows.len(), store.assignments().len());
        assert_eq!(rows[0].workstation_code(), "WS-3-001");
        assert_eq!(rows[0].office_name(), "Floor 3 Open Area");
        assert_eq!(
            rows[0].employee.map(|e| e.name.as_str()),
            Some(rows[0].assignment.employee_name.as_str())
        );
    }
}
