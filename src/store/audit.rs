//! Read-only consistency check over the whole store.
//!
//! Seeds loaded from disk are not validated on load, so the audit is how
//! broken references and drifted caches get surfaced. It never repairs.

use super::Store;
use crate::model::WorkstationStatus;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inconsistency {
    /// An active assignment points at a missing record.
    DanglingAssignment {
        assignment_id: String,
        kind: &'static str,
        id: String,
    },
    /// A record points at a missing parent.
    DanglingParent {
        kind: &'static str,
        id: String,
        parent: String,
    },
    /// More than one active assignment for the same desk or person.
    DuplicateAssignments {
        kind: &'static str,
        id: String,
        count: usize,
    },
    /// `status`/`assignedTo` of a desk disagree with its active assignment.
    WorkstationMismatch {
        workstation_id: String,
        status: WorkstationStatus,
        assigned_to: Option<String>,
        expected: Option<String>,
    },
    /// `workstationId` of an employee disagrees with their active assignment.
    EmployeeMismatch {
        employee_id: String,
        workstation_id: Option<String>,
        expected: Option<String>,
    },
    /// A cached parent name differs from the parent's current name.
    StaleName {
        kind: &'static str,
        id: String,
        cached: String,
        actual: String,
    },
    StaleCounter {
        office_id: String,
        cached: u32,
        actual: u32,
    },
    /// A layout on a non-open office, or one past the grid limit.
    InvalidLayout {
        office_id: String,
        rows: u32,
        columns: u32,
    },
    /// A desk position its office cannot hold.
    MisplacedDesk {
        workstation_id: String,
        row: u32,
        column: u32,
    },
}

impl fmt::Display for Inconsistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DanglingAssignment {
                assignment_id,
                kind,
                id,
            } => write!(f, "assignment {assignment_id} references missing {kind} {id}"),
            Self::DanglingParent { kind, id, parent } => {
                write!(f, "{kind} {id} references missing parent {parent}")
            }
            Self::DuplicateAssignments { kind, id, count } => {
                write!(f, "{kind} {id} has {count} active assignments")
            }
            Self::WorkstationMismatch {
                workstation_id,
                status,
                assigned_to,
                expected,
            } => write!(
                f,
                "workstation {workstation_id} is {status} assigned to {} but its assignment says {}",
                assigned_to.as_deref().unwrap_or("nobody"),
                expected.as_deref().unwrap_or("nobody"),
            ),
            Self::EmployeeMismatch {
                employee_id,
                workstation_id,
                expected,
            } => write!(
                f,
                "employee {employee_id} sits at {} but its assignment says {}",
                workstation_id.as_deref().unwrap_or("nothing"),
                expected.as_deref().unwrap_or("nothing"),
            ),
            Self::StaleName {
                kind,
                id,
                cached,
                actual,
            } => write!(f, "{kind} {id} caches name '{cached}', current is '{actual}'"),
            Self::StaleCounter {
                office_id,
                cached,
                actual,
            } => write!(f, "office {office_id} counts {cached} occupied, actual {actual}"),
            Self::InvalidLayout {
                office_id,
                rows,
                columns,
            } => write!(f, "office {office_id} has an invalid {rows}x{columns} layout"),
            Self::MisplacedDesk {
                workstation_id,
                row,
                column,
            } => write!(
                f,
                "workstation {workstation_id} sits at {row}x{column}, outside its office grid"
            ),
        }
    }
}

impl Store {
    #[must_use]
    pub fn audit(&self) -> Vec<Inconsistency> {
        let mut found = Vec::new();
        self.audit_assignments(&mut found);
        self.audit_parents(&mut found);
        self.audit_counters(&mut found);
        found
    }

    fn audit_assignments(&self, found: &mut Vec<Inconsistency>) {
        let mut by_workstation: HashMap<&str, Vec<&str>> = HashMap::new();
        let mut by_employee: HashMap<&str, Vec<&str>> = HashMap::new();

        for a in self.active_assignments() {
            if self.workstation(&a.workstation_id).is_none() {
                found.push(Inconsistency::DanglingAssignment {
                    assignment_id: a.id.clone(),
                    kind: "workstation",
                    id: a.workstation_id.clone(),
                });
            }
            if self.employee(&a.employee_id).is_none() {
                found.push(Inconsistency::DanglingAssignment {
                    assignment_id: a.id.clone(),
                    kind: "employee",
                    id: a.employee_id.clone(),
                });
            }
            by_workstation
                .entry(&a.workstation_id)
                .or_default()
                .push(&a.employee_id);
            by_employee
                .entry(&a.employee_id)
                .or_default()
                .push(&a.workstation_id);
        }

        for ws in &self.workstations {
            let holders = by_workstation.get(ws.id.as_str()).map_or(&[][..], Vec::as_slice);
            if holders.len() > 1 {
                found.push(Inconsistency::DuplicateAssignments {
                    kind: "workstation",
                    id: ws.id.clone(),
                    count: holders.len(),
                });
                continue;
            }
            let expected = holders.first().map(|id| (*id).to_string());
            let occupied = ws.status == WorkstationStatus::Occupied;
            if occupied != expected.is_some() || ws.assigned_to != expected {
                found.push(Inconsistency::WorkstationMismatch {
                    workstation_id: ws.id.clone(),
                    status: ws.status,
                    assigned_to: ws.assigned_to.clone(),
                    expected,
                });
            }
        }

        for employee in &self.employees {
            let seats = by_employee
                .get(employee.id.as_str())
                .map_or(&[][..], Vec::as_slice);
            if seats.len() > 1 {
                found.push(Inconsistency::DuplicateAssignments {
                    kind: "employee",
                    id: employee.id.clone(),
                    count: seats.len(),
                });
                continue;
            }
            let expected = seats.first().map(|id| (*id).to_string());
            if employee.workstation_id != expected {
                found.push(Inconsistency::EmployeeMismatch {
                    employee_id: employee.id.clone(),
                    workstation_id: employee.workstation_id.clone(),
                    expected,
                });
            }
        }
    }

    fn audit_parents(&self, found: &mut Vec<Inconsistency>) {
        for office in &self.offices {
            if let Some(layout) = office.layout {
                if !office.is_open() || !layout.is_within_limits() {
                    found.push(Inconsistency::InvalidLayout {
                        office_id: office.id.clone(),
                        rows: layout.rows,
                        columns: layout.columns,
                    });
                }
            }
            match self.property(&office.property_id) {
                None => found.push(Inconsistency::DanglingParent {
                    kind: "office",
                    id: office.id.clone(),
                    parent: office.property_id.clone(),
                }),
                Some(p) if p.name != office.property_name => found.push(Inconsistency::StaleName {
                    kind: "office",
                    id: office.id.clone(),
                    cached: office.property_name.clone(),
                    actual: p.name.clone(),
                }),
                Some(_) => {}
            }
        }

        for ws in &self.workstations {
            match self.office(&ws.office_id) {
                None => found.push(Inconsistency::DanglingParent {
                    kind: "workstation",
                    id: ws.id.clone(),
                    parent: ws.office_id.clone(),
                }),
                Some(o) => {
                    if o.name != ws.office_name {
                        found.push(Inconsistency::StaleName {
                            kind: "workstation",
                            id: ws.id.clone(),
                            cached: ws.office_name.clone(),
                            actual: o.name.clone(),
                        });
                    }
                    if let Some(pos) = ws.position.filter(|&pos| !o.accepts(pos)) {
                        found.push(Inconsistency::MisplacedDesk {
                            workstation_id: ws.id.clone(),
                            row: pos.row,
                            column: pos.column,
                        });
                    }
                }
            }
        }
    }

    fn audit_counters(&self, found: &mut Vec<Inconsistency>) {
        for office in &self.offices {
            let actual = self.office_occupancy(&office.id).occupied as u32;
            if actual != office.occupied_workstations {
                found.push(Inconsistency::StaleCounter {
                    office_id: office.id.clone(),
                    cached: office.occupied_workstations,
                    actual,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use crate::model::{GridLayout, OfficeType};
    use crate::seed::SeedData;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_seed_is_consistent() {
        let store = Store::from_seed(SeedData::builtin(), StoreConfig::default());
        assert_eq!(store.audit(), Vec::<Inconsistency>::new());
    }

    #[test]
    fn reports_drift_in_hand_edited_seed() {
        let mut seed = SeedData::builtin();
        seed.workstations[0].assigned_to = None;
        seed.employees.retain(|e| e.id != "emp-2");
        seed.offices[0].occupied_workstations = 3;

        let store = Store::from_seed(seed, StoreConfig::default());
        let found = store.audit();

        assert!(found.contains(&Inconsistency::WorkstationMismatch {
            workstation_id: "ws-1".to_string(),
            status: WorkstationStatus::Occupied,
            assigned_to: None,
            expected: Some("emp-1".to_string()),
        }));
        assert!(found.contains(&Inconsistency::DanglingAssignment {
            assignment_id: "asg-2".to_string(),
            kind: "employee",
            id: "emp-2".to_string(),
        }));
        assert!(found.contains(&Inconsistency::StaleCounter {
            office_id: "office-1".to_string(),
            cached: 3,
            actual: 16,
        }));
        assert_eq!(found.len(), 3);
    }

    #[test]
    fn reports_desks_outside_office_grid() {
        let mut seed = SeedData::builtin();
        seed.offices[0].layout = Some(GridLayout {
            rows: 100_000,
            columns: 1,
        });
        seed.offices[4].office_type = OfficeType::Private;
        seed.offices[4].layout = None;

        let store = Store::from_seed(seed, StoreConfig::default());
        let found = store.audit();

        assert!(found.contains(&Inconsistency::InvalidLayout {
            office_id: "office-1".to_string(),
            rows: 100_000,
            columns: 1,
        }));
        // Column 2 and up of the first office no longer fit.
        assert!(found.contains(&Inconsistency::MisplacedDesk {
            workstation_id: "ws-2".to_string(),
            row: 1,
            column: 2,
        }));
        let misplaced_in_private = found
            .iter()
            .filter_map(|issue| match issue {
                Inconsistency::MisplacedDesk { workstation_id, .. } => {
                    store.workstation(workstation_id)
                }
                _ => None,
            })
            .filter(|ws| ws.office_id == "office-5")
            .count();
        assert_eq!(misplaced_in_private, 24);
    }

    #[test]
    fn stays_consistent_through_engine_operations() {
        let mut store = Store::from_seed(SeedData::builtin(), StoreConfig::default());

        let free: Vec<String> = store
            .available_workstations()
            .iter()
            .map(|ws| ws.id.clone())
            .collect();
        let people: Vec<String> = store
            .unassigned_employees()
            .iter()
            .map(|e| e.id.clone())
            .collect();
        let mut made = Vec::new();
        for (ws, emp) in free.iter().zip(&people) {
            made.push(store.assign(ws, emp).unwrap().id);
        }
        for id in made.iter().step_by(2) {
            store.unassign(id, |_| true);
        }

        assert_eq!(store.audit(), Vec::<Inconsistency>::new());
    }
}
