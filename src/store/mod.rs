//! In-memory entity store.
//!
//! Holds the five collections and applies every mutation as one
//! synchronous step, so callers never observe a half-applied action.

pub mod audit;
pub mod engine;
pub mod records;
pub mod report;
pub mod views;

pub use audit::Inconsistency;
pub use engine::UnassignOutcome;
pub use report::{BranchTotal, ReportRow, ReportSummary};
pub use views::{
    AssignmentRow, FloorPlan, OfficeFilter, OfficePlan, Occupancy, Utilization, WorkstationFilter,
};

use crate::config::StoreConfig;
use crate::model::{Assignment, Employee, Office, Property, Workstation, WorkstationStatus};
use crate::seed::SeedData;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Store {
    config: StoreConfig,
    seed: SeedData,
    properties: Vec<Property>,
    offices: Vec<Office>,
    workstations: Vec<Workstation>,
    employees: Vec<Employee>,
    assignments: Vec<Assignment>,
}

impl Store {
    #[must_use]
    pub fn from_seed(seed: SeedData, config: StoreConfig) -> Self {
        let mut store = Self {
            config,
            properties: Vec::new(),
            offices: Vec::new(),
            workstations: Vec::new(),
            employees: Vec::new(),
            assignments: Vec::new(),
            seed,
        };
        store.reset();
        store
    }

    /// Discards every change and restores the seed this store was built from.
    pub fn reset(&mut self) {
        let seed = self.seed.clone();
        self.properties = seed.properties;
        self.offices = seed.offices;
        self.workstations = seed.workstations;
        self.employees = seed.employees;
        self.assignments = seed.assignments;
        tracing::info!(
            workstations = self.workstations.len(),
            employees = self.employees.len(),
            assignments = self.assignments.len(),
            "store reset to seed"
        );
    }

    /// Current state in seed form.
    #[must_use]
    pub fn snapshot(&self) -> SeedData {
        SeedData {
            properties: self.properties.clone(),
            offices: self.offices.clone(),
            workstations: self.workstations.clone(),
            employees: self.employees.clone(),
            assignments: self.assignments.clone(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    #[must_use]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    #[must_use]
    pub fn offices(&self) -> &[Office] {
        &self.offices
    }

    #[must_use]
    pub fn workstations(&self) -> &[Workstation] {
        &self.workstations
    }

    #[must_use]
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// All assignment records, including inactive ones kept for history.
    #[must_use]
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    #[must_use]
    pub fn property(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn office(&self, id: &str) -> Option<&Office> {
        self.offices.iter().find(|o| o.id == id)
    }

    #[must_use]
    pub fn workstation(&self, id: &str) -> Option<&Workstation> {
        self.workstations.iter().find(|ws| ws.id == id)
    }

    #[must_use]
    pub fn employee(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    #[must_use]
    pub fn assignment(&self, id: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.id == id)
    }

    /// Recomputes the cached occupied counter of one office.
    fn refresh_office_counter(&mut self, office_id: &str) {
        let occupied = self
            .workstations
            .iter()
            .filter(|ws| ws.office_id == office_id && ws.status == WorkstationStatus::Occupied)
            .count() as u32;
        if let Some(office) = self.offices.iter_mut().find(|o| o.id == office_id) {
            office.occupied_workstations = occupied;
        }
    }
}

fn new_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EmployeeType, NewEmployee};
    use pretty_assertions::assert_eq;

    #[test]
    fn reset_restores_seed() {
        let seed = SeedData::builtin();
        let mut store = Store::from_seed(seed.clone(), StoreConfig::default());

        let ws = store.available_workstations()[0].id.clone();
        let emp = store.unassigned_employees()[0].id.clone();
        store.assign(&ws, &emp).unwrap();
        assert_ne!(store.snapshot(), seed);

        store.reset();
        assert_eq!(store.snapshot(), seed);
    }

    #[test]
    fn generated_ids_do_not_collide() {
        let mut store = Store::from_seed(SeedData::default(), StoreConfig::default());
        let draft = NewEmployee {
            name: "Lin Yang".to_string(),
            department: "Tech".to_string(),
            company: "Co".to_string(),
            employee_no: "E1".to_string(),
            employee_type: EmployeeType::Internal,
        };

        let first = store.create_employee(draft.clone()).unwrap();
        let second = store.create_employee(draft).unwrap();

        assert_ne!(first, second);
        assert!(first.starts_with("emp-"));
    }
}
