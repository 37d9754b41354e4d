//! Create, edit and delete for the four form-managed collections.
//!
//! Edits replace the whole record from a form payload. Unknown ids on edit
//! or delete return `Ok(false)` and change nothing.

use super::{new_id, Store};
use crate::config::DeletePolicy;
use crate::error::StoreError;
use crate::model::{
    Employee, NewEmployee, NewOffice, NewProperty, NewWorkstation, Office, OfficeType, Property,
    Workstation, WorkstationStatus,
};

fn require(field: &'static str, value: &str) -> Result<(), StoreError> {
    if value.trim().is_empty() {
        Err(StoreError::MissingField { field })
    } else {
        Ok(())
    }
}

impl Store {
    pub fn create_property(&mut self, draft: NewProperty) -> Result<String, StoreError> {
        validate_property(&draft)?;
        let id = new_id("prop");
        self.properties.push(Property::from_draft(id.clone(), draft));
        tracing::info!(property_id = %id, "property created");
        Ok(id)
    }

    /// Replaces a property. A rename is copied into every cached
    /// `propertyName` of its offices and workstations.
    pub fn update_property(&mut self, id: &str, draft: NewProperty) -> Result<bool, StoreError> {
        validate_property(&draft)?;
        let Some(property) = self.properties.iter_mut().find(|p| p.id == id) else {
            return Ok(false);
        };
        *property = Property::from_draft(id.to_string(), draft);
        let name = property.name.clone();

        for office in self.offices.iter_mut().filter(|o| o.property_id == id) {
            office.property_name.clone_from(&name);
        }
        for ws in self.workstations.iter_mut().filter(|ws| ws.property_id == id) {
            ws.property_name.clone_from(&name);
        }
        tracing::info!(property_id = id, "property updated");
        Ok(true)
    }

    /// Deletes a property. Its offices count as dependents.
    pub fn delete_property(&mut self, id: &str) -> Result<bool, StoreError> {
        if self.property(id).is_none() {
            return Ok(false);
        }

        let office_ids: Vec<String> = self
            .offices
            .iter()
            .filter(|o| o.property_id == id)
            .map(|o| o.id.clone())
            .collect();
        self.guard_delete("property", id, office_ids.len())?;

        for office_id in office_ids {
            self.remove_office_cascading(&office_id);
        }
        self.properties.retain(|p| p.id != id);
        tracing::info!(property_id = id, "property deleted");
        Ok(true)
    }

    pub fn create_office(&mut self, draft: NewOffice) -> Result<String, StoreError> {
        let property_name = self.validate_office(&draft)?;
        let id = new_id("office");
        self.offices.push(Office {
            id: id.clone(),
            name: draft.name,
            floor: draft.floor,
            property_id: draft.property_id,
            property_name,
            total_workstations: draft.total_workstations,
            occupied_workstations: 0,
            office_type: draft.office_type,
            layout: draft.layout,
        });
        tracing::info!(office_id = %id, "office created");
        Ok(id)
    }

    /// Replaces an office. Name, floor and property are copied into its
    /// workstations; the occupied counter is recomputed.
    ///
    /// Every desk already in the office must still fit the new type and
    /// layout, otherwise the edit fails with `InvalidPosition`.
    pub fn update_office(&mut self, id: &str, draft: NewOffice) -> Result<bool, StoreError> {
        let property_name = self.validate_office(&draft)?;
        if self.office(id).is_none() {
            return Ok(false);
        }
        let shape = Office {
            id: id.to_string(),
            name: draft.name.clone(),
            floor: draft.floor,
            property_id: draft.property_id.clone(),
            property_name: property_name.clone(),
            total_workstations: draft.total_workstations,
            occupied_workstations: 0,
            office_type: draft.office_type,
            layout: draft.layout,
        };
        let misplaced = self
            .workstations
            .iter()
            .filter(|ws| ws.office_id == id)
            .find_map(|ws| ws.position.filter(|&pos| !shape.accepts(pos)));
        if let Some(pos) = misplaced {
            return Err(StoreError::InvalidPosition {
                office: shape.name,
                row: pos.row,
                column: pos.column,
            });
        }

        let Some(office) = self.offices.iter_mut().find(|o| o.id == id) else {
            return Ok(false);
        };
        office.name = draft.name;
        office.floor = draft.floor;
        office.property_id = draft.property_id;
        office.property_name = property_name;
        office.total_workstations = draft.total_workstations;
        office.office_type = draft.office_type;
        office.layout = draft.layout;
        let office = office.clone();

        for ws in self.workstations.iter_mut().filter(|ws| ws.office_id == id) {
            ws.office_name.clone_from(&office.name);
            ws.floor = office.floor;
            ws.property_id.clone_from(&office.property_id);
            ws.property_name.clone_from(&office.property_name);
        }
        self.refresh_office_counter(id);
        tracing::info!(office_id = id, "office updated");
        Ok(true)
    }

    /// Deletes an office. Its workstations count as dependents.
    pub fn delete_office(&mut self, id: &str) -> Result<bool, StoreError> {
        if self.office(id).is_none() {
            return Ok(false);
        }
        let dependents = self
            .workstations
            .iter()
            .filter(|ws| ws.office_id == id)
            .count();
        self.guard_delete("office", id, dependents)?;

        self.remove_office_cascading(id);
        tracing::info!(office_id = id, "office deleted");
        Ok(true)
    }

    pub fn create_workstation(&mut self, draft: NewWorkstation) -> Result<String, StoreError> {
        let office = self.validate_workstation(&draft)?;
        if draft.status == WorkstationStatus::Occupied {
            return Err(StoreError::InvalidStatusChange {
                status: draft.status.to_string(),
            });
        }

        let id = new_id("ws");
        self.workstations.push(Workstation {
            id: id.clone(),
            code: draft.code,
            office_id: office.id,
            office_name: office.name,
            floor: office.floor,
            property_id: office.property_id,
            property_name: office.property_name,
            position: draft.position,
            status: draft.status,
            assigned_to: None,
        });
        tracing::info!(workstation_id = %id, "workstation created");
        Ok(id)
    }

    /// Replaces a workstation's code, office, position and status.
    ///
    /// The occupant is never edited here. While a desk is assigned only its
    /// code and position may change; moving it or changing its status
    /// needs an unassign first.
    pub fn update_workstation(
        &mut self,
        id: &str,
        draft: NewWorkstation,
    ) -> Result<bool, StoreError> {
        let office = self.validate_workstation(&draft)?;
        let Some(current) = self.workstation(id) else {
            return Ok(false);
        };

        let in_use = current.assigned_to.is_some()
            || self
                .active_assignments()
                .any(|a| a.workstation_id == id);
        if in_use {
            if draft.status != current.status || draft.office_id != current.office_id {
                return Err(StoreError::WorkstationInUse {
                    code: current.code.clone(),
                });
            }
        } else if draft.status == WorkstationStatus::Occupied {
            return Err(StoreError::InvalidStatusChange {
                status: draft.status.to_string(),
            });
        }

        let previous_office = current.office_id.clone();
        if let Some(ws) = self.workstations.iter_mut().find(|ws| ws.id == id) {
            ws.code = draft.code;
            ws.office_id = office.id.clone();
            ws.office_name = office.name;
            ws.floor = office.floor;
            ws.property_id = office.property_id;
            ws.property_name = office.property_name;
            ws.position = draft.position;
            ws.status = draft.status;
        }
        self.refresh_office_counter(&previous_office);
        self.refresh_office_counter(&office.id);
        tracing::info!(workstation_id = id, "workstation updated");
        Ok(true)
    }

    /// Flips an unassigned workstation between `available` and `reserved`.
    pub fn toggle_reserved(&mut self, id: &str) -> Result<bool, StoreError> {
        let Some(ws) = self.workstation(id) else {
            return Ok(false);
        };
        let status = match ws.status {
            WorkstationStatus::Available => WorkstationStatus::Reserved,
            WorkstationStatus::Reserved => WorkstationStatus::Available,
            WorkstationStatus::Occupied => {
                return Err(StoreError::WorkstationInUse {
                    code: ws.code.clone(),
                })
            }
        };
        let draft = NewWorkstation {
            code: ws.code.clone(),
            office_id: ws.office_id.clone(),
            position: ws.position,
            status,
        };
        self.update_workstation(id, draft)
    }

    /// Deletes a workstation. An active assignment counts as a dependent.
    pub fn delete_workstation(&mut self, id: &str) -> Result<bool, StoreError> {
        let Some(ws) = self.workstation(id) else {
            return Ok(false);
        };
        let office_id = ws.office_id.clone();
        let dependents = self
            .active_assignments()
            .filter(|a| a.workstation_id == id)
            .count();
        self.guard_delete("workstation", id, dependents)?;

        self.release_workstation(id);
        self.workstations.retain(|ws| ws.id != id);
        self.refresh_office_counter(&office_id);
        tracing::info!(workstation_id = id, "workstation deleted");
        Ok(true)
    }

    pub fn create_employee(&mut self, draft: NewEmployee) -> Result<String, StoreError> {
        validate_employee(&draft)?;
        let id = new_id("emp");
        self.employees.push(Employee::from_draft(id.clone(), draft));
        tracing::info!(employee_id = %id, "employee created");
        Ok(id)
    }

    /// Replaces an employee's details. The seat is kept, and its name is
    /// copied into the employee's assignment records.
    pub fn update_employee(&mut self, id: &str, draft: NewEmployee) -> Result<bool, StoreError> {
        validate_employee(&draft)?;
        let Some(employee) = self.employees.iter_mut().find(|e| e.id == id) else {
            return Ok(false);
        };
        let workstation_id = employee.workstation_id.take();
        *employee = Employee {
            workstation_id,
            ..Employee::from_draft(id.to_string(), draft)
        };
        let name = employee.name.clone();

        for assignment in self.assignments.iter_mut().filter(|a| a.employee_id == id) {
            assignment.employee_name.clone_from(&name);
        }
        tracing::info!(employee_id = id, "employee updated");
        Ok(true)
    }

    /// Deletes an employee. An active assignment counts as a dependent.
    pub fn delete_employee(&mut self, id: &str) -> Result<bool, StoreError> {
        if self.employee(id).is_none() {
            return Ok(false);
        }
        let dependents = self
            .active_assignments()
            .filter(|a| a.employee_id == id)
            .count();
        self.guard_delete("employee", id, dependents)?;

        self.release_employee(id);
        self.employees.retain(|e| e.id != id);
        tracing::info!(employee_id = id, "employee deleted");
        Ok(true)
    }

    fn guard_delete(
        &self,
        kind: &'static str,
        id: &str,
        dependents: usize,
    ) -> Result<(), StoreError> {
        if dependents > 0 && self.config.delete_policy == DeletePolicy::Block {
            tracing::warn!(kind, id, dependents, "deletion blocked");
            return Err(StoreError::DeletionBlocked {
                kind,
                id: id.to_string(),
                dependents,
            });
        }
        Ok(())
    }

    /// Removes an office with its workstations, releasing their assignments.
    fn remove_office_cascading(&mut self, office_id: &str) {
        let desks: Vec<String> = self
            .workstations
            .iter()
            .filter(|ws| ws.office_id == office_id)
            .map(|ws| ws.id.clone())
            .collect();
        for desk in &desks {
            self.release_workstation(desk);
        }
        self.workstations.retain(|ws| ws.office_id != office_id);
        self.offices.retain(|o| o.id != office_id);
    }

    /// Returns the name of the referenced property.
    fn validate_office(&self, draft: &NewOffice) -> Result<String, StoreError> {
        require("name", &draft.name)?;
        require("propertyId", &draft.property_id)?;
        if let Some(layout) = draft.layout {
            if draft.office_type != OfficeType::Open || !layout.is_within_limits() {
                return Err(StoreError::InvalidLayout {
                    office: draft.name.clone(),
                    rows: layout.rows,
                    columns: layout.columns,
                });
            }
        }
        self.property(&draft.property_id)
            .map(|p| p.name.clone())
            .ok_or_else(|| StoreError::UnknownReference {
                kind: "property",
                id: draft.property_id.clone(),
            })
    }

    /// Returns a copy of the owning office.
    fn validate_workstation(&self, draft: &NewWorkstation) -> Result<Office, StoreError> {
        require("code", &draft.code)?;
        require("officeId", &draft.office_id)?;
        let office = self
            .office(&draft.office_id)
            .ok_or_else(|| StoreError::UnknownReference {
                kind: "office",
                id: draft.office_id.clone(),
            })?;

        if let Some(pos) = draft.position {
            if !office.accepts(pos) {
                return Err(StoreError::InvalidPosition {
                    office: office.name.clone(),
                    row: pos.row,
                    column: pos.column,
                });
            }
        }
        Ok(office.clone())
    }
}

fn validate_property(draft: &NewProperty) -> Result<(), StoreError> {
    require("code", &draft.code)?;
    require("name", &draft.name)?;
    require("address", &draft.address)
}

fn validate_employee(draft: &NewEmployee) -> Result<(), StoreError> {
    require("name", &draft.name)?;
    require("employeeNo", &draft.employee_no)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use crate::model::{EmployeeType, GridLayout, GridPosition};
    use crate::seed::SeedData;
    use pretty_assertions::assert_eq;

    fn property_draft(name: &str) -> NewProperty {
        NewProperty {
            code: "FC9".to_string(),
            name: name.to_string(),
            property_type: "Office building".to_string(),
            region: "Guangzhou".to_string(),
            address: "1 Road".to_string(),
            area: 1000.0,
            floors: 3,
            certificate_no: None,
            company: None,
            branch_name: None,
        }
    }

    fn office_draft(property_id: &str, office_type: OfficeType) -> NewOffice {
        NewOffice {
            name: "Open 1".to_string(),
            floor: 1,
            property_id: property_id.to_string(),
            total_workstations: 4,
            office_type,
            layout: (office_type == OfficeType::Open).then_some(GridLayout {
                rows: 2,
                columns: 2,
            }),
        }
    }

    fn desk_draft(office_id: &str, row: u32, column: u32) -> NewWorkstation {
        NewWorkstation {
            code: format!("WS-{row}-{column}"),
            office_id: office_id.to_string(),
            position: Some(GridPosition { row, column }),
            status: WorkstationStatus::Available,
        }
    }

    fn employee_draft(name: &str) -> NewEmployee {
        NewEmployee {
            name: name.to_string(),
            department: "Tech".to_string(),
            company: "Co".to_string(),
            employee_no: "E1".to_string(),
            employee_type: EmployeeType::External,
        }
    }

    /// One property, one open office, one desk, one employee sitting at it.
    fn seated(policy: DeletePolicy) -> (Store, String, String, String, String) {
        let config = StoreConfig {
            delete_policy: policy,
            ..StoreConfig::default()
        };
        let mut store = Store::from_seed(SeedData::default(), config);
        let property = store.create_property(property_draft("HQ")).unwrap();
        let office = store
            .create_office(office_draft(&property, OfficeType::Open))
            .unwrap();
        let desk = store.create_workstation(desk_draft(&office, 1, 1)).unwrap();
        let employee = store.create_employee(employee_draft("Lin Yang")).unwrap();
        store.assign(&desk, &employee).unwrap();
        (store, property, office, desk, employee)
    }

    #[test]
    fn blank_required_field_is_rejected() {
        let mut store = Store::from_seed(SeedData::default(), StoreConfig::default());

        assert_eq!(
            store.create_property(property_draft("  ")),
            Err(StoreError::MissingField { field: "name" })
        );
        assert!(store.properties().is_empty());
    }

    #[test]
    fn office_requires_existing_property() {
        let mut store = Store::from_seed(SeedData::default(), StoreConfig::default());

        assert_eq!(
            store.create_office(office_draft("missing", OfficeType::Open)),
            Err(StoreError::UnknownReference {
                kind: "property",
                id: "missing".to_string()
            })
        );
    }

    #[test]
    fn workstation_copies_office_location() {
        let (store, property, office, desk, _) = seated(DeletePolicy::Block);

        let ws = store.workstation(&desk).unwrap();
        assert_eq!(ws.office_id, office);
        assert_eq!(ws.office_name, "Open 1");
        assert_eq!(ws.property_id, property);
        assert_eq!(ws.property_name, "HQ");
        assert_eq!(ws.floor, 1);
    }

    #[test]
    fn position_outside_layout_is_rejected() {
        let (mut store, _, office, _, _) = seated(DeletePolicy::Block);

        let err = store.create_workstation(desk_draft(&office, 3, 1)).unwrap_err();
        assert!(matches!(err, StoreError::InvalidPosition { row: 3, .. }));
    }

    #[test]
    fn position_in_private_office_is_rejected() {
        let (mut store, property, _, _, _) = seated(DeletePolicy::Block);
        let private = store
            .create_office(office_draft(&property, OfficeType::Private))
            .unwrap();

        let err = store.create_workstation(desk_draft(&private, 1, 1)).unwrap_err();
        assert!(matches!(err, StoreError::InvalidPosition { .. }));
    }

    #[test]
    fn layout_on_non_open_office_is_rejected() {
        let (mut store, property, _, _, _) = seated(DeletePolicy::Block);
        let mut draft = office_draft(&property, OfficeType::Special);
        draft.layout = Some(GridLayout {
            rows: 2,
            columns: 2,
        });

        let err = store.create_office(draft).unwrap_err();
        assert!(matches!(err, StoreError::InvalidLayout { rows: 2, .. }));
        assert_eq!(store.offices().len(), 1);
    }

    #[test]
    fn oversized_layout_is_rejected() {
        let (mut store, property, office, _, _) = seated(DeletePolicy::Block);
        let mut draft = office_draft(&property, OfficeType::Open);
        draft.layout = Some(GridLayout {
            rows: 100_000,
            columns: 100_000,
        });

        let err = store.update_office(&office, draft.clone()).unwrap_err();
        assert!(matches!(err, StoreError::InvalidLayout { rows: 100_000, .. }));
        assert!(store.create_office(draft).is_err());
        assert_eq!(
            store.office(&office).unwrap().layout,
            Some(GridLayout {
                rows: 2,
                columns: 2
            })
        );
    }

    #[test]
    fn office_cannot_become_private_while_desks_have_positions() {
        let (mut store, property, office, _, _) = seated(DeletePolicy::Block);
        let draft = office_draft(&property, OfficeType::Private);

        let err = store.update_office(&office, draft).unwrap_err();

        assert_eq!(
            err,
            StoreError::InvalidPosition {
                office: "Open 1".to_string(),
                row: 1,
                column: 1,
            }
        );
        assert!(store.office(&office).unwrap().is_open());
        assert!(store.audit().is_empty());
    }

    #[test]
    fn layout_cannot_shrink_below_placed_desks() {
        let (mut store, property, office, _, _) = seated(DeletePolicy::Block);
        store.create_workstation(desk_draft(&office, 2, 2)).unwrap();
        let mut draft = office_draft(&property, OfficeType::Open);
        draft.layout = Some(GridLayout {
            rows: 1,
            columns: 1,
        });

        let err = store.update_office(&office, draft).unwrap_err();

        assert!(matches!(
            err,
            StoreError::InvalidPosition {
                row: 2,
                column: 2,
                ..
            }
        ));
        assert_eq!(
            store.office(&office).unwrap().layout,
            Some(GridLayout {
                rows: 2,
                columns: 2
            })
        );
    }

    #[test]
    fn property_rename_cascades_into_caches() {
        let (mut store, property, office, desk, _) = seated(DeletePolicy::Block);

        assert_eq!(store.update_property(&property, property_draft("Tower")), Ok(true));

        assert_eq!(store.office(&office).unwrap().property_name, "Tower");
        assert_eq!(store.workstation(&desk).unwrap().property_name, "Tower");
    }

    #[test]
    fn office_edit_cascades_and_keeps_counter() {
        let (mut store, property, office, desk, _) = seated(DeletePolicy::Block);
        let mut draft = office_draft(&property, OfficeType::Open);
        draft.name = "Open West".to_string();
        draft.floor = 4;

        assert_eq!(store.update_office(&office, draft), Ok(true));

        let ws = store.workstation(&desk).unwrap();
        assert_eq!(ws.office_name, "Open West");
        assert_eq!(ws.floor, 4);
        assert_eq!(store.office(&office).unwrap().occupied_workstations, 1);
    }

    #[test]
    fn employee_edit_keeps_seat_and_renames_assignment() {
        let (mut store, _, _, desk, employee) = seated(DeletePolicy::Block);

        assert_eq!(store.update_employee(&employee, employee_draft("Lin Wei")), Ok(true));

        let emp = store.employee(&employee).unwrap();
        assert_eq!(emp.workstation_id.as_deref(), Some(desk.as_str()));
        assert_eq!(store.assignments()[0].employee_name, "Lin Wei");
    }

    #[test]
    fn assigned_workstation_status_is_locked() {
        let (mut store, _, office, desk, _) = seated(DeletePolicy::Block);
        let mut draft = desk_draft(&office, 1, 1);
        draft.status = WorkstationStatus::Reserved;

        assert_eq!(
            store.update_workstation(&desk, draft),
            Err(StoreError::WorkstationInUse {
                code: "WS-1-1".to_string()
            })
        );
        assert!(store.toggle_reserved(&desk).is_err());
    }

    #[test]
    fn code_and_position_of_assigned_desk_can_change() {
        let (mut store, _, office, desk, _) = seated(DeletePolicy::Block);
        let mut draft = desk_draft(&office, 2, 2);
        draft.status = WorkstationStatus::Occupied;

        assert_eq!(store.update_workstation(&desk, draft), Ok(true));
        let ws = store.workstation(&desk).unwrap();
        assert_eq!(ws.code, "WS-2-2");
        assert_eq!(ws.status, WorkstationStatus::Occupied);
        assert!(ws.assigned_to.is_some());
    }

    #[test]
    fn occupied_cannot_be_set_by_edit() {
        let (mut store, _, office, _, _) = seated(DeletePolicy::Block);
        let free = store.create_workstation(desk_draft(&office, 1, 2)).unwrap();
        let mut draft = desk_draft(&office, 1, 2);
        draft.status = WorkstationStatus::Occupied;

        assert_eq!(
            store.update_workstation(&free, draft),
            Err(StoreError::InvalidStatusChange {
                status: "occupied".to_string()
            })
        );
    }

    #[test]
    fn toggle_reserved_round_trip() {
        let (mut store, _, office, _, _) = seated(DeletePolicy::Block);
        let free = store.create_workstation(desk_draft(&office, 2, 1)).unwrap();

        assert_eq!(store.toggle_reserved(&free), Ok(true));
        assert_eq!(store.workstation(&free).unwrap().status, WorkstationStatus::Reserved);
        assert_eq!(store.toggle_reserved(&free), Ok(true));
        assert_eq!(store.workstation(&free).unwrap().status, WorkstationStatus::Available);
    }

    #[test]
    fn unknown_ids_are_silent_no_ops() {
        let (mut store, _, _, _, _) = seated(DeletePolicy::Block);
        let before = store.snapshot();

        assert_eq!(store.update_property("nope", property_draft("X")), Ok(false));
        assert_eq!(store.delete_office("nope"), Ok(false));
        assert_eq!(store.delete_workstation("nope"), Ok(false));
        assert_eq!(store.delete_employee("nope"), Ok(false));
        assert_eq!(store.toggle_reserved("nope"), Ok(false));
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn block_policy_refuses_deleting_seated_employee() {
        let (mut store, _, _, _, employee) = seated(DeletePolicy::Block);
        let before = store.snapshot();

        assert_eq!(
            store.delete_employee(&employee),
            Err(StoreError::DeletionBlocked {
                kind: "employee",
                id: employee.clone(),
                dependents: 1
            })
        );
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn cascade_policy_releases_desk_of_deleted_employee() {
        let (mut store, _, office, desk, employee) = seated(DeletePolicy::Cascade);

        assert_eq!(store.delete_employee(&employee), Ok(true));

        assert!(store.employee(&employee).is_none());
        assert!(store.assignments().is_empty());
        assert!(store.workstation(&desk).unwrap().is_free());
        assert_eq!(store.office(&office).unwrap().occupied_workstations, 0);
    }

    #[test]
    fn cascade_policy_deletes_whole_property_tree() {
        let (mut store, property, _, _, employee) = seated(DeletePolicy::Cascade);

        assert_eq!(store.delete_property(&property), Ok(true));

        assert!(store.properties().is_empty());
        assert!(store.offices().is_empty());
        assert!(store.workstations().is_empty());
        assert!(store.assignments().is_empty());
        assert_eq!(store.employee(&employee).unwrap().workstation_id, None);
    }

    #[test]
    fn empty_office_can_be_deleted_under_block() {
        let (mut store, property, _, _, _) = seated(DeletePolicy::Block);
        let empty = store
            .create_office(office_draft(&property, OfficeType::Special))
            .unwrap();

        assert_eq!(store.delete_office(&empty), Ok(true));
        assert!(store.office(&empty).is_none());
    }
}
