//! Assign and unassign: the only way a workstation becomes occupied or
//! free again.
//!
//! Each call validates first and mutates afterwards, touching the
//! workstation, the employee, the assignment list and the office counter
//! in one step.

use super::{new_id, Store};
use crate::config::UnassignMode;
use crate::error::AssignError;
use crate::model::{Assignment, AssignmentStatus, WorkstationStatus};

/// Display format of `assignedAt`, matching the seeded records.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnassignOutcome {
    /// The assignment record was removed.
    Released,
    /// The assignment record was kept with status `inactive`.
    Deactivated,
    /// The confirmation gate said no; nothing changed.
    Declined,
    /// No active assignment with that id; nothing changed.
    NotFound,
}

impl Store {
    /// Binds an available workstation to an unseated employee.
    ///
    /// # Errors
    ///
    /// Returns an [`AssignError`] when either id is empty or unknown, the
    /// workstation is not available, or the employee already has a desk.
    /// The store is left untouched in every error case.
    pub fn assign(
        &mut self,
        workstation_id: &str,
        employee_id: &str,
    ) -> Result<Assignment, AssignError> {
        if let Err(err) = self.check_assignable(workstation_id, employee_id) {
            tracing::warn!(workstation_id, employee_id, error = %err, "assignment rejected");
            return Err(err);
        }

        let mut employee_name = String::new();
        if let Some(employee) = self.employees.iter_mut().find(|e| e.id == employee_id) {
            employee.workstation_id = Some(workstation_id.to_string());
            employee_name.clone_from(&employee.name);
        }

        let mut office_id = String::new();
        if let Some(ws) = self.workstations.iter_mut().find(|ws| ws.id == workstation_id) {
            ws.status = WorkstationStatus::Occupied;
            ws.assigned_to = Some(employee_id.to_string());
            office_id.clone_from(&ws.office_id);
        }

        let assignment = Assignment {
            id: new_id("asg"),
            workstation_id: workstation_id.to_string(),
            employee_id: employee_id.to_string(),
            employee_name,
            assigned_by: self.config.administrator.clone(),
            assigned_at: chrono::Local::now().format(TIMESTAMP_FORMAT).to_string(),
            status: AssignmentStatus::Active,
        };
        self.assignments.push(assignment.clone());
        self.refresh_office_counter(&office_id);

        tracing::info!(
            assignment_id = %assignment.id,
            workstation_id,
            employee_id,
            "workstation assigned"
        );
        Ok(assignment)
    }

    fn check_assignable(&self, workstation_id: &str, employee_id: &str) -> Result<(), AssignError> {
        if workstation_id.is_empty() || employee_id.is_empty() {
            return Err(AssignError::MissingSelection);
        }

        let ws = self
            .workstation(workstation_id)
            .ok_or_else(|| AssignError::UnknownWorkstation {
                id: workstation_id.to_string(),
            })?;
        let employee = self
            .employee(employee_id)
            .ok_or_else(|| AssignError::UnknownEmployee {
                id: employee_id.to_string(),
            })?;

        let ws_taken = self
            .active_assignments()
            .any(|a| a.workstation_id == workstation_id);
        if !ws.is_free() || ws_taken {
            return Err(AssignError::WorkstationUnavailable {
                code: ws.code.clone(),
            });
        }

        let seated_at = employee.workstation_id.clone().or_else(|| {
            self.active_assignments()
                .find(|a| a.employee_id == employee_id)
                .map(|a| a.workstation_id.clone())
        });
        if let Some(workstation_id) = seated_at {
            return Err(AssignError::EmployeeAlreadySeated {
                name: employee.name.clone(),
                workstation_id,
            });
        }

        Ok(())
    }

    /// Releases an active assignment after `confirm` approves it.
    ///
    /// The gate sees the assignment before anything is touched. An unknown
    /// or inactive id is a silent no-op.
    pub fn unassign<F>(&mut self, assignment_id: &str, confirm: F) -> UnassignOutcome
    where
        F: FnOnce(&Assignment) -> bool,
    {
        let Some(index) = self
            .assignments
            .iter()
            .position(|a| a.id == assignment_id && a.is_active())
        else {
            tracing::debug!(assignment_id, "unassign ignored: no active assignment");
            return UnassignOutcome::NotFound;
        };

        if !confirm(&self.assignments[index]) {
            tracing::debug!(assignment_id, "unassign declined");
            return UnassignOutcome::Declined;
        }

        self.release_at(index)
    }

    /// Releases whatever active assignment holds this workstation.
    pub fn release_workstation(&mut self, workstation_id: &str) -> UnassignOutcome {
        match self
            .assignments
            .iter()
            .position(|a| a.is_active() && a.workstation_id == workstation_id)
        {
            Some(index) => self.release_at(index),
            None => UnassignOutcome::NotFound,
        }
    }

    /// Releases whatever active assignment seats this employee.
    pub fn release_employee(&mut self, employee_id: &str) -> UnassignOutcome {
        match self
            .assignments
            .iter()
            .position(|a| a.is_active() && a.employee_id == employee_id)
        {
            Some(index) => self.release_at(index),
            None => UnassignOutcome::NotFound,
        }
    }

    fn release_at(&mut self, index: usize) -> UnassignOutcome {
        let assignment = self.assignments[index].clone();

        let mut office_id = None;
        if let Some(ws) = self
            .workstations
            .iter_mut()
            .find(|ws| ws.id == assignment.workstation_id)
        {
            // Leave a desk alone if some other record claims it.
            if ws.assigned_to.is_none() || ws.assigned_to.as_deref() == Some(&assignment.employee_id)
            {
                ws.status = WorkstationStatus::Available;
                ws.assigned_to = None;
                office_id = Some(ws.office_id.clone());
            }
        }

        if let Some(employee) = self
            .employees
            .iter_mut()
            .find(|e| e.id == assignment.employee_id)
        {
            if employee.workstation_id.is_none()
                || employee.workstation_id.as_deref() == Some(&assignment.workstation_id)
            {
                employee.workstation_id = None;
            }
        }

        let outcome = match self.config.unassign_mode {
            UnassignMode::Remove => {
                self.assignments.remove(index);
                UnassignOutcome::Released
            }
            UnassignMode::Deactivate => {
                self.assignments[index].status = AssignmentStatus::Inactive;
                UnassignOutcome::Deactivated
            }
        };

        if let Some(office_id) = office_id {
            self.refresh_office_counter(&office_id);
        }

        tracing::info!(
            assignment_id = %assignment.id,
            workstation_id = %assignment.workstation_id,
            employee_id = %assignment.employee_id,
            ?outcome,
            "workstation released"
        );
        outcome
    }
}
