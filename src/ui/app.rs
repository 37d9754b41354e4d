use crate::model::{Employee, Office, Property, Workstation, WorkstationStatus};
use crate::store::{AssignmentRow, Store, UnassignOutcome, WorkstationFilter};
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{DefaultTerminal, Frame};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Overview,
    Properties,
    Offices,
    Workstations,
    Employees,
    Assignments,
    Reports,
    FloorPlan,
}

impl View {
    pub const ALL: [Self; 8] = [
        Self::Overview,
        Self::Properties,
        Self::Offices,
        Self::Workstations,
        Self::Employees,
        Self::Assignments,
        Self::Reports,
        Self::FloorPlan,
    ];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Properties => "Properties",
            Self::Offices => "Offices",
            Self::Workstations => "Workstations",
            Self::Employees => "Employees",
            Self::Assignments => "Assignments",
            Self::Reports => "Reports",
            Self::FloorPlan => "Floor Plan",
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|v| *v == self).unwrap_or(0)
    }
}

/// Destructive action waiting for a y/n answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    Unassign(String),
    DeleteProperty(String),
    DeleteOffice(String),
    DeleteWorkstation(String),
    DeleteEmployee(String),
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignStage {
    Workstation,
    Employee,
}

/// Two-step picker: an available workstation, then an unassigned employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignPicker {
    pub stage: AssignStage,
    pub workstation: usize,
    pub employee: usize,
    pub workstation_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Blocking message, dismissed by any key.
    Message(String),
    Confirm {
        prompt: String,
        action: PendingAction,
    },
    Assign(AssignPicker),
}

pub struct App {
    pub store: Store,
    pub view: View,
    pub selected: [usize; View::ALL.len()],
    pub workstation_filter: WorkstationFilter,
    /// True while typing into the workstation code search.
    pub searching: bool,
    pub floor_property: usize,
    pub floor_index: usize,
    pub modal: Option<Modal>,
    pub status: String,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(store: Store) -> Self {
        let issues = store.audit().len();
        let status = if issues == 0 {
            "Ready".to_string()
        } else {
            format!("Seed has {issues} inconsistencies (run with --audit for details)")
        };
        Self {
            store,
            view: View::Overview,
            selected: [0; View::ALL.len()],
            workstation_filter: WorkstationFilter::default(),
            searching: false,
            floor_property: 0,
            floor_index: 0,
            modal: None,
            status,
            should_quit: false,
        }
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        super::dashboard::draw(frame, self);
    }

    fn handle_events(&mut self) -> Result<()> {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }
            self.handle_key(key.code);
        }
        Ok(())
    }

    /// Routes one key press. Modals and the search prompt take precedence.
    pub fn handle_key(&mut self, code: KeyCode) {
        if let Some(modal) = self.modal.take() {
            self.handle_modal_keys(modal, code);
            return;
        }
        if self.searching {
            self.handle_search_keys(code);
            return;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.switch_view(1),
            KeyCode::BackTab => self.switch_view(View::ALL.len() - 1),
            KeyCode::Char(c @ '1'..='8') => {
                let index = c as usize - '1' as usize;
                self.view = View::ALL[index];
            }
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(false),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(true),
            KeyCode::Left | KeyCode::Char('h') if self.view == View::FloorPlan => {
                self.previous_floor();
            }
            KeyCode::Right | KeyCode::Char('l') if self.view == View::FloorPlan => {
                self.next_floor();
            }
            KeyCode::Char('a') => self.open_assign(),
            KeyCode::Char('d') | KeyCode::Delete => self.request_delete(),
            KeyCode::Char('r') if self.view == View::Workstations => self.toggle_reserved(),
            KeyCode::Char('f') if self.view == View::Workstations => self.cycle_status_filter(),
            KeyCode::Char('/') if self.view == View::Workstations => self.searching = true,
            KeyCode::Char('c') if self.view == View::Workstations => {
                self.workstation_filter.reset();
                self.selected[View::Workstations.index()] = 0;
            }
            KeyCode::Char('R') => {
                self.modal = Some(Modal::Confirm {
                    prompt: "Discard all changes and reload the seed data?".to_string(),
                    action: PendingAction::Reset,
                });
            }
            _ => {}
        }
    }

    fn switch_view(&mut self, step: usize) {
        let next = (self.view.index() + step) % View::ALL.len();
        self.view = View::ALL[next];
    }

    /// Rows in the current view's main list.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows_in(self.view)
    }

    fn rows_in(&self, view: View) -> usize {
        match view {
            View::Overview | View::Properties | View::Reports | View::FloorPlan => {
                self.store.properties().len()
            }
            View::Offices => self.store.offices().len(),
            View::Workstations => self.filtered_workstations().len(),
            View::Employees => self.store.employees().len(),
            View::Assignments => self.store.assignments().len(),
        }
    }

    #[must_use]
    pub fn selected_row(&self) -> usize {
        self.selected[self.view.index()]
    }

    fn move_selection(&mut self, down: bool) {
        let count = self.row_count();
        let index = self.view.index();
        let current = self.selected[index];
        self.selected[index] = if down {
            (current + 1).min(count.saturating_sub(1))
        } else {
            current.saturating_sub(1)
        };
        if self.view == View::FloorPlan {
            self.floor_property = self.selected[index];
            self.floor_index = 0;
        }
    }

    /// Keeps every cursor inside its list after a mutation.
    fn clamp_selection(&mut self) {
        for view in View::ALL {
            let max = self.rows_in(view).saturating_sub(1);
            let slot = &mut self.selected[view.index()];
            *slot = (*slot).min(max);
        }
        self.floor_property = self
            .floor_property
            .min(self.store.properties().len().saturating_sub(1));
    }

    #[must_use]
    pub fn filtered_workstations(&self) -> Vec<&Workstation> {
        self.store.filter_workstations(&self.workstation_filter)
    }

    #[must_use]
    pub fn selected_property(&self) -> Option<&Property> {
        self.store.properties().get(self.selected_row())
    }

    #[must_use]
    pub fn selected_office(&self) -> Option<&Office> {
        self.store.offices().get(self.selected[View::Offices.index()])
    }

    #[must_use]
    pub fn selected_workstation(&self) -> Option<&Workstation> {
        self.filtered_workstations()
            .get(self.selected[View::Workstations.index()])
            .copied()
    }

    #[must_use]
    pub fn selected_employee(&self) -> Option<&Employee> {
        self.store
            .employees()
            .get(self.selected[View::Employees.index()])
    }

    #[must_use]
    pub fn selected_assignment(&self) -> Option<AssignmentRow<'_>> {
        self.store
            .assignment_rows()
            .get(self.selected[View::Assignments.index()])
            .copied()
    }

    /// Property shown on the floor plan and its floor list.
    #[must_use]
    pub fn floor_selection(&self) -> Option<(&Property, Vec<i32>)> {
        let property = self.store.properties().get(self.floor_property)?;
        Some((property, self.store.floors(&property.id)))
    }

    #[must_use]
    pub fn current_floor(&self) -> Option<i32> {
        let (_, floors) = self.floor_selection()?;
        floors.get(self.floor_index).copied()
    }

    fn previous_floor(&mut self) {
        self.floor_index = self.floor_index.saturating_sub(1);
    }

    fn next_floor(&mut self) {
        let count = self.floor_selection().map_or(0, |(_, floors)| floors.len());
        if self.floor_index + 1 < count {
            self.floor_index += 1;
        }
    }

    fn cycle_status_filter(&mut self) {
        // All statuses in order, then back to no filter.
        self.workstation_filter.status = match self.workstation_filter.status {
            None => WorkstationStatus::ALL.first().copied(),
            Some(current) => WorkstationStatus::ALL
                .iter()
                .skip_while(|status| **status != current)
                .nth(1)
                .copied(),
        };
        self.selected[View::Workstations.index()] = 0;
    }

    fn handle_search_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Esc => self.searching = false,
            KeyCode::Backspace => {
                self.workstation_filter.code_query.pop();
            }
            KeyCode::Char(c) => self.workstation_filter.code_query.push(c),
            _ => {}
        }
        self.selected[View::Workstations.index()] = 0;
    }

    fn toggle_reserved(&mut self) {
        let Some(id) = self.selected_workstation().map(|ws| ws.id.clone()) else {
            return;
        };
        match self.store.toggle_reserved(&id) {
            Ok(_) => self.status = "Workstation status changed".to_string(),
            Err(err) => self.modal = Some(Modal::Message(err.to_string())),
        }
        self.clamp_selection();
    }

    fn open_assign(&mut self) {
        self.modal = Some(Modal::Assign(AssignPicker {
            stage: AssignStage::Workstation,
            workstation: 0,
            employee: 0,
            workstation_id: None,
        }));
    }

    fn request_delete(&mut self) {
        let request = match self.view {
            View::Properties => self.selected_property().map(|p| {
                (
                    format!("Delete property '{}'?", p.name),
                    PendingAction::DeleteProperty(p.id.clone()),
                )
            }),
            View::Offices => self.selected_office().map(|o| {
                (
                    format!("Delete office '{}'?", o.name),
                    PendingAction::DeleteOffice(o.id.clone()),
                )
            }),
            View::Workstations => self.selected_workstation().map(|ws| {
                (
                    format!("Delete workstation '{}'?", ws.code),
                    PendingAction::DeleteWorkstation(ws.id.clone()),
                )
            }),
            View::Employees => self.selected_employee().map(|e| {
                (
                    format!("Delete employee '{}'?", e.name),
                    PendingAction::DeleteEmployee(e.id.clone()),
                )
            }),
            View::Assignments => self
                .selected_assignment()
                .filter(|row| row.assignment.is_active())
                .map(|row| {
                    (
                        format!(
                            "Release {} from {}?",
                            row.assignment.employee_name,
                            row.workstation_code()
                        ),
                        PendingAction::Unassign(row.assignment.id.clone()),
                    )
                }),
            View::Overview | View::Reports | View::FloorPlan => None,
        };

        if let Some((prompt, action)) = request {
            self.modal = Some(Modal::Confirm { prompt, action });
        }
    }

    fn handle_modal_keys(&mut self, modal: Modal, code: KeyCode) {
        match modal {
            Modal::Message(_) => {}
            Modal::Confirm { prompt, action } => match code {
                KeyCode::Char('y' | 'Y') | KeyCode::Enter => self.execute(action),
                KeyCode::Char('n' | 'N') | KeyCode::Esc => self.status = "Cancelled".to_string(),
                _ => self.modal = Some(Modal::Confirm { prompt, action }),
            },
            Modal::Assign(picker) => self.handle_assign_keys(picker, code),
        }
    }

    fn execute(&mut self, action: PendingAction) {
        let result = match action {
            PendingAction::Unassign(id) => Ok(match self.store.unassign(&id, |_| true) {
                UnassignOutcome::Released => "Assignment removed".to_string(),
                UnassignOutcome::Deactivated => "Assignment deactivated".to_string(),
                UnassignOutcome::Declined | UnassignOutcome::NotFound => {
                    "Nothing to release".to_string()
                }
            }),
            PendingAction::DeleteProperty(id) => self
                .store
                .delete_property(&id)
                .map(|deleted| deletion_status("Property", deleted)),
            PendingAction::DeleteOffice(id) => self
                .store
                .delete_office(&id)
                .map(|deleted| deletion_status("Office", deleted)),
            PendingAction::DeleteWorkstation(id) => self
                .store
                .delete_workstation(&id)
                .map(|deleted| deletion_status("Workstation", deleted)),
            PendingAction::DeleteEmployee(id) => self
                .store
                .delete_employee(&id)
                .map(|deleted| deletion_status("Employee", deleted)),
            PendingAction::Reset => {
                self.store.reset();
                Ok("Seed data reloaded".to_string())
            }
        };

        match result {
            Ok(status) => self.status = status,
            Err(err) => self.modal = Some(Modal::Message(err.to_string())),
        }
        self.clamp_selection();
    }

    fn handle_assign_keys(&mut self, mut picker: AssignPicker, code: KeyCode) {
        let workstation_count = self.store.available_workstations().len();
        let employee_count = self.store.unassigned_employees().len();

        match (picker.stage, code) {
            (_, KeyCode::Esc) if picker.stage == AssignStage::Employee => {
                picker.stage = AssignStage::Workstation;
                picker.workstation_id = None;
            }
            (_, KeyCode::Esc) => {
                self.status = "Cancelled".to_string();
                return;
            }
            (AssignStage::Workstation, KeyCode::Up | KeyCode::Char('k')) => {
                picker.workstation = picker.workstation.saturating_sub(1);
            }
            (AssignStage::Workstation, KeyCode::Down | KeyCode::Char('j')) => {
                picker.workstation = (picker.workstation + 1).min(workstation_count.saturating_sub(1));
            }
            (AssignStage::Employee, KeyCode::Up | KeyCode::Char('k')) => {
                picker.employee = picker.employee.saturating_sub(1);
            }
            (AssignStage::Employee, KeyCode::Down | KeyCode::Char('j')) => {
                picker.employee = (picker.employee + 1).min(employee_count.saturating_sub(1));
            }
            (AssignStage::Workstation, KeyCode::Enter) => {
                picker.workstation_id = self
                    .store
                    .available_workstations()
                    .get(picker.workstation)
                    .map(|ws| ws.id.clone());
                picker.stage = AssignStage::Employee;
            }
            (AssignStage::Employee, KeyCode::Enter) => {
                let workstation_id = picker.workstation_id.unwrap_or_default();
                let employee_id = self
                    .store
                    .unassigned_employees()
                    .get(picker.employee)
                    .map(|e| e.id.clone())
                    .unwrap_or_default();
                match self.store.assign(&workstation_id, &employee_id) {
                    Ok(assignment) => {
                        self.status = format!("Assigned {}", assignment.employee_name);
                    }
                    Err(err) => self.modal = Some(Modal::Message(err.to_string())),
                }
                self.clamp_selection();
                return;
            }
            _ => {}
        }
        self.modal = Some(Modal::Assign(picker));
    }
}

fn deletion_status(kind: &str, deleted: bool) -> String {
    if deleted {
        format!("{kind} deleted")
    } else {
        format!("{kind} no longer exists")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use crate::seed::SeedData;
    use pretty_assertions::assert_eq;

    fn app() -> App {
        App::new(Store::from_seed(SeedData::builtin(), StoreConfig::default()))
    }

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            app.handle_key(*key);
        }
    }

    #[test]
    fn tab_cycles_through_views() {
        let mut app = app();

        press(&mut app, &[KeyCode::Tab, KeyCode::Tab]);
        assert_eq!(app.view, View::Offices);
        press(&mut app, &[KeyCode::BackTab, KeyCode::BackTab, KeyCode::BackTab]);
        assert_eq!(app.view, View::FloorPlan);
        press(&mut app, &[KeyCode::Char('6')]);
        assert_eq!(app.view, View::Assignments);
    }

    #[test]
    fn assign_dialog_seats_first_free_pair() {
        let mut app = app();
        let ws = app.store.available_workstations()[0].id.clone();
        let emp = app.store.unassigned_employees()[0].id.clone();

        press(&mut app, &[KeyCode::Char('a'), KeyCode::Enter, KeyCode::Enter]);

        assert_eq!(app.modal, None);
        assert_eq!(
            app.store.workstation(&ws).unwrap().assigned_to.as_deref(),
            Some(emp.as_str())
        );
    }

    #[test]
    fn escape_steps_back_then_closes_picker() {
        let mut app = app();

        press(&mut app, &[KeyCode::Char('a'), KeyCode::Enter, KeyCode::Esc]);
        assert!(matches!(
            app.modal,
            Some(Modal::Assign(AssignPicker {
                stage: AssignStage::Workstation,
                ..
            }))
        ));
        press(&mut app, &[KeyCode::Esc]);
        assert_eq!(app.modal, None);
    }

    #[test]
    fn declined_unassign_changes_nothing() {
        let mut app = app();
        let before = app.store.snapshot();

        press(&mut app, &[KeyCode::Char('6'), KeyCode::Char('d')]);
        assert!(matches!(app.modal, Some(Modal::Confirm { .. })));
        press(&mut app, &[KeyCode::Char('n')]);

        assert_eq!(app.modal, None);
        assert_eq!(app.store.snapshot(), before);
    }

    #[test]
    fn confirmed_unassign_frees_the_desk() {
        let mut app = app();
        let first = app.store.assignments()[0].clone();

        press(&mut app, &[KeyCode::Char('6'), KeyCode::Char('d'), KeyCode::Char('y')]);

        assert!(app.store.assignment(&first.id).is_none());
        assert!(app.store.workstation(&first.workstation_id).unwrap().is_free());
    }

    #[test]
    fn blocked_delete_shows_message() {
        let mut app = app();

        press(&mut app, &[KeyCode::Char('5'), KeyCode::Char('d'), KeyCode::Char('y')]);

        assert!(matches!(app.modal, Some(Modal::Message(_))));
        press(&mut app, &[KeyCode::Char('x')]);
        assert_eq!(app.modal, None);
    }

    #[test]
    fn search_and_status_filter_narrow_workstations() {
        let mut app = app();

        press(&mut app, &[KeyCode::Char('4'), KeyCode::Char('/')]);
        for c in "ws-s1".chars() {
            app.handle_key(KeyCode::Char(c));
        }
        press(&mut app, &[KeyCode::Enter, KeyCode::Char('f')]);

        assert_eq!(app.row_count(), 5);
        press(&mut app, &[KeyCode::Char('c')]);
        assert_eq!(app.row_count(), app.store.workstations().len());
    }

    #[test]
    fn status_filter_cycles_through_every_status() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('4')]);

        let mut seen = Vec::new();
        for _ in 0..4 {
            press(&mut app, &[KeyCode::Char('f')]);
            seen.push(app.workstation_filter.status);
        }

        assert_eq!(
            seen,
            vec![
                Some(WorkstationStatus::Available),
                Some(WorkstationStatus::Occupied),
                Some(WorkstationStatus::Reserved),
                None,
            ]
        );
    }

    #[test]
    fn floor_plan_walks_floors_of_selected_property() {
        let mut app = app();

        press(&mut app, &[KeyCode::Char('8')]);
        assert_eq!(app.current_floor(), Some(3));
        press(&mut app, &[KeyCode::Right, KeyCode::Right]);
        assert_eq!(app.current_floor(), Some(5));
        press(&mut app, &[KeyCode::Down]);
        assert_eq!(app.current_floor(), Some(2));
    }
}
