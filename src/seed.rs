//! Seed data: the reset point of the store.
//!
//! The JSON form mirrors the record shapes field for field, so an export
//! written by [`crate::export::export_json`] loads back unchanged.

use crate::error::SeedError;
use crate::model::{
    Assignment, AssignmentStatus, Employee, EmployeeType, GridLayout, GridPosition, Office,
    OfficeType, Property, Workstation, WorkstationStatus,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub properties: Vec<Property>,
    pub offices: Vec<Office>,
    pub workstations: Vec<Workstation>,
    pub employees: Vec<Employee>,
    pub assignments: Vec<Assignment>,
}

impl SeedData {
    /// Reads a seed document from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SeedError> {
        let path_ref = path.as_ref();
        let content = std::fs::read_to_string(path_ref).map_err(|source| SeedError::FileRead {
            path: path_ref.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| SeedError::Parse {
            path: path_ref.to_path_buf(),
            source,
        })
    }

    /// Consistent demo data: three buildings, grid-laid open areas, a few
    /// private rooms, and enough employees to leave some of them unseated.
    #[must_use]
    pub fn builtin() -> Self {
        let mut seed = SeedBuilder::default();

        let hq = seed.property(
            "FC001",
            "Provincial HQ Building",
            "Office building",
            "Guangzhou, Guangdong",
            "123 Tianhe Road, Tianhe District, Guangzhou",
            8500.0,
            10,
            Some("YUE2023001234"),
            "Headquarters",
        );
        let lab = seed.property(
            "FC002",
            "Technology R&D Center",
            "Research building",
            "Shenzhen, Guangdong",
            "56 Keyuan South Road, Nanshan District, Shenzhen",
            6200.0,
            8,
            Some("YUE2023005678"),
            "Shenzhen Branch",
        );
        let service = seed.property(
            "FC003",
            "Customer Service Center",
            "Service center",
            "Guangzhou, Guangdong",
            "89 Zhongshan 5th Road, Yuexiu District, Guangzhou",
            4500.0,
            6,
            None,
            "Customer Service Branch",
        );

        let open3 = seed.office(&hq, "Floor 3 Open Area", 3, OfficeType::Open, 20, Some((4, 5)));
        seed.grid_desks(&open3, "WS-3", 20, 5, 16, "Technology");
        seed.reserve(&open3, 20);

        let room301 = seed.office(&hq, "Room 301", 3, OfficeType::Private, 1, None);
        seed.single_desk(&room301, "WS-3-301", true, "Administration");
        let room302 = seed.office(&hq, "Room 302", 3, OfficeType::Private, 1, None);
        seed.single_desk(&room302, "WS-3-302", false, "Administration");
        seed.office(&hq, "Floor 3 Boardroom", 3, OfficeType::Special, 20, None);

        let open5 = seed.office(&hq, "Floor 5 Open Area", 5, OfficeType::Open, 24, Some((4, 6)));
        seed.grid_desks(&open5, "WS-5", 24, 6, 18, "Finance");
        let room501 = seed.office(&hq, "Room 501 General Manager", 5, OfficeType::Private, 1, None);
        seed.single_desk(&room501, "WS-5-501", true, "Management");
        seed.office(&hq, "Floor 5 Meeting Room A", 5, OfficeType::Special, 12, None);

        let rnd = seed.office(&lab, "R&D Open Area", 2, OfficeType::Open, 30, Some((5, 6)));
        seed.grid_desks(&rnd, "WS-T2", 30, 6, 22, "Research");

        let hall = seed.office(&service, "Service Hall", 1, OfficeType::Open, 25, Some((5, 5)));
        seed.grid_desks(&hall, "WS-S1", 25, 5, 20, "Customer Service");

        for (i, department) in ["Technology", "Marketing", "Finance", "Operations"]
            .iter()
            .enumerate()
        {
            seed.employee(department, EmployeeType::Internal);
            if i % 2 == 0 {
                seed.employee(department, EmployeeType::External);
            }
        }

        seed.finish()
    }
}

const GIVEN_NAMES: &[&str] = &[
    "Lin", "Wei", "Ming", "Yan", "Yuan", "Hong", "Fang", "Jun", "Lan", "Tao", "Xi", "Qing",
];
const FAMILY_NAMES: &[&str] = &[
    "Yang", "Zheng", "Guo", "Zhang", "Feng", "Sun", "Huang", "Qiao", "Zhu", "Xu", "Hu", "Liao",
    "Chen",
];
const COMPANY: &str = "Guangdong Provincial Co.";
const SEED_ADMINISTRATOR: &str = "Administrator A";

#[derive(Default)]
struct SeedBuilder {
    data: SeedData,
}

impl SeedBuilder {
    #[allow(clippy::too_many_arguments)]
    fn property(
        &mut self,
        code: &str,
        name: &str,
        property_type: &str,
        region: &str,
        address: &str,
        area: f64,
        floors: u32,
        certificate_no: Option<&str>,
        branch: &str,
    ) -> Property {
        let property = Property {
            id: format!("prop-{}", self.data.properties.len() + 1),
            code: code.to_string(),
            name: name.to_string(),
            property_type: property_type.to_string(),
            region: region.to_string(),
            address: address.to_string(),
            area,
            floors,
            certificate_no: certificate_no.map(str::to_string),
            company: Some(COMPANY.to_string()),
            branch_name: Some(branch.to_string()),
        };
        self.data.properties.push(property.clone());
        property
    }

    fn office(
        &mut self,
        property: &Property,
        name: &str,
        floor: i32,
        office_type: OfficeType,
        total: u32,
        layout: Option<(u32, u32)>,
    ) -> Office {
        let office = Office {
            id: format!("office-{}", self.data.offices.len() + 1),
            name: name.to_string(),
            floor,
            property_id: property.id.clone(),
            property_name: property.name.clone(),
            total_workstations: total,
            occupied_workstations: 0,
            office_type,
            layout: layout.map(|(rows, columns)| GridLayout { rows, columns }),
        };
        self.data.offices.push(office.clone());
        office
    }

    /// Desks numbered row by row; the first `occupied` get a new employee.
    fn grid_desks(
        &mut self,
        office: &Office,
        prefix: &str,
        count: u32,
        columns: u32,
        occupied: u32,
        department: &str,
    ) {
        for i in 1..=count {
            let code = format!("{prefix}-{i:03}");
            let position = GridPosition {
                row: (i - 1) / columns + 1,
                column: (i - 1) % columns + 1,
            };
            let id = self.desk(office, code, Some(position));
            if i <= occupied {
                self.seat(&id, department);
            }
        }
    }

    fn single_desk(&mut self, office: &Office, code: &str, occupied: bool, department: &str) {
        let id = self.desk(office, code.to_string(), None);
        if occupied {
            self.seat(&id, department);
        }
    }

    /// Marks the `n`-th desk (1-based) of an office reserved.
    fn reserve(&mut self, office: &Office, n: usize) {
        if let Some(ws) = self
            .data
            .workstations
            .iter_mut()
            .filter(|ws| ws.office_id == office.id)
            .nth(n - 1)
        {
            if ws.assigned_to.is_none() {
                ws.status = WorkstationStatus::Reserved;
            }
        }
    }

    fn desk(&mut self, office: &Office, code: String, position: Option<GridPosition>) -> String {
        let id = format!("ws-{}", self.data.workstations.len() + 1);
        self.data.workstations.push(Workstation {
            id: id.clone(),
            code,
            office_id: office.id.clone(),
            office_name: office.name.clone(),
            floor: office.floor,
            property_id: office.property_id.clone(),
            property_name: office.property_name.clone(),
            position,
            status: WorkstationStatus::Available,
            assigned_to: None,
        });
        id
    }

    fn employee(&mut self, department: &str, employee_type: EmployeeType) -> String {
        let n = self.data.employees.len();
        let name = format!(
            "{} {}",
            GIVEN_NAMES[n % GIVEN_NAMES.len()],
            FAMILY_NAMES[n % FAMILY_NAMES.len()]
        );
        let id = format!("emp-{}", n + 1);
        self.data.employees.push(Employee {
            id: id.clone(),
            name,
            department: department.to_string(),
            company: COMPANY.to_string(),
            employee_no: format!("E{:03}", n + 1),
            employee_type,
            workstation_id: None,
        });
        id
    }

    fn seat(&mut self, workstation_id: &str, department: &str) {
        let employee_id = self.employee(department, EmployeeType::Internal);
        let n = self.data.assignments.len();

        let Some(employee) = self.data.employees.iter_mut().find(|e| e.id == employee_id) else {
            return;
        };
        employee.workstation_id = Some(workstation_id.to_string());
        let employee_name = employee.name.clone();

        if let Some(ws) = self
            .data
            .workstations
            .iter_mut()
            .find(|ws| ws.id == workstation_id)
        {
            ws.status = WorkstationStatus::Occupied;
            ws.assigned_to = Some(employee_id.clone());
        }

        self.data.assignments.push(Assignment {
            id: format!("asg-{}", n + 1),
            workstation_id: workstation_id.to_string(),
            employee_id,
            employee_name,
            assigned_by: SEED_ADMINISTRATOR.to_string(),
            assigned_at: format!(
                "2024-01-{:02} {:02}:{:02}:00",
                15 + n / 40,
                9 + (n / 8) % 5,
                (n * 5) % 60
            ),
            status: AssignmentStatus::Active,
        });
    }

    fn finish(mut self) -> SeedData {
        for office in &mut self.data.offices {
            office.occupied_workstations = self
                .data
                .workstations
                .iter()
                .filter(|ws| ws.office_id == office.id && ws.status == WorkstationStatus::Occupied)
                .count() as u32;
        }
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn builtin_counts() {
        let seed = SeedData::builtin();

        assert_eq!(seed.properties.len(), 3);
        assert_eq!(seed.workstations.len(), 20 + 1 + 1 + 24 + 1 + 30 + 25);
        assert_eq!(seed.assignments.len(), 16 + 1 + 18 + 1 + 22 + 20);
        assert_eq!(seed.employees.len(), seed.assignments.len() + 6);
    }

    #[test]
    fn builtin_back_references_match() {
        let seed = SeedData::builtin();

        for assignment in &seed.assignments {
            let ws = seed
                .workstations
                .iter()
                .find(|ws| ws.id == assignment.workstation_id)
                .unwrap();
            let emp = seed
                .employees
                .iter()
                .find(|e| e.id == assignment.employee_id)
                .unwrap();
            assert_eq!(ws.status, WorkstationStatus::Occupied);
            assert_eq!(ws.assigned_to.as_deref(), Some(emp.id.as_str()));
            assert_eq!(emp.workstation_id.as_deref(), Some(ws.id.as_str()));
        }
    }

    #[test]
    fn builtin_grid_positions_fit_layout() {
        let seed = SeedData::builtin();

        for ws in seed.workstations.iter().filter(|ws| ws.position.is_some()) {
            let office = seed.offices.iter().find(|o| o.id == ws.office_id).unwrap();
            let layout = office.layout.unwrap();
            let pos = ws.position.unwrap();
            assert!(pos.row >= 1 && pos.row <= layout.rows, "{}", ws.code);
            assert!(pos.column >= 1 && pos.column <= layout.columns, "{}", ws.code);
        }
    }

    #[test]
    fn load_reads_wire_field_names() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "workstations": [{{
                    "id": "ws-1-1-1", "code": "WS-1", "officeId": "1", "officeName": "Open",
                    "floor": 1, "propertyId": "1", "propertyName": "HQ",
                    "status": "occupied", "assignedTo": "emp-1"
                }}],
                "employees": [{{
                    "id": "emp-1", "name": "Lin Yang", "department": "Tech",
                    "company": "Co", "employeeNo": "E001", "type": "internal",
                    "workstationId": "ws-1-1-1"
                }}]
            }}"#
        )
        .unwrap();

        let seed = SeedData::load(file.path()).unwrap();

        assert!(seed.properties.is_empty());
        assert_eq!(seed.workstations[0].assigned_to.as_deref(), Some("emp-1"));
        assert_eq!(seed.workstations[0].position, None);
        assert_eq!(seed.employees[0].employee_type, EmployeeType::Internal);
    }

    #[test]
    fn load_rejects_bad_status() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "assignments": [{{ "id": "a", "status": "done" }}] }}"#).unwrap();

        assert!(matches!(
            SeedData::load(file.path()),
            Err(SeedError::Parse { .. })
        ));
    }
}
