use crate::error::ExportError;
use crate::store::Store;
use std::fs::File;
use std::path::Path;

fn create_writer(path: &Path) -> Result<csv::Writer<File>, ExportError> {
    let file = File::create(path).map_err(|source| ExportError::FileCreate {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(csv::Writer::from_writer(file))
}

fn finish(mut writer: csv::Writer<File>) -> Result<(), ExportError> {
    writer.flush().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })
}

/// Workstation planning list with live office and occupant names.
pub fn export_workstations_csv<P: AsRef<Path>>(store: &Store, path: P) -> Result<(), ExportError> {
    let mut writer = create_writer(path.as_ref())?;

    writer.write_record([
        "Code", "Property", "Office", "Floor", "Row", "Column", "Status", "Employee",
    ])?;

    for ws in store.workstations() {
        let (row, column) = ws.position.map_or((String::new(), String::new()), |p| {
            (p.row.to_string(), p.column.to_string())
        });
        let occupant = ws
            .assigned_to
            .as_deref()
            .and_then(|id| store.employee(id))
            .map(|e| e.name.as_str())
            .unwrap_or_default();

        let floor = ws.floor.to_string();
        let status = ws.status.to_string();

        writer.write_record([
            ws.code.as_str(),
            store
                .property_name(&ws.property_id)
                .unwrap_or(ws.property_name.as_str()),
            store
                .office_name(&ws.office_id)
                .unwrap_or(ws.office_name.as_str()),
            floor.as_str(),
            row.as_str(),
            column.as_str(),
            status.as_str(),
            occupant,
        ])?;
    }

    finish(writer)
}

pub fn export_assignments_csv<P: AsRef<Path>>(store: &Store, path: P) -> Result<(), ExportError> {
    let mut writer = create_writer(path.as_ref())?;

    writer.write_record([
        "Employee",
        "Employee No",
        "Department",
        "Type",
        "Workstation",
        "Office",
        "Assigned By",
        "Assigned At",
        "Status",
    ])?;

    for row in store.assignment_rows() {
        let (employee_no, department, employee_type) =
            row.employee.map_or((String::new(), String::new(), String::new()), |e| {
                (
                    e.employee_no.clone(),
                    e.department.clone(),
                    e.employee_type.to_string(),
                )
            });
        let status = if row.assignment.is_active() {
            "active"
        } else {
            "inactive"
        };

        writer.write_record([
            row.assignment.employee_name.as_str(),
            employee_no.as_str(),
            department.as_str(),
            employee_type.as_str(),
            row.workstation_code(),
            row.office_name(),
            row.assignment.assigned_by.as_str(),
            row.assignment.assigned_at.as_str(),
            status,
        ])?;
    }

    finish(writer)
}

/// Office premises report, one row per property.
pub fn export_report_csv<P: AsRef<Path>>(store: &Store, path: P) -> Result<(), ExportError> {
    let mut writer = create_writer(path.as_ref())?;

    writer.write_record([
        "No",
        "Company",
        "Branch",
        "Certificate No",
        "Property",
        "Building Area (m2)",
        "Address",
        "Share",
    ])?;

    for row in store.property_report() {
        let share = row
            .area_share
            .map_or_else(|| "-".to_string(), |s| format!("{s:.1}%"));
        writer.write_record([
            row.sequence.to_string().as_str(),
            row.company_name.as_str(),
            row.branch_name.as_deref().unwrap_or("-"),
            row.certificate_no.as_str(),
            row.property_name.as_str(),
            format!("{:.0}", row.building_area).as_str(),
            row.address.as_str(),
            share.as_str(),
        ])?;
    }

    finish(writer)
}

/// Area per branch, one row per branch of the report summary.
pub fn export_branches_csv<P: AsRef<Path>>(store: &Store, path: P) -> Result<(), ExportError> {
    let mut writer = create_writer(path.as_ref())?;

    writer.write_record(["Branch", "Building Area (m2)", "Properties"])?;

    for branch in store.report_summary().branches {
        writer.write_record([
            branch.branch_name.as_deref().unwrap_or("-"),
            format!("{:.0}", branch.area).as_str(),
            branch.properties.to_string().as_str(),
        ])?;
    }

    finish(writer)
}
