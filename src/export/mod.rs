pub mod csv;
pub mod json;

pub use crate::error::ExportError;
pub use csv::{
    export_assignments_csv, export_branches_csv, export_report_csv, export_workstations_csv,
};
pub use json::export_json;
