//! Error types for the workstation manager.

use std::path::PathBuf;
use thiserror::Error;

/// Reasons an assignment request is rejected. Nothing is mutated when
/// any of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignError {
    /// A workstation or employee was not selected.
    #[error("select both a workstation and an employee")]
    MissingSelection,

    #[error("workstation '{id}' does not exist")]
    UnknownWorkstation { id: String },

    #[error("employee '{id}' does not exist")]
    UnknownEmployee { id: String },

    /// The workstation is occupied, reserved, or still has an occupant.
    #[error("workstation '{code}' is not available")]
    WorkstationUnavailable { code: String },

    #[error("{name} already has workstation '{workstation_id}'")]
    EmployeeAlreadySeated {
        name: String,
        workstation_id: String,
    },
}

/// Errors raised by record creation, editing and deletion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A required form field was left blank.
    #[error("field '{field}' is required")]
    MissingField { field: &'static str },

    /// The record points at a parent that does not exist.
    #[error("{kind} '{id}' does not exist")]
    UnknownReference { kind: &'static str, id: String },

    /// A grid position was given for a non-open office or lies outside its layout.
    #[error("position {row}x{column} is not valid for office '{office}'")]
    InvalidPosition {
        office: String,
        row: u32,
        column: u32,
    },

    /// A layout on a non-open office, or one larger than the grid limit.
    #[error("layout {rows}x{columns} is not valid for office '{office}'")]
    InvalidLayout {
        office: String,
        rows: u32,
        columns: u32,
    },

    /// Status or occupant of an assigned workstation cannot be edited.
    #[error("workstation '{code}' has an active assignment")]
    WorkstationInUse { code: String },

    /// `occupied` can only be reached through an assignment.
    #[error("status '{status}' can only be set by assigning the workstation")]
    InvalidStatusChange { status: String },

    /// The record still has dependents and the delete policy is `block`.
    #[error("cannot delete {kind} '{id}': {dependents} dependent record(s)")]
    DeletionBlocked {
        kind: &'static str,
        id: String,
        dependents: usize,
    },
}

/// Errors that can occur when loading seed data.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Failed to read the seed file from disk.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not a valid seed document.
    #[error("invalid seed file '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Errors that can occur when loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Errors that can occur when exporting data.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to create the output file.
    #[error("failed to create file '{path}': {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write data to the file.
    #[error("failed to write data: {message}")]
    WriteError { message: String },

    /// Failed to serialize data to JSON.
    #[error("JSON serialization failed: {source}")]
    JsonSerialize {
        #[from]
        source: serde_json::Error,
    },

    /// Failed to write CSV data.
    #[error("CSV write failed: {source}")]
    CsvWrite {
        #[from]
        source: csv::Error,
    },
}
