pub mod assignment;
pub mod employee;
pub mod office;
pub mod property;
pub mod workstation;

pub use assignment::{Assignment, AssignmentStatus};
pub use employee::{Employee, EmployeeType, NewEmployee};
pub use office::{GridLayout, NewOffice, Office, OfficeType};
pub use property::{NewProperty, Property};
pub use workstation::{GridPosition, NewWorkstation, Workstation, WorkstationStatus};
