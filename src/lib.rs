//! # Workstation Manager
//!
//! A terminal dashboard for office premises: properties, offices,
//! workstations, employees and the assignments binding desks to people.
//!
//! ## Features
//!
//! - Assign and release workstations while keeping desks, employees,
//!   assignment records and office counters consistent
//! - Create, edit and delete records with referential checks
//! - Occupancy and utilization per property, office and floor
//! - Floor plans with desk grids for open offices
//! - Office premises report
//! - Export to CSV and JSON
//!
//! ## Example
//!
//! ```no_run
//! use workstation_manager::config::StoreConfig;
//! use workstation_manager::seed::SeedData;
//! use workstation_manager::store::Store;
//!
//! let mut store = Store::from_seed(SeedData::builtin(), StoreConfig::default());
//! let desk = store.available_workstations()[0].id.clone();
//! let person = store.unassigned_employees()[0].id.clone();
//! let assignment = store.assign(&desk, &person).expect("desk is free");
//! println!("Utilization: {}", store.utilization());
//! store.unassign(&assignment.id, |_| true);
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod seed;
pub mod store;
pub mod ui;
