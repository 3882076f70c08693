//! Database module: the employee table gateway.
//!
//! Layout:
//! - `models.rs`: the employee record and the form payloads
//! - `mysql.rs`: connection-per-request store issuing the SQL

pub mod models;
pub mod mysql;

pub use models::{Employee, LookupQuery};
pub use mysql::EmployeeStore;
