//! Shared types for the EMS admin client
//!
//! Record types exchanged with the backend REST API. Wire names follow the
//! backend's camelCase DTOs; all IDs are `i64` and server-assigned.

pub mod models;

// Re-exports
pub use models::{Department, DepartmentPayload, Employee, EmployeePayload};
