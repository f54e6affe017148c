//! EMS Client - HTTP client for the EMS backend REST API
//!
//! Provides the typed resource services the admin console calls through:
//! an explicitly constructed [`ApiClient`] plus one service per resource,
//! each exposing the five CRUD operations.

pub mod client;
pub mod departments;
pub mod employees;
pub mod error;

pub use client::ApiClient;
pub use departments::DepartmentService;
pub use employees::EmployeeService;
pub use error::{ClientError, ClientResult};
