//! Department model

use serde::{Deserialize, Serialize};

/// Department record as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: i64,
    pub department_name: String,
    pub department_description: String,
}

/// Create/update department payload (no id)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentPayload {
    pub department_name: String,
    pub department_description: String,
}

impl From<&Department> for DepartmentPayload {
    fn from(department: &Department) -> Self {
        Self {
            department_name: department.department_name.clone(),
            department_description: department.department_description.clone(),
        }
    }
}
