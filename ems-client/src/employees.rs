//! Employee resource service

use shared::{Employee, EmployeePayload};

use crate::client::ApiClient;
use crate::error::ClientResult;

const BASE: &str = "/api/employees";

/// Typed CRUD calls for the employee resource
#[derive(Debug, Clone)]
pub struct EmployeeService {
    client: ApiClient,
}

impl EmployeeService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch the full collection, in server order
    pub async fn list(&self) -> ClientResult<Vec<Employee>> {
        self.client.get(BASE).await
    }

    /// Fetch a single employee by id
    pub async fn get(&self, id: i64) -> ClientResult<Employee> {
        self.client.get(&format!("{BASE}/{id}")).await
    }

    /// Create a new employee; the response carries the server-assigned id
    pub async fn create(&self, payload: &EmployeePayload) -> ClientResult<Employee> {
        self.client.post(BASE, payload).await
    }

    /// Replace the employee at `id` with `payload`
    pub async fn update(&self, id: i64, payload: &EmployeePayload) -> ClientResult<Employee> {
        self.client.put(&format!("{BASE}/{id}"), payload).await
    }

    /// Delete the employee at `id`
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.client.delete(&format!("{BASE}/{id}")).await
    }
}
