//! Department resource service

use shared::{Department, DepartmentPayload};

use crate::client::ApiClient;
use crate::error::ClientResult;

const BASE: &str = "/api/departments";

/// Typed CRUD calls for the department resource
#[derive(Debug, Clone)]
pub struct DepartmentService {
    client: ApiClient,
}

impl DepartmentService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch the full collection, in server order
    pub async fn list(&self) -> ClientResult<Vec<Department>> {
        self.client.get(BASE).await
    }

    /// Fetch a single department by id
    pub async fn get(&self, id: i64) -> ClientResult<Department> {
        self.client.get(&format!("{BASE}/{id}")).await
    }

    /// Create a new department; the response carries the server-assigned id
    pub async fn create(&self, payload: &DepartmentPayload) -> ClientResult<Department> {
        self.client.post(BASE, payload).await
    }

    /// Replace the department at `id` with `payload`
    pub async fn update(&self, id: i64, payload: &DepartmentPayload) -> ClientResult<Department> {
        self.client.put(&format!("{BASE}/{id}"), payload).await
    }

    /// Delete the department at `id`
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.client.delete(&format!("{BASE}/{id}")).await
    }
}
