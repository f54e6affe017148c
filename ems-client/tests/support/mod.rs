//! In-process mock of the EMS backend REST API
//!
//! Serves the same endpoint surface as the real backend on an ephemeral
//! port, backed by in-memory maps. Behavior mirrors the backend contract:
//! server-assigned ids, full-replacement PUT, 404 with a message body for
//! missing ids, empty body on DELETE.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use shared::{Department, DepartmentPayload, Employee, EmployeePayload};
use tokio::sync::Mutex;

struct Store {
    employees: Mutex<HashMap<i64, Employee>>,
    departments: Mutex<HashMap<i64, Department>>,
    next_id: AtomicI64,
}

impl Store {
    fn new() -> Self {
        Self {
            employees: Mutex::new(HashMap::new()),
            departments: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    fn assign_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }
}

type NotFound = (StatusCode, String);

fn not_found(resource: &str, id: i64) -> NotFound {
    (StatusCode::NOT_FOUND, format!("{resource} {id} not found"))
}

async fn list_employees(State(store): State<Arc<Store>>) -> Json<Vec<Employee>> {
    let map = store.employees.lock().await;
    let mut rows: Vec<Employee> = map.values().cloned().collect();
    rows.sort_by_key(|e| e.id);
    Json(rows)
}

async fn get_employee(
    State(store): State<Arc<Store>>,
    Path(id): Path<i64>,
) -> Result<Json<Employee>, NotFound> {
    let map = store.employees.lock().await;
    map.get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found("Employee", id))
}

async fn create_employee(
    State(store): State<Arc<Store>>,
    Json(payload): Json<EmployeePayload>,
) -> Json<Employee> {
    let id = store.assign_id();
    let department_name = store
        .departments
        .lock()
        .await
        .get(&payload.department_id)
        .map(|d| d.department_name.clone());
    let employee = Employee {
        id,
        first_name: payload.first_name,
        last_name: payload.last_name,
        email: payload.email,
        department_id: payload.department_id,
        department_name,
    };
    store.employees.lock().await.insert(id, employee.clone());
    Json(employee)
}

async fn update_employee(
    State(store): State<Arc<Store>>,
    Path(id): Path<i64>,
    Json(payload): Json<EmployeePayload>,
) -> Result<Json<Employee>, NotFound> {
    let mut map = store.employees.lock().await;
    if !map.contains_key(&id) {
        return Err(not_found("Employee", id));
    }
    let department_name = store
        .departments
        .lock()
        .await
        .get(&payload.department_id)
        .map(|d| d.department_name.clone());
    let employee = Employee {
        id,
        first_name: payload.first_name,
        last_name: payload.last_name,
        email: payload.email,
        department_id: payload.department_id,
        department_name,
    };
    map.insert(id, employee.clone());
    Ok(Json(employee))
}

async fn delete_employee(
    State(store): State<Arc<Store>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, NotFound> {
    let mut map = store.employees.lock().await;
    map.remove(&id)
        .map(|_| StatusCode::OK)
        .ok_or_else(|| not_found("Employee", id))
}

async fn list_departments(State(store): State<Arc<Store>>) -> Json<Vec<Department>> {
    let map = store.departments.lock().await;
    let mut rows: Vec<Department> = map.values().cloned().collect();
    rows.sort_by_key(|d| d.id);
    Json(rows)
}

async fn get_department(
    State(store): State<Arc<Store>>,
    Path(id): Path<i64>,
) -> Result<Json<Department>, NotFound> {
    let map = store.departments.lock().await;
    map.get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found("Department", id))
}

async fn create_department(
    State(store): State<Arc<Store>>,
    Json(payload): Json<DepartmentPayload>,
) -> Json<Department> {
    let id = store.assign_id();
    let department = Department {
        id,
        department_name: payload.department_name,
        department_description: payload.department_description,
    };
    store.departments.lock().await.insert(id, department.clone());
    Json(department)
}

async fn update_department(
    State(store): State<Arc<Store>>,
    Path(id): Path<i64>,
    Json(payload): Json<DepartmentPayload>,
) -> Result<Json<Department>, NotFound> {
    let mut map = store.departments.lock().await;
    if !map.contains_key(&id) {
        return Err(not_found("Department", id));
    }
    let department = Department {
        id,
        department_name: payload.department_name,
        department_description: payload.department_description,
    };
    map.insert(id, department.clone());
    Ok(Json(department))
}

async fn delete_department(
    State(store): State<Arc<Store>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, NotFound> {
    let mut map = store.departments.lock().await;
    map.remove(&id)
        .map(|_| StatusCode::OK)
        .ok_or_else(|| not_found("Department", id))
}

fn router() -> Router {
    Router::new()
        .route("/api/employees", get(list_employees).post(create_employee))
        .route(
            "/api/employees/{id}",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
        .route(
            "/api/departments",
            get(list_departments).post(create_department),
        )
        .route(
            "/api/departments/{id}",
            get(get_department)
                .put(update_department)
                .delete(delete_department),
        )
        .with_state(Arc::new(Store::new()))
}

/// Serve the mock backend on an ephemeral port, returning its base address
pub async fn spawn() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock backend");
    let addr = listener.local_addr().expect("mock backend addr");
    tokio::spawn(async move {
        axum::serve(listener, router()).await.expect("mock backend");
    });
    format!("http://{addr}")
}
