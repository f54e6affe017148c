//! Command executor
//!
//! Runs each [`Command`] the state machine requested as its own tokio task
//! and posts the outcome back over the message channel. Responses carry the
//! generation of the request that produced them; the state machine discards
//! the ones that arrive after their screen was torn down.

use ems_client::{ApiClient, DepartmentService, EmployeeService};
use tokio::sync::mpsc::UnboundedSender;

use crate::app::{Command, Msg};

/// The typed resource services, cloned into every spawned task
#[derive(Clone)]
pub struct Services {
    pub employees: EmployeeService,
    pub departments: DepartmentService,
}

impl Services {
    pub fn new(client: ApiClient) -> Self {
        Self {
            employees: EmployeeService::new(client.clone()),
            departments: DepartmentService::new(client),
        }
    }
}

/// Spawn the request for `command`; the outcome comes back as a [`Msg`].
///
/// A failed `send` only happens during shutdown, after the receiver half of
/// the channel is gone, so it is ignored.
pub fn execute(services: &Services, tx: &UnboundedSender<Msg>, command: Command) {
    let services = services.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let msg = match command {
            Command::LoadEmployees { generation } => Msg::EmployeesLoaded {
                generation,
                result: services.employees.list().await,
            },
            Command::LoadEmployee { generation, id } => Msg::EmployeeLoaded {
                generation,
                result: services.employees.get(id).await,
            },
            Command::CreateEmployee { generation, payload } => Msg::EmployeeSaved {
                generation,
                result: services.employees.create(&payload).await,
            },
            Command::UpdateEmployee { generation, id, payload } => Msg::EmployeeSaved {
                generation,
                result: services.employees.update(id, &payload).await,
            },
            Command::DeleteEmployee { generation, id } => Msg::EmployeeDeleted {
                generation,
                id,
                result: services.employees.delete(id).await,
            },
            Command::LoadDepartments { generation } => Msg::DepartmentsLoaded {
                generation,
                result: services.departments.list().await,
            },
            Command::LoadDepartment { generation, id } => Msg::DepartmentLoaded {
                generation,
                result: services.departments.get(id).await,
            },
            Command::CreateDepartment { generation, payload } => Msg::DepartmentSaved {
                generation,
                result: services.departments.create(&payload).await,
            },
            Command::UpdateDepartment { generation, id, payload } => Msg::DepartmentSaved {
                generation,
                result: services.departments.update(id, &payload).await,
            },
            Command::DeleteDepartment { generation, id } => Msg::DepartmentDeleted {
                generation,
                id,
                result: services.departments.delete(id).await,
            },
        };
        let _ = tx.send(msg);
    });
}
