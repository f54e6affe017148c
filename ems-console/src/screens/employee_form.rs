//! Employee form screen (create-or-update)
//!
//! `Editing` pre-populates every field from a fetched record. The form also
//! needs the department list for its picker; it is fetched once per form
//! entry, guarded by `needs_departments`. Submission is blocked with an
//! alert until a department is picked.

use ems_client::ClientResult;
use shared::{Department, Employee, EmployeePayload};
use tui_input::Input;

use super::FormMode;

/// Focusable fields, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeField {
    FirstName,
    LastName,
    Email,
    Department,
}

impl EmployeeField {
    pub fn next(self) -> Self {
        match self {
            EmployeeField::FirstName => EmployeeField::LastName,
            EmployeeField::LastName => EmployeeField::Email,
            EmployeeField::Email => EmployeeField::Department,
            EmployeeField::Department => EmployeeField::FirstName,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            EmployeeField::FirstName => EmployeeField::Department,
            EmployeeField::LastName => EmployeeField::FirstName,
            EmployeeField::Email => EmployeeField::LastName,
            EmployeeField::Department => EmployeeField::Email,
        }
    }
}

pub struct EmployeeFormScreen {
    pub mode: FormMode,
    pub focus: EmployeeField,
    pub first_name: Input,
    pub last_name: Input,
    pub email: Input,
    /// Picker collection; `None` until the fetch resolves
    pub departments: Option<Vec<Department>>,
    /// Index into `departments`
    pub selected_department: Option<usize>,
    /// Department id of the fetched record, applied once the picker data arrives
    pending_department_id: Option<i64>,
}

impl EmployeeFormScreen {
    pub fn new(mode: FormMode) -> Self {
        Self {
            mode,
            focus: EmployeeField::FirstName,
            first_name: Input::default(),
            last_name: Input::default(),
            email: Input::default(),
            departments: None,
            selected_department: None,
            pending_department_id: None,
        }
    }

    /// True until the department list request has been issued
    pub fn needs_departments(&self) -> bool {
        self.departments.is_none()
    }

    /// Populate every field from the fetched record
    pub fn populate(&mut self, employee: &Employee) {
        self.first_name = Input::from(employee.first_name.clone());
        self.last_name = Input::from(employee.last_name.clone());
        self.email = Input::from(employee.email.clone());
        self.pending_department_id = Some(employee.department_id);
        self.apply_pending_selection();
    }

    /// Apply the department `list()` outcome for the picker
    pub fn departments_loaded(&mut self, result: ClientResult<Vec<Department>>) {
        match result {
            Ok(rows) => {
                self.departments = Some(rows);
                self.apply_pending_selection();
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to load departments for picker");
                self.departments = Some(Vec::new());
            }
        }
    }

    fn apply_pending_selection(&mut self) {
        if let (Some(id), Some(rows)) = (self.pending_department_id, self.departments.as_ref()) {
            if let Some(index) = rows.iter().position(|d| d.id == id) {
                self.selected_department = Some(index);
                self.pending_department_id = None;
            }
        }
    }

    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_field(&mut self) {
        self.focus = self.focus.prev();
    }

    /// The input owning the cursor, when a text field is focused
    pub fn active_input_mut(&mut self) -> Option<&mut Input> {
        match self.focus {
            EmployeeField::FirstName => Some(&mut self.first_name),
            EmployeeField::LastName => Some(&mut self.last_name),
            EmployeeField::Email => Some(&mut self.email),
            EmployeeField::Department => None,
        }
    }

    pub fn pick_next_department(&mut self) {
        let Some(rows) = self.departments.as_ref() else {
            return;
        };
        if rows.is_empty() {
            return;
        }
        self.selected_department = Some(match self.selected_department {
            Some(index) => (index + 1) % rows.len(),
            None => 0,
        });
    }

    pub fn pick_prev_department(&mut self) {
        let Some(rows) = self.departments.as_ref() else {
            return;
        };
        if rows.is_empty() {
            return;
        }
        self.selected_department = Some(match self.selected_department {
            Some(index) => (index + rows.len() - 1) % rows.len(),
            None => 0,
        });
    }

    pub fn selected_department(&self) -> Option<&Department> {
        self.selected_department
            .and_then(|index| self.departments.as_ref()?.get(index))
    }

    /// Required-field check; `Err` carries the blocking alert message
    pub fn validate(&self) -> Result<EmployeePayload, String> {
        if self.first_name.value().trim().is_empty() {
            return Err("First name is required".into());
        }
        if self.last_name.value().trim().is_empty() {
            return Err("Last name is required".into());
        }
        if self.email.value().trim().is_empty() {
            return Err("Email is required".into());
        }
        let department = self
            .selected_department()
            .ok_or_else(|| "Please select a department".to_string())?;

        Ok(EmployeePayload {
            first_name: self.first_name.value().to_string(),
            last_name: self.last_name.value().to_string(),
            email: self.email.value().to_string(),
            department_id: department.id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn department(id: i64, name: &str) -> Department {
        Department {
            id,
            department_name: name.into(),
            department_description: format!("{name} department"),
        }
    }

    fn employee_42() -> Employee {
        Employee {
            id: 42,
            first_name: "Ann".into(),
            last_name: "Lee".into(),
            email: "a@x.com".into(),
            department_id: 3,
            department_name: Some("Engineering".into()),
        }
    }

    #[test]
    fn test_populate_fills_every_field() {
        let mut form = EmployeeFormScreen::new(FormMode::Editing(42));
        form.populate(&employee_42());

        assert_eq!(form.first_name.value(), "Ann");
        assert_eq!(form.last_name.value(), "Lee");
        assert_eq!(form.email.value(), "a@x.com");
    }

    #[test]
    fn test_department_preselected_regardless_of_arrival_order() {
        // record first, picker data second
        let mut form = EmployeeFormScreen::new(FormMode::Editing(42));
        form.populate(&employee_42());
        form.departments_loaded(Ok(vec![department(1, "HR"), department(3, "Engineering")]));
        assert_eq!(form.selected_department().map(|d| d.id), Some(3));

        // picker data first, record second
        let mut form = EmployeeFormScreen::new(FormMode::Editing(42));
        form.departments_loaded(Ok(vec![department(1, "HR"), department(3, "Engineering")]));
        form.populate(&employee_42());
        assert_eq!(form.selected_department().map(|d| d.id), Some(3));
    }

    #[test]
    fn test_validate_blocks_without_a_department() {
        let mut form = EmployeeFormScreen::new(FormMode::New);
        form.first_name = Input::from("Ann".to_string());
        form.last_name = Input::from("Lee".to_string());
        form.email = Input::from("a@x.com".to_string());
        form.departments_loaded(Ok(vec![department(3, "Engineering")]));

        assert_eq!(form.validate(), Err("Please select a department".into()));

        form.pick_next_department();
        let payload = form.validate().unwrap();
        assert_eq!(payload.department_id, 3);
    }

    #[test]
    fn test_validate_requires_every_text_field() {
        let mut form = EmployeeFormScreen::new(FormMode::New);
        form.departments_loaded(Ok(vec![department(3, "Engineering")]));
        form.pick_next_department();

        assert_eq!(form.validate(), Err("First name is required".into()));
        form.first_name = Input::from("Ann".to_string());
        assert_eq!(form.validate(), Err("Last name is required".into()));
        form.last_name = Input::from("Lee".to_string());
        assert_eq!(form.validate(), Err("Email is required".into()));
    }

    #[test]
    fn test_picker_wraps_and_survives_failed_load() {
        let mut form = EmployeeFormScreen::new(FormMode::New);
        // not yet loaded: picking is a no-op
        form.pick_next_department();
        assert!(form.selected_department().is_none());

        form.departments_loaded(Ok(vec![department(1, "A"), department(2, "B")]));
        form.pick_next_department();
        form.pick_next_department();
        assert_eq!(form.selected_department().map(|d| d.id), Some(2));
        form.pick_next_department();
        assert_eq!(form.selected_department().map(|d| d.id), Some(1));
        form.pick_prev_department();
        assert_eq!(form.selected_department().map(|d| d.id), Some(2));
    }

    #[test]
    fn test_fetch_guard_flips_once_loaded() {
        let mut form = EmployeeFormScreen::new(FormMode::New);
        assert!(form.needs_departments());
        form.departments_loaded(Err(ems_client::ClientError::Status {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            body: String::new(),
        }));
        // a failed load still counts as loaded; no refetch loop
        assert!(!form.needs_departments());
    }
}
