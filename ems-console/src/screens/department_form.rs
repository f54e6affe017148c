//! Department form screen (create-or-update)

use shared::{Department, DepartmentPayload};
use tui_input::Input;

use super::FormMode;

/// Focusable fields, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepartmentField {
    Name,
    Description,
}

impl DepartmentField {
    pub fn next(self) -> Self {
        match self {
            DepartmentField::Name => DepartmentField::Description,
            DepartmentField::Description => DepartmentField::Name,
        }
    }
}

pub struct DepartmentFormScreen {
    pub mode: FormMode,
    pub focus: DepartmentField,
    pub name: Input,
    pub description: Input,
}

impl DepartmentFormScreen {
    pub fn new(mode: FormMode) -> Self {
        Self {
            mode,
            focus: DepartmentField::Name,
            name: Input::default(),
            description: Input::default(),
        }
    }

    /// Populate both fields from the fetched record
    pub fn populate(&mut self, department: &Department) {
        self.name = Input::from(department.department_name.clone());
        self.description = Input::from(department.department_description.clone());
    }

    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_field(&mut self) {
        // two fields: previous and next coincide
        self.focus = self.focus.next();
    }

    pub fn active_input_mut(&mut self) -> &mut Input {
        match self.focus {
            DepartmentField::Name => &mut self.name,
            DepartmentField::Description => &mut self.description,
        }
    }

    /// Required-field check; `Err` carries the blocking alert message
    pub fn validate(&self) -> Result<DepartmentPayload, String> {
        if self.name.value().trim().is_empty() {
            return Err("Department name is required".into());
        }
        if self.description.value().trim().is_empty() {
            return Err("Department description is required".into());
        }
        Ok(DepartmentPayload {
            department_name: self.name.value().to_string(),
            department_description: self.description.value().to_string(),
        })
    }
}
