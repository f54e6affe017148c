//! Screen state
//!
//! Each screen owns the snapshot it fetched; navigating away drops the
//! screen and its data. Rendering lives in `ui`; the types here only hold
//! state and apply outcomes, which keeps them drivable from unit tests.

pub mod department_form;
pub mod employee_form;

use ems_client::ClientResult;
use ratatui::widgets::TableState;
use shared::{Department, Employee};

pub use department_form::{DepartmentField, DepartmentFormScreen};
pub use employee_form::{EmployeeField, EmployeeFormScreen};

/// Load state of a collection screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
}

/// Which record a form addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    New,
    Editing(i64),
}

/// Row type rendered by a list screen
pub trait Record {
    fn id(&self) -> i64;
}

impl Record for Employee {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Record for Department {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Collection screen, generalized over the two resources
pub struct ListScreen<T> {
    pub state: LoadState,
    pub rows: Vec<T>,
    pub table: TableState,
}

impl<T: Record> ListScreen<T> {
    pub fn new() -> Self {
        Self {
            state: LoadState::Loading,
            rows: Vec::new(),
            table: TableState::default(),
        }
    }

    /// Apply the `list()` outcome; a failure is logged and lands in an
    /// empty Loaded state, the screen stays interactive
    pub fn loaded(&mut self, result: ClientResult<Vec<T>>, resource: &str) {
        self.state = LoadState::Loaded;
        match result {
            Ok(rows) => {
                self.rows = rows;
                if self.rows.is_empty() {
                    self.table.select(None);
                } else {
                    self.table.select(Some(0));
                }
            }
            Err(err) => {
                tracing::error!(error = %err, resource, "failed to load list");
                self.rows.clear();
                self.table.select(None);
            }
        }
    }

    pub fn selected(&self) -> Option<&T> {
        self.table.selected().and_then(|i| self.rows.get(i))
    }

    pub fn selected_id(&self) -> Option<i64> {
        self.selected().map(Record::id)
    }

    pub fn select_next(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let next = match self.table.selected() {
            Some(i) if i + 1 < self.rows.len() => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.table.select(Some(next));
    }

    pub fn select_prev(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let prev = match self.table.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.table.select(Some(prev));
    }

    /// Remove a row after a confirmed delete succeeded; no re-fetch
    pub fn remove(&mut self, id: i64) {
        self.rows.retain(|row| row.id() != id);
        match self.table.selected() {
            _ if self.rows.is_empty() => self.table.select(None),
            Some(i) if i >= self.rows.len() => self.table.select(Some(self.rows.len() - 1)),
            _ => {}
        }
    }
}
