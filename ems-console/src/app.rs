//! Application state and update logic
//!
//! Terminal input and network responses funnel through one [`Msg`] channel.
//! [`App::apply`] consumes them and returns the [`Command`]s the executor
//! should run; it performs no I/O itself, so the whole interaction surface
//! is drivable from unit tests.
//!
//! Every dispatched request carries the generation current at dispatch
//! time. Navigation bumps the generation, so a response that resolves after
//! its screen was torn down no longer matches and is discarded instead of
//! being applied to destroyed state.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ems_client::ClientError;
use shared::{Department, DepartmentPayload, Employee, EmployeePayload};
use tui_input::backend::crossterm::EventHandler;

use crate::route::Route;
use crate::screens::{
    DepartmentFormScreen, EmployeeField, EmployeeFormScreen, FormMode, ListScreen,
};

/// Messages consumed by [`App::apply`]
pub enum Msg {
    Input(Event),
    EmployeesLoaded {
        generation: u64,
        result: Result<Vec<Employee>, ClientError>,
    },
    EmployeeLoaded {
        generation: u64,
        result: Result<Employee, ClientError>,
    },
    EmployeeSaved {
        generation: u64,
        result: Result<Employee, ClientError>,
    },
    EmployeeDeleted {
        generation: u64,
        id: i64,
        result: Result<(), ClientError>,
    },
    DepartmentsLoaded {
        generation: u64,
        result: Result<Vec<Department>, ClientError>,
    },
    DepartmentLoaded {
        generation: u64,
        result: Result<Department, ClientError>,
    },
    DepartmentSaved {
        generation: u64,
        result: Result<Department, ClientError>,
    },
    DepartmentDeleted {
        generation: u64,
        id: i64,
        result: Result<(), ClientError>,
    },
}

/// Side effects requested by the state machine, run by the executor
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    LoadEmployees { generation: u64 },
    LoadEmployee { generation: u64, id: i64 },
    CreateEmployee { generation: u64, payload: EmployeePayload },
    UpdateEmployee { generation: u64, id: i64, payload: EmployeePayload },
    DeleteEmployee { generation: u64, id: i64 },
    LoadDepartments { generation: u64 },
    LoadDepartment { generation: u64, id: i64 },
    CreateDepartment { generation: u64, payload: DepartmentPayload },
    UpdateDepartment { generation: u64, id: i64, payload: DepartmentPayload },
    DeleteDepartment { generation: u64, id: i64 },
}

/// Current view
pub enum Screen {
    EmployeeList(ListScreen<Employee>),
    EmployeeForm(EmployeeFormScreen),
    DepartmentList(ListScreen<Department>),
    DepartmentForm(DepartmentFormScreen),
}

/// Modal state; a dialog swallows all input until dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    /// Delete confirmation for the row with this id on the current list
    ConfirmDelete { id: i64 },
    /// Blocking validation alert
    Alert(String),
}

pub struct App {
    pub route: Route,
    pub screen: Screen,
    pub dialog: Option<Dialog>,
    pub should_quit: bool,
    generation: u64,
}

impl App {
    /// Start on the employee list, with its initial fetch queued
    pub fn new() -> (Self, Vec<Command>) {
        let mut app = Self {
            route: Route::EmployeeList,
            screen: Screen::EmployeeList(ListScreen::new()),
            dialog: None,
            should_quit: false,
            generation: 0,
        };
        let commands = app.navigate(Route::EmployeeList);
        (app, commands)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Switch screens; bumps the generation so in-flight responses for the
    /// previous screen are discarded
    pub fn navigate(&mut self, route: Route) -> Vec<Command> {
        self.generation += 1;
        self.dialog = None;
        self.route = route;
        let generation = self.generation;
        tracing::debug!(path = %route, generation, "navigating");

        match route {
            Route::EmployeeList => {
                self.screen = Screen::EmployeeList(ListScreen::new());
                vec![Command::LoadEmployees { generation }]
            }
            Route::AddEmployee => {
                let form = EmployeeFormScreen::new(FormMode::New);
                let mut commands = Vec::new();
                if form.needs_departments() {
                    commands.push(Command::LoadDepartments { generation });
                }
                self.screen = Screen::EmployeeForm(form);
                commands
            }
            Route::UpdateEmployee(id) => {
                let form = EmployeeFormScreen::new(FormMode::Editing(id));
                let mut commands = vec![Command::LoadEmployee { generation, id }];
                if form.needs_departments() {
                    commands.push(Command::LoadDepartments { generation });
                }
                self.screen = Screen::EmployeeForm(form);
                commands
            }
            Route::DepartmentList => {
                self.screen = Screen::DepartmentList(ListScreen::new());
                vec![Command::LoadDepartments { generation }]
            }
            Route::AddDepartment => {
                self.screen = Screen::DepartmentForm(DepartmentFormScreen::new(FormMode::New));
                Vec::new()
            }
            Route::UpdateDepartment(id) => {
                self.screen =
                    Screen::DepartmentForm(DepartmentFormScreen::new(FormMode::Editing(id)));
                vec![Command::LoadDepartment { generation, id }]
            }
        }
    }

    pub fn apply(&mut self, msg: Msg) -> Vec<Command> {
        match msg {
            Msg::Input(event) => return self.handle_input(event),
            Msg::EmployeesLoaded { generation, result } => {
                if self.is_stale(generation) {
                    return Vec::new();
                }
                if let Screen::EmployeeList(list) = &mut self.screen {
                    list.loaded(result, "employees");
                }
            }
            Msg::EmployeeLoaded { generation, result } => {
                if self.is_stale(generation) {
                    return Vec::new();
                }
                if let Screen::EmployeeForm(form) = &mut self.screen {
                    match result {
                        Ok(employee) => form.populate(&employee),
                        Err(err) => tracing::error!(error = %err, "failed to load employee"),
                    }
                }
            }
            Msg::EmployeeSaved { generation, result } => {
                if self.is_stale(generation) {
                    return Vec::new();
                }
                match result {
                    Ok(employee) => {
                        tracing::info!(id = employee.id, "employee saved");
                        return self.navigate(Route::EmployeeList);
                    }
                    // Form stays populated for retry
                    Err(err) => tracing::error!(error = %err, "failed to save employee"),
                }
            }
            Msg::EmployeeDeleted { generation, id, result } => {
                if self.is_stale(generation) {
                    return Vec::new();
                }
                if let Screen::EmployeeList(list) = &mut self.screen {
                    match result {
                        Ok(()) => list.remove(id),
                        Err(err) => tracing::error!(error = %err, id, "failed to delete employee"),
                    }
                }
            }
            Msg::DepartmentsLoaded { generation, result } => {
                if self.is_stale(generation) {
                    return Vec::new();
                }
                match &mut self.screen {
                    Screen::DepartmentList(list) => list.loaded(result, "departments"),
                    Screen::EmployeeForm(form) => form.departments_loaded(result),
                    _ => {}
                }
            }
            Msg::DepartmentLoaded { generation, result } => {
                if self.is_stale(generation) {
                    return Vec::new();
                }
                if let Screen::DepartmentForm(form) = &mut self.screen {
                    match result {
                        Ok(department) => form.populate(&department),
                        Err(err) => tracing::error!(error = %err, "failed to load department"),
                    }
                }
            }
            Msg::DepartmentSaved { generation, result } => {
                if self.is_stale(generation) {
                    return Vec::new();
                }
                match result {
                    Ok(department) => {
                        tracing::info!(id = department.id, "department saved");
                        return self.navigate(Route::DepartmentList);
                    }
                    Err(err) => tracing::error!(error = %err, "failed to save department"),
                }
            }
            Msg::DepartmentDeleted { generation, id, result } => {
                if self.is_stale(generation) {
                    return Vec::new();
                }
                if let Screen::DepartmentList(list) = &mut self.screen {
                    match result {
                        Ok(()) => list.remove(id),
                        Err(err) => tracing::error!(error = %err, id, "failed to delete department"),
                    }
                }
            }
        }
        Vec::new()
    }

    fn is_stale(&self, generation: u64) -> bool {
        if generation != self.generation {
            tracing::debug!(generation, current = self.generation, "discarding stale response");
            return true;
        }
        false
    }

    fn handle_input(&mut self, event: Event) -> Vec<Command> {
        let Event::Key(key) = event else {
            return Vec::new();
        };
        if key.kind != KeyEventKind::Press {
            return Vec::new();
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return Vec::new();
        }

        if self.dialog.is_some() {
            return self.handle_dialog_key(key);
        }

        if matches!(
            self.screen,
            Screen::EmployeeList(_) | Screen::DepartmentList(_)
        ) {
            self.handle_list_key(key)
        } else if matches!(self.screen, Screen::EmployeeForm(_)) {
            self.handle_employee_form_key(key)
        } else {
            self.handle_department_form_key(key)
        }
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) -> Vec<Command> {
        match self.dialog.clone() {
            Some(Dialog::ConfirmDelete { id }) => match key.code {
                KeyCode::Char('y') | KeyCode::Enter => {
                    self.dialog = None;
                    let generation = self.generation;
                    if matches!(self.screen, Screen::EmployeeList(_)) {
                        vec![Command::DeleteEmployee { generation, id }]
                    } else {
                        vec![Command::DeleteDepartment { generation, id }]
                    }
                }
                KeyCode::Char('n') | KeyCode::Esc => {
                    self.dialog = None;
                    Vec::new()
                }
                _ => Vec::new(),
            },
            Some(Dialog::Alert(_)) => match key.code {
                KeyCode::Enter | KeyCode::Esc => {
                    self.dialog = None;
                    Vec::new()
                }
                _ => Vec::new(),
            },
            None => Vec::new(),
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> Vec<Command> {
        let on_employees = matches!(self.screen, Screen::EmployeeList(_));
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                Vec::new()
            }
            KeyCode::Tab => {
                let next = if on_employees {
                    Route::DepartmentList
                } else {
                    Route::EmployeeList
                };
                self.navigate(next)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                match &mut self.screen {
                    Screen::EmployeeList(list) => list.select_next(),
                    Screen::DepartmentList(list) => list.select_next(),
                    _ => {}
                }
                Vec::new()
            }
            KeyCode::Up | KeyCode::Char('k') => {
                match &mut self.screen {
                    Screen::EmployeeList(list) => list.select_prev(),
                    Screen::DepartmentList(list) => list.select_prev(),
                    _ => {}
                }
                Vec::new()
            }
            KeyCode::Char('a') => {
                let route = if on_employees {
                    Route::AddEmployee
                } else {
                    Route::AddDepartment
                };
                self.navigate(route)
            }
            KeyCode::Char('u') | KeyCode::Enter => match self.selected_row_id() {
                Some(id) if on_employees => self.navigate(Route::UpdateEmployee(id)),
                Some(id) => self.navigate(Route::UpdateDepartment(id)),
                None => Vec::new(),
            },
            KeyCode::Char('d') => {
                if let Some(id) = self.selected_row_id() {
                    self.dialog = Some(Dialog::ConfirmDelete { id });
                }
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn selected_row_id(&self) -> Option<i64> {
        match &self.screen {
            Screen::EmployeeList(list) => list.selected_id(),
            Screen::DepartmentList(list) => list.selected_id(),
            _ => None,
        }
    }

    fn handle_employee_form_key(&mut self, key: KeyEvent) -> Vec<Command> {
        match key.code {
            KeyCode::Esc => return self.navigate(Route::EmployeeList),
            KeyCode::Enter => return self.submit_employee_form(),
            _ => {}
        }

        let Screen::EmployeeForm(form) = &mut self.screen else {
            return Vec::new();
        };
        match key.code {
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Left if form.focus == EmployeeField::Department => {
                form.pick_prev_department()
            }
            KeyCode::Right if form.focus == EmployeeField::Department => {
                form.pick_next_department()
            }
            _ => {
                if let Some(input) = form.active_input_mut() {
                    input.handle_event(&Event::Key(key));
                }
            }
        }
        Vec::new()
    }

    fn submit_employee_form(&mut self) -> Vec<Command> {
        let (validated, mode) = match &self.screen {
            Screen::EmployeeForm(form) => (form.validate(), form.mode),
            _ => return Vec::new(),
        };
        match validated {
            Err(message) => {
                self.dialog = Some(Dialog::Alert(message));
                Vec::new()
            }
            Ok(payload) => {
                let generation = self.generation;
                match mode {
                    FormMode::New => vec![Command::CreateEmployee { generation, payload }],
                    FormMode::Editing(id) => {
                        vec![Command::UpdateEmployee { generation, id, payload }]
                    }
                }
            }
        }
    }

    fn handle_department_form_key(&mut self, key: KeyEvent) -> Vec<Command> {
        match key.code {
            KeyCode::Esc => return self.navigate(Route::DepartmentList),
            KeyCode::Enter => return self.submit_department_form(),
            _ => {}
        }

        let Screen::DepartmentForm(form) = &mut self.screen else {
            return Vec::new();
        };
        match key.code {
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            _ => {
                form.active_input_mut().handle_event(&Event::Key(key));
            }
        }
        Vec::new()
    }

    fn submit_department_form(&mut self) -> Vec<Command> {
        let (validated, mode) = match &self.screen {
            Screen::DepartmentForm(form) => (form.validate(), form.mode),
            _ => return Vec::new(),
        };
        match validated {
            Err(message) => {
                self.dialog = Some(Dialog::Alert(message));
                Vec::new()
            }
            Ok(payload) => {
                let generation = self.generation;
                match mode {
                    FormMode::New => vec![Command::CreateDepartment { generation, payload }],
                    FormMode::Editing(id) => {
                        vec![Command::UpdateDepartment { generation, id, payload }]
                    }
                }
            }
        }
    }
}
