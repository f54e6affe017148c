//! Rendering
//!
//! Pure projection of [`App`] state onto the frame. Layout is a fixed
//! header with the resource tabs, the active screen in the middle, and a
//! one-line key hint footer. Dialogs draw centered over whatever screen is
//! underneath them.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Tabs};
use shared::{Department, Employee};
use tui_input::Input;

use crate::app::{App, Dialog, Screen};
use crate::route::Route;
use crate::screens::{
    DepartmentField, DepartmentFormScreen, EmployeeField, EmployeeFormScreen, FormMode, ListScreen,
    LoadState,
};

const HIGHLIGHT: Style = Style::new()
    .bg(Color::Cyan)
    .fg(Color::Black)
    .add_modifier(Modifier::BOLD);

pub fn render(frame: &mut Frame, app: &mut App) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, header, app.route);

    match &mut app.screen {
        Screen::EmployeeList(list) => render_employee_list(frame, body, list),
        Screen::DepartmentList(list) => render_department_list(frame, body, list),
        Screen::EmployeeForm(form) => render_employee_form(frame, body, form),
        Screen::DepartmentForm(form) => render_department_form(frame, body, form),
    }

    render_footer(frame, footer, app);

    if let Some(dialog) = &app.dialog {
        render_dialog(frame, dialog);
    }
}

fn render_header(frame: &mut Frame, area: Rect, route: Route) {
    let selected = match route {
        Route::EmployeeList | Route::AddEmployee | Route::UpdateEmployee(_) => 0,
        Route::DepartmentList | Route::AddDepartment | Route::UpdateDepartment(_) => 1,
    };
    let tabs = Tabs::new(vec!["Employees", "Departments"])
        .select(selected)
        .highlight_style(Style::new().fg(Color::Cyan).bold())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Employee Management System"),
        );
    frame.render_widget(tabs, area);
}

fn render_employee_list(frame: &mut Frame, area: Rect, list: &mut ListScreen<Employee>) {
    if list.state == LoadState::Loading {
        return render_loading(frame, area);
    }

    let rows = list.rows.iter().map(|e| {
        Row::new(vec![
            Cell::from(e.id.to_string()),
            Cell::from(e.first_name.clone()),
            Cell::from(e.last_name.clone()),
            Cell::from(e.email.clone()),
            Cell::from(e.department_name.clone().unwrap_or_default()),
        ])
    });
    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(35),
            Constraint::Percentage(25),
        ],
    )
    .header(header_row(&["ID", "First Name", "Last Name", "Email", "Department"]))
    .row_highlight_style(HIGHLIGHT)
    .block(Block::default().borders(Borders::ALL).title("Employees"));

    frame.render_stateful_widget(table, area, &mut list.table);
}

fn render_department_list(frame: &mut Frame, area: Rect, list: &mut ListScreen<Department>) {
    if list.state == LoadState::Loading {
        return render_loading(frame, area);
    }

    let rows = list.rows.iter().map(|d| {
        Row::new(vec![
            Cell::from(d.id.to_string()),
            Cell::from(d.department_name.clone()),
            Cell::from(d.department_description.clone()),
        ])
    });
    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Percentage(35),
            Constraint::Percentage(65),
        ],
    )
    .header(header_row(&["ID", "Name", "Description"]))
    .row_highlight_style(HIGHLIGHT)
    .block(Block::default().borders(Borders::ALL).title("Departments"));

    frame.render_stateful_widget(table, area, &mut list.table);
}

fn header_row(titles: &[&'static str]) -> Row<'static> {
    Row::new(titles.iter().map(|t| Cell::from(*t)).collect::<Vec<_>>())
        .style(Style::new().bold().fg(Color::Yellow))
}

fn render_loading(frame: &mut Frame, area: Rect) {
    let loading = Paragraph::new("Loading...")
        .centered()
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(loading, area);
}

fn render_employee_form(frame: &mut Frame, area: Rect, form: &EmployeeFormScreen) {
    let title = match form.mode {
        FormMode::New => "Add Employee",
        FormMode::Editing(_) => "Update Employee",
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [first, last, email, department] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
    ])
    .areas(inner);

    render_input(frame, first, "First Name", &form.first_name, form.focus == EmployeeField::FirstName);
    render_input(frame, last, "Last Name", &form.last_name, form.focus == EmployeeField::LastName);
    render_input(frame, email, "Email", &form.email, form.focus == EmployeeField::Email);
    render_department_picker(frame, department, form);
}

fn render_department_picker(frame: &mut Frame, area: Rect, form: &EmployeeFormScreen) {
    let focused = form.focus == EmployeeField::Department;
    let text = match (&form.departments, form.selected_department()) {
        (None, _) => Line::from("Loading departments...".dark_gray()),
        (Some(_), Some(department)) => {
            Line::from(format!("< {} >", department.department_name))
        }
        (Some(rows), None) if rows.is_empty() => Line::from("No departments available".dark_gray()),
        (Some(_), None) => Line::from("< Select Department >".dark_gray()),
    };
    let picker = Paragraph::new(text).block(field_block("Department", focused));
    frame.render_widget(picker, area);
}

fn render_department_form(frame: &mut Frame, area: Rect, form: &DepartmentFormScreen) {
    let title = match form.mode {
        FormMode::New => "Add Department",
        FormMode::Editing(_) => "Update Department",
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [name, description] =
        Layout::vertical([Constraint::Length(3), Constraint::Length(3)]).areas(inner);

    render_input(frame, name, "Department Name", &form.name, form.focus == DepartmentField::Name);
    render_input(
        frame,
        description,
        "Department Description",
        &form.description,
        form.focus == DepartmentField::Description,
    );
}

fn render_input(frame: &mut Frame, area: Rect, label: &str, input: &Input, focused: bool) {
    let width = area.width.saturating_sub(2).max(1);
    let scroll = input.visual_scroll(width as usize);
    let paragraph = Paragraph::new(input.value())
        .scroll((0, scroll as u16))
        .block(field_block(label, focused));
    frame.render_widget(paragraph, area);

    if focused {
        let x = (input.visual_cursor().saturating_sub(scroll)) as u16;
        frame.set_cursor_position(Position::new(area.x + 1 + x, area.y + 1));
    }
}

fn field_block(label: &str, focused: bool) -> Block<'_> {
    let style = if focused {
        Style::new().fg(Color::Cyan)
    } else {
        Style::new()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(label)
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let hints = if app.dialog.is_some() {
        match app.dialog {
            Some(Dialog::ConfirmDelete { .. }) => "y: confirm | n/Esc: cancel",
            _ => "Enter/Esc: dismiss",
        }
    } else {
        match app.screen {
            Screen::EmployeeList(_) | Screen::DepartmentList(_) => {
                "a: add | u/Enter: update | d: delete | Tab: switch | j/k: move | q: quit"
            }
            Screen::EmployeeForm(_) => {
                "Enter: save | Tab: next field | Left/Right: pick department | Esc: back"
            }
            Screen::DepartmentForm(_) => "Enter: save | Tab: next field | Esc: back",
        }
    };
    frame.render_widget(Paragraph::new(hints).dark_gray(), area);
}

fn render_dialog(frame: &mut Frame, dialog: &Dialog) {
    let (title, message) = match dialog {
        Dialog::ConfirmDelete { id } => (
            "Confirm Delete",
            format!("Delete record {id}? (y/n)"),
        ),
        Dialog::Alert(message) => ("Notice", message.clone()),
    };

    let area = centered(frame.area(), 50, 5);
    frame.render_widget(Clear, area);
    let popup = Paragraph::new(message)
        .centered()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::new().fg(Color::Yellow))
                .title(title),
        );
    frame.render_widget(popup, area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}
