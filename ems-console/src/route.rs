//! Route table
//!
//! The client-visible paths of the original web UI are the navigation
//! contract; every screen is addressed by one of them. `/` resolves to the
//! employee list.

use std::fmt;

/// One addressable view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    EmployeeList,
    AddEmployee,
    UpdateEmployee(i64),
    DepartmentList,
    AddDepartment,
    UpdateDepartment(i64),
}

impl Route {
    /// Parse a path into a route
    pub fn parse(path: &str) -> Option<Route> {
        match path {
            "/" | "/employees" => Some(Route::EmployeeList),
            "/add-employee" => Some(Route::AddEmployee),
            "/departments" => Some(Route::DepartmentList),
            "/add-department" => Some(Route::AddDepartment),
            _ => {
                if let Some(id) = path.strip_prefix("/update-employee/") {
                    id.parse().ok().map(Route::UpdateEmployee)
                } else if let Some(id) = path.strip_prefix("/update-department/") {
                    id.parse().ok().map(Route::UpdateDepartment)
                } else {
                    None
                }
            }
        }
    }

    /// Canonical path for this route
    pub fn path(&self) -> String {
        match self {
            Route::EmployeeList => "/employees".into(),
            Route::AddEmployee => "/add-employee".into(),
            Route::UpdateEmployee(id) => format!("/update-employee/{id}"),
            Route::DepartmentList => "/departments".into(),
            Route::AddDepartment => "/add-department".into(),
            Route::UpdateDepartment(id) => format!("/update-department/{id}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_the_full_path_set() {
        assert_eq!(Route::parse("/"), Some(Route::EmployeeList));
        assert_eq!(Route::parse("/employees"), Some(Route::EmployeeList));
        assert_eq!(Route::parse("/add-employee"), Some(Route::AddEmployee));
        assert_eq!(
            Route::parse("/update-employee/42"),
            Some(Route::UpdateEmployee(42))
        );
        assert_eq!(Route::parse("/departments"), Some(Route::DepartmentList));
        assert_eq!(Route::parse("/add-department"), Some(Route::AddDepartment));
        assert_eq!(
            Route::parse("/update-department/7"),
            Some(Route::UpdateDepartment(7))
        );
    }

    #[test]
    fn test_path_round_trips() {
        for route in [
            Route::EmployeeList,
            Route::AddEmployee,
            Route::UpdateEmployee(42),
            Route::DepartmentList,
            Route::AddDepartment,
            Route::UpdateDepartment(7),
        ] {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }

    #[test]
    fn test_unknown_paths_rejected() {
        assert_eq!(Route::parse("/settings"), None);
        assert_eq!(Route::parse("/update-employee/abc"), None);
        assert_eq!(Route::parse("/update-employee/"), None);
        assert_eq!(Route::parse("employees"), None);
    }
}
