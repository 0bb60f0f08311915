//! Entity definitions for the dashboard resources
//!
//! The two collections the dashboard manages, with their record shapes,
//! grid column schemas, and create-form schemas.

mod attendance;
mod employee;

pub use attendance::*;
pub use employee::*;

/// A department an employee can belong to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    /// Short code stored on the record (e.g. `"HR"`).
    pub code: String,
    /// Display label (e.g. `"Human Resources"`).
    pub label: String,
}

impl Department {
    /// Creates a department entry.
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }
}

/// Configured choice sets shared by forms and facet filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// The departments employees can be assigned to.
    pub departments: Vec<Department>,
}

impl DashboardConfig {
    /// Returns the configured department codes.
    pub fn department_codes(&self) -> Vec<String> {
        self.departments
            .iter()
            .map(|department| department.code.clone())
            .collect()
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            departments: vec![
                Department::new("HR", "Human Resources"),
                Department::new("IT", "Information Technology"),
                Department::new("Sales", "Sales"),
            ],
        }
    }
}
