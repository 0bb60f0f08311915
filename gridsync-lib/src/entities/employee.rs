//! Employee resource: record shape, grid columns, and create form

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::error::ConfigError;
use crate::form::FieldKind;
use crate::form::FieldRule;
use crate::form::FormSchema;
use crate::model::Row;
use crate::schema::ColumnDescriptor;
use crate::schema::ColumnKind;
use crate::schema::FacetValue;
use crate::schema::Schema;

use super::DashboardConfig;

/// Resource identifier for the employee collection.
pub const EMPLOYEE_RESOURCE: &str = "employee";

/// An employee record as returned by the remote source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Server-assigned unique identifier.
    pub id: i64,
    /// Full name.
    pub name: String,
    /// Email address, unique across employees.
    pub email: String,
    /// Department code from the configured set.
    pub department: String,
    /// Server-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<Employee> for Row {
    fn from(employee: Employee) -> Self {
        Row::new(employee.id)
            .set("name", employee.name)
            .set("email", employee.email)
            .set("department", employee.department)
            .set("created_at", employee.created_at)
    }
}

/// Payload for creating an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    /// Full name, 2 to 100 characters.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Department code from the configured set.
    pub department: String,
}

/// Grid columns for the employee list.
pub fn employee_columns(config: &DashboardConfig) -> Result<Schema, ConfigError> {
    Schema::new(vec![
        ColumnDescriptor::new("name", "Name"),
        ColumnDescriptor::new("email", "Email"),
        ColumnDescriptor::new("department", "Department").with_facets(
            config
                .departments
                .iter()
                .map(|department| FacetValue::new(department.label.clone(), department.code.clone())),
        ),
        ColumnDescriptor::new("created_at", "Date Added").with_kind(ColumnKind::Date),
    ])
}

/// Create-employee form: name 2-100 characters, valid email, department
/// from the configured code set.
pub fn employee_form(config: &DashboardConfig) -> FormSchema {
    FormSchema::new(vec![
        FieldRule::new("name").min_len(2).max_len(100),
        FieldRule::new("email").kind(FieldKind::Email),
        FieldRule::new("department").kind(FieldKind::Choice(config.department_codes())),
    ])
}
