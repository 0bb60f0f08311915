//! End-to-end flow: fetch, project, validate, create, refresh

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use gridsync_lib::GridController;
use gridsync_lib::QueryCache;
use gridsync_lib::entities::DashboardConfig;
use gridsync_lib::entities::EMPLOYEE_RESOURCE;
use gridsync_lib::entities::Employee;
use gridsync_lib::entities::NewEmployee;
use gridsync_lib::entities::employee_columns;
use gridsync_lib::entities::employee_form;
use gridsync_lib::error::SourceError;
use gridsync_lib::grid::FilterState;
use gridsync_lib::grid::PageState;
use gridsync_lib::grid::SelectionState;
use gridsync_lib::grid::SortState;
use gridsync_lib::grid::VisibilityState;
use gridsync_lib::model::Row;
use gridsync_lib::model::Value;
use gridsync_lib::sync::DataSource;

/// An in-memory employee collection standing in for the remote service.
struct EmployeeStore {
    employees: Mutex<Vec<Employee>>,
}

impl EmployeeStore {
    fn new() -> Self {
        Self {
            employees: Mutex::new(vec![
                employee(1, "Amara", "amara@example.com", "IT"),
                employee(2, "Bea", "bea@example.com", "HR"),
                employee(3, "Caleb", "caleb@example.com", "IT"),
            ]),
        }
    }
}

fn employee(id: i64, name: &str, email: &str, department: &str) -> Employee {
    Employee {
        id,
        name: name.to_string(),
        email: email.to_string(),
        department: department.to_string(),
        created_at: Utc::now(),
    }
}

#[async_trait]
impl DataSource for EmployeeStore {
    async fn list(&self, _resource: &str) -> Result<Vec<Row>, SourceError> {
        let employees = self.employees.lock().unwrap();
        Ok(employees.iter().cloned().map(Row::from).collect())
    }

    async fn create(
        &self,
        _resource: &str,
        payload: serde_json::Value,
    ) -> Result<Row, SourceError> {
        let new: NewEmployee = serde_json::from_value(payload)
            .map_err(|err| SourceError::Parse(err.to_string()))?;

        let mut employees = self.employees.lock().unwrap();
        let created = employee(
            employees.len() as i64 + 1,
            &new.name,
            &new.email,
            &new.department,
        );
        employees.push(created.clone());
        Ok(created.into())
    }
}

#[tokio::test]
async fn test_employee_grid_round_trip() {
    let config = DashboardConfig::default();
    let cache = QueryCache::new(Arc::new(EmployeeStore::new()));
    let controller = GridController::new(
        employee_columns(&config).unwrap(),
        EMPLOYEE_RESOURCE,
        cache,
    );

    let mut filters = FilterState::new();
    let mut selection = SelectionState::new();
    let visibility = VisibilityState::new();
    let page = PageState::all();

    // Initial render: everyone, sorted by name.
    let rows = controller.rows().await.unwrap();
    let projection = controller.project(
        &rows,
        &filters,
        &SortState::ascending("name"),
        &visibility,
        &page,
    );
    assert_eq!(projection.row_count, 3);
    assert_eq!(projection.columns.len(), 4);

    // Facet down to IT and select both survivors.
    filters.set_facet("department", vec![Value::from("IT")]);
    let projection = controller.project(&rows, &filters, &SortState::none(), &visibility, &page);
    assert_eq!(projection.row_count, 2);
    selection.select_all(projection.rows.iter().map(|row| row.key));
    assert_eq!(selection.len(), 2);

    // The create form blocks a bad submission before any remote call.
    let mut input = BTreeMap::new();
    input.insert("name".to_string(), "D".to_string());
    input.insert("email".to_string(), "dev@example".to_string());
    input.insert("department".to_string(), "IT".to_string());
    let errors = employee_form(&config).validate(&input).unwrap_err();
    assert!(errors.contains("name"));
    assert!(errors.contains("email"));

    // Fix the input, submit, and refresh.
    input.insert("name".to_string(), "Devi".to_string());
    input.insert("email".to_string(), "devi@example.com".to_string());
    employee_form(&config).validate(&input).unwrap();

    let payload = NewEmployee {
        name: "Devi".to_string(),
        email: "devi@example.com".to_string(),
        department: "IT".to_string(),
    };
    let created = controller
        .mutate(serde_json::to_value(&payload).unwrap())
        .await
        .unwrap();
    assert_eq!(created.get("name").render(), "Devi");

    let rows = controller.refresh(&mut selection).await.unwrap();
    assert!(selection.is_empty());

    let projection = controller.project(&rows, &filters, &SortState::none(), &visibility, &page);
    assert_eq!(projection.row_count, 3);
}
