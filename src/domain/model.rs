use crate::utils::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type DepartmentId = i64;
pub type RoleId = i64;
pub type EmployeeId = i64;

/// One result row, cells kept in the order the statement selected them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub columns: Vec<String>,
    pub values: Vec<Value>,
}

impl Record {
    pub fn new(columns: Vec<String>, values: Vec<Value>) -> Self {
        Self { columns, values }
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .position(|c| c == column)
            .and_then(|i| self.values.get(i))
    }

    pub fn to_object(&self) -> Value {
        let map: Map<String, Value> = self
            .columns
            .iter()
            .cloned()
            .zip(self.values.iter().cloned())
            .collect();
        Value::Object(map)
    }

    fn required_i64(&self, column: &str) -> Result<i64> {
        self.get(column)
            .and_then(Value::as_i64)
            .ok_or_else(|| AppError::RowShapeError {
                message: format!("column '{}' missing or not an integer", column),
            })
    }

    fn optional_i64(&self, column: &str) -> Result<Option<i64>> {
        match self.get(column) {
            Some(Value::Null) => Ok(None),
            Some(v) => v.as_i64().map(Some).ok_or_else(|| AppError::RowShapeError {
                message: format!("column '{}' is not an integer", column),
            }),
            None => Err(AppError::RowShapeError {
                message: format!("column '{}' missing", column),
            }),
        }
    }

    fn required_f64(&self, column: &str) -> Result<f64> {
        self.get(column)
            .and_then(Value::as_f64)
            .ok_or_else(|| AppError::RowShapeError {
                message: format!("column '{}' missing or not numeric", column),
            })
    }

    fn required_str(&self, column: &str) -> Result<String> {
        self.get(column)
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| AppError::RowShapeError {
                message: format!("column '{}' missing or not text", column),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    pub title: String,
    pub salary: f64,
    pub department_id: DepartmentId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub role_id: RoleId,
    pub manager_id: Option<EmployeeId>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl TryFrom<&Record> for Department {
    type Error = AppError;

    fn try_from(record: &Record) -> Result<Self> {
        Ok(Self {
            id: record.required_i64("id")?,
            name: record.required_str("name")?,
        })
    }
}

impl TryFrom<&Record> for Role {
    type Error = AppError;

    fn try_from(record: &Record) -> Result<Self> {
        Ok(Self {
            id: record.required_i64("id")?,
            title: record.required_str("title")?,
            salary: record.required_f64("salary")?,
            department_id: record.required_i64("department_id")?,
        })
    }
}

impl TryFrom<&Record> for Employee {
    type Error = AppError;

    fn try_from(record: &Record) -> Result<Self> {
        Ok(Self {
            id: record.required_i64("id")?,
            first_name: record.required_str("first_name")?,
            last_name: record.required_str("last_name")?,
            role_id: record.required_i64("role_id")?,
            manager_id: record.optional_i64("manager_id")?,
        })
    }
}

/// A `{label, value}` pair offered in a closed-choice prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice<T> {
    pub label: String,
    pub value: T,
}

impl<T> Choice<T> {
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Label of the synthetic "no manager" entry.
pub const NO_MANAGER_LABEL: &str = "None";

/// Every operation offered by the top-level menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    ViewDepartments,
    ViewRoles,
    ViewEmployees,
    ViewEmployeesByManager,
    ViewEmployeesByDepartment,
    ViewDepartmentBudget,
    AddDepartment,
    AddRole,
    AddEmployee,
    UpdateEmployeeRole,
    UpdateEmployeeManager,
    DeleteDepartment,
    DeleteRole,
    DeleteEmployee,
    Quit,
}

impl Action {
    /// Menu order.
    pub const ALL: [Action; 15] = [
        Action::ViewDepartments,
        Action::ViewRoles,
        Action::ViewEmployees,
        Action::ViewEmployeesByManager,
        Action::ViewEmployeesByDepartment,
        Action::ViewDepartmentBudget,
        Action::AddDepartment,
        Action::AddRole,
        Action::AddEmployee,
        Action::UpdateEmployeeRole,
        Action::UpdateEmployeeManager,
        Action::DeleteDepartment,
        Action::DeleteRole,
        Action::DeleteEmployee,
        Action::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Action::ViewDepartments => "View All Departments",
            Action::ViewRoles => "View All Roles",
            Action::ViewEmployees => "View All Employees",
            Action::ViewEmployeesByManager => "View Employees by Manager",
            Action::ViewEmployeesByDepartment => "View Employees by Department",
            Action::ViewDepartmentBudget => "View Department Budget",
            Action::AddDepartment => "Add a Department",
            Action::AddRole => "Add a Role",
            Action::AddEmployee => "Add an Employee",
            Action::UpdateEmployeeRole => "Update Employee Role",
            Action::UpdateEmployeeManager => "Update Employee Manager",
            Action::DeleteDepartment => "Delete Department",
            Action::DeleteRole => "Delete Role",
            Action::DeleteEmployee => "Delete Employee",
            Action::Quit => "Quit",
        }
    }

    pub fn from_label(label: &str) -> Option<Action> {
        Action::ALL.into_iter().find(|a| a.label() == label)
    }

    pub fn menu_labels() -> Vec<String> {
        Action::ALL.iter().map(|a| a.label().to_string()).collect()
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(pairs: &[(&str, Value)]) -> Record {
        Record::new(
            pairs.iter().map(|(c, _)| c.to_string()).collect(),
            pairs.iter().map(|(_, v)| v.clone()).collect(),
        )
    }

    #[test]
    fn test_menu_labels_are_ordered_and_unique() {
        let labels = Action::menu_labels();
        assert_eq!(labels.len(), 15);
        assert_eq!(labels.first().map(String::as_str), Some("View All Departments"));
        assert_eq!(labels.last().map(String::as_str), Some("Quit"));

        let mut deduped = labels.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), labels.len());
    }

    #[test]
    fn test_from_label_requires_exact_match() {
        for action in Action::ALL {
            assert_eq!(Action::from_label(action.label()), Some(action));
        }
        assert_eq!(Action::from_label("Add  A Role"), None);
        assert_eq!(Action::from_label("add a role"), None);
    }

    #[test]
    fn test_employee_from_record_with_null_manager() {
        let row = record(&[
            ("id", json!(3)),
            ("first_name", json!("Ada")),
            ("last_name", json!("Lovelace")),
            ("role_id", json!(1)),
            ("manager_id", Value::Null),
        ]);

        let employee = Employee::try_from(&row).unwrap();
        assert_eq!(employee.manager_id, None);
        assert_eq!(employee.full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_role_from_record_rejects_missing_column() {
        let row = record(&[("id", json!(1)), ("title", json!("Engineer"))]);
        assert!(matches!(
            Role::try_from(&row),
            Err(AppError::RowShapeError { .. })
        ));
    }

    #[test]
    fn test_record_to_object() {
        let row = record(&[("department", json!("Engineering")), ("total_budget", json!(80000))]);
        assert_eq!(
            row.to_object(),
            json!({"department": "Engineering", "total_budget": 80000})
        );
    }
}
