use super::{ActionHandler, Report};
use crate::core::choices::{department_choices, fetch_departments};
use crate::core::elicit::choose;
use crate::core::{statements, Prompter, Store};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Parameterless read rendered as a table.
pub struct ViewTable {
    statement: &'static str,
    empty_message: &'static str,
}

impl ViewTable {
    pub fn departments() -> Self {
        Self {
            statement: statements::SELECT_DEPARTMENTS,
            empty_message: "No departments found.",
        }
    }

    pub fn roles() -> Self {
        Self {
            statement: statements::SELECT_ROLES,
            empty_message: "No roles found.",
        }
    }

    pub fn employees() -> Self {
        Self {
            statement: statements::SELECT_EMPLOYEES,
            empty_message: "No employees found.",
        }
    }

    pub fn employees_by_manager() -> Self {
        Self {
            statement: statements::SELECT_EMPLOYEES_BY_MANAGER,
            empty_message: "No employees have a manager assigned.",
        }
    }

    pub fn employees_by_department() -> Self {
        Self {
            statement: statements::SELECT_EMPLOYEES_BY_DEPARTMENT,
            empty_message: "No employees found.",
        }
    }
}

#[async_trait]
impl<S: Store, P: Prompter> ActionHandler<S, P> for ViewTable {
    async fn run(&self, store: &S, _prompter: &P) -> Result<Report> {
        let rows = store.fetch(self.statement, &[]).await?;
        tracing::debug!("Read {} rows", rows.len());
        Ok(Report::from_rows(rows, self.empty_message))
    }
}

pub struct ViewDepartmentBudget;

#[async_trait]
impl<S: Store, P: Prompter> ActionHandler<S, P> for ViewDepartmentBudget {
    async fn run(&self, store: &S, prompter: &P) -> Result<Report> {
        let departments = fetch_departments(store).await?;
        if departments.is_empty() {
            return Ok(Report::Notice(
                "No departments available. Add a department first.".to_string(),
            ));
        }

        let department_id = choose(
            prompter,
            "Select the department to view the budget for:",
            &department_choices(&departments),
        )
        .await?;

        let rows = store
            .fetch(statements::SELECT_DEPARTMENT_BUDGET, &[Value::from(department_id)])
            .await?;
        Ok(Report::from_rows(
            rows,
            "No rows: the department has no employees.",
        ))
    }
}
