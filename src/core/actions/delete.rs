use super::{ActionHandler, Report};
use crate::core::choices::{
    department_choices, employee_choices, fetch_departments, fetch_employees, fetch_roles,
    role_choices,
};
use crate::core::elicit::choose;
use crate::core::{statements, Prompter, Store};
use crate::domain::model::Choice;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Shared tail of the three delete handlers: pick one row, delete it by id.
async fn delete_one<S: Store, P: Prompter>(
    store: &S,
    prompter: &P,
    entity: &str,
    choices: Vec<Choice<i64>>,
    statement: &str,
) -> Result<Report> {
    if choices.is_empty() {
        return Ok(Report::Notice(format!("No {} records to delete.", entity)));
    }

    let message = format!("Select the {} to delete:", entity);
    let id = choose(prompter, &message, &choices).await?;
    let label = choices
        .iter()
        .find(|c| c.value == id)
        .map(|c| c.label.clone())
        .unwrap_or_default();

    let affected = store.execute(statement, &[Value::from(id)]).await?;
    if affected == 0 {
        return Ok(Report::Notice(format!(
            "No {} matched the selection; nothing was deleted.",
            entity
        )));
    }

    tracing::info!(entity, id, "Record deleted");
    Ok(Report::Confirmation(format!(
        "Deleted {} from the database.",
        label
    )))
}

pub struct DeleteDepartment;

#[async_trait]
impl<S: Store, P: Prompter> ActionHandler<S, P> for DeleteDepartment {
    async fn run(&self, store: &S, prompter: &P) -> Result<Report> {
        let departments = fetch_departments(store).await?;
        delete_one(
            store,
            prompter,
            "department",
            department_choices(&departments),
            statements::DELETE_DEPARTMENT,
        )
        .await
    }
}

pub struct DeleteRole;

#[async_trait]
impl<S: Store, P: Prompter> ActionHandler<S, P> for DeleteRole {
    async fn run(&self, store: &S, prompter: &P) -> Result<Report> {
        let roles = fetch_roles(store).await?;
        delete_one(
            store,
            prompter,
            "role",
            role_choices(&roles),
            statements::DELETE_ROLE,
        )
        .await
    }
}

pub struct DeleteEmployee;

#[async_trait]
impl<S: Store, P: Prompter> ActionHandler<S, P> for DeleteEmployee {
    async fn run(&self, store: &S, prompter: &P) -> Result<Report> {
        let employees = fetch_employees(store).await?;
        delete_one(
            store,
            prompter,
            "employee",
            employee_choices(&employees),
            statements::DELETE_EMPLOYEE,
        )
        .await
    }
}
