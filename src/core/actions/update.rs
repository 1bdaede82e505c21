use super::{ActionHandler, Report};
use crate::core::choices::{
    employee_choices, fetch_employees, fetch_roles, manager_choices, role_choices,
};
use crate::core::elicit::choose;
use crate::core::{statements, Prompter, Store};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

const NO_EMPLOYEES: &str = "No employees available. Add an employee first.";
const NOTHING_MATCHED: &str = "No employee matched the selection; nothing was updated.";

pub struct UpdateEmployeeRole;

#[async_trait]
impl<S: Store, P: Prompter> ActionHandler<S, P> for UpdateEmployeeRole {
    async fn run(&self, store: &S, prompter: &P) -> Result<Report> {
        let employees = fetch_employees(store).await?;
        if employees.is_empty() {
            return Ok(Report::Notice(NO_EMPLOYEES.to_string()));
        }
        let roles = fetch_roles(store).await?;
        if roles.is_empty() {
            return Ok(Report::Notice(
                "No roles available. Add a role first.".to_string(),
            ));
        }

        let employee_id = choose(
            prompter,
            "Select the employee to update:",
            &employee_choices(&employees),
        )
        .await?;
        let role_id = choose(
            prompter,
            "Select the new role for this employee:",
            &role_choices(&roles),
        )
        .await?;

        let affected = store
            .execute(
                statements::UPDATE_EMPLOYEE_ROLE,
                &[Value::from(role_id), Value::from(employee_id)],
            )
            .await?;
        if affected == 0 {
            return Ok(Report::Notice(NOTHING_MATCHED.to_string()));
        }

        tracing::info!(employee_id, role_id, "Employee role updated");
        Ok(Report::Confirmation(
            "Employee role updated successfully!".to_string(),
        ))
    }
}

pub struct UpdateEmployeeManager;

#[async_trait]
impl<S: Store, P: Prompter> ActionHandler<S, P> for UpdateEmployeeManager {
    async fn run(&self, store: &S, prompter: &P) -> Result<Report> {
        let employees = fetch_employees(store).await?;
        if employees.is_empty() {
            return Ok(Report::Notice(NO_EMPLOYEES.to_string()));
        }

        let employee_id = choose(
            prompter,
            "Select the employee to update:",
            &employee_choices(&employees),
        )
        .await?;

        // Second fetch: the manager list is read right before it is offered.
        let candidates = fetch_employees(store).await?;
        let manager_id = choose(
            prompter,
            "Select the new manager for this employee (or None):",
            &manager_choices(&candidates),
        )
        .await?;

        let affected = store
            .execute(
                statements::UPDATE_EMPLOYEE_MANAGER,
                &[Value::from(manager_id), Value::from(employee_id)],
            )
            .await?;
        if affected == 0 {
            return Ok(Report::Notice(NOTHING_MATCHED.to_string()));
        }

        tracing::info!(employee_id, manager_id = ?manager_id, "Employee manager updated");
        let message = match manager_id {
            Some(_) => "Employee manager updated successfully!",
            None => "Employee manager cleared successfully!",
        };
        Ok(Report::Confirmation(message.to_string()))
    }
}
