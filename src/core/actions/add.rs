use super::{ActionHandler, Report};
use crate::core::choices::{
    department_choices, fetch_departments, fetch_employees, fetch_roles, manager_choices,
    role_choices,
};
use crate::core::elicit::{ask_positive_amount, ask_text, choose};
use crate::core::{statements, Prompter, Store};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

pub struct AddDepartment;

#[async_trait]
impl<S: Store, P: Prompter> ActionHandler<S, P> for AddDepartment {
    async fn run(&self, store: &S, prompter: &P) -> Result<Report> {
        let name = ask_text(
            prompter,
            "Enter the name of the new department:",
            "Department name cannot be empty!",
        )
        .await?;

        store
            .execute(statements::INSERT_DEPARTMENT, &[Value::from(name.as_str())])
            .await?;

        tracing::info!(department = %name, "Department added");
        Ok(Report::Confirmation(format!("Added {} to the database.", name)))
    }
}

pub struct AddRole;

#[async_trait]
impl<S: Store, P: Prompter> ActionHandler<S, P> for AddRole {
    async fn run(&self, store: &S, prompter: &P) -> Result<Report> {
        let departments = fetch_departments(store).await?;
        if departments.is_empty() {
            return Ok(Report::Notice(
                "No departments available. Add a department first.".to_string(),
            ));
        }

        let title = ask_text(
            prompter,
            "Enter the title of the new role:",
            "Role title cannot be empty!",
        )
        .await?;
        let salary = ask_positive_amount(
            prompter,
            "Enter the salary for the new role:",
            "Salary must be a positive number!",
        )
        .await?;
        let department_id = choose(
            prompter,
            "Select the department for this role:",
            &department_choices(&departments),
        )
        .await?;

        let params = [
            Value::from(title.as_str()),
            Value::from(salary),
            Value::from(department_id),
        ];
        store.execute(statements::INSERT_ROLE, &params).await?;

        tracing::info!(role = %title, salary, department_id, "Role added");
        Ok(Report::Confirmation(format!("Added {} to the database.", title)))
    }
}

pub struct AddEmployee;

#[async_trait]
impl<S: Store, P: Prompter> ActionHandler<S, P> for AddEmployee {
    async fn run(&self, store: &S, prompter: &P) -> Result<Report> {
        let roles = fetch_roles(store).await?;
        if roles.is_empty() {
            return Ok(Report::Notice(
                "No roles available. Add a role first.".to_string(),
            ));
        }
        let employees = fetch_employees(store).await?;

        let first_name = ask_text(
            prompter,
            "Enter the first name of the employee:",
            "First name cannot be empty!",
        )
        .await?;
        let last_name = ask_text(
            prompter,
            "Enter the last name of the employee:",
            "Last name cannot be empty!",
        )
        .await?;
        let role_id = choose(
            prompter,
            "Select the role for this employee:",
            &role_choices(&roles),
        )
        .await?;
        let manager_id = choose(
            prompter,
            "Select the manager for this employee (or None):",
            &manager_choices(&employees),
        )
        .await?;

        // None binds as SQL NULL.
        let params = [
            Value::from(first_name.as_str()),
            Value::from(last_name.as_str()),
            Value::from(role_id),
            Value::from(manager_id),
        ];
        store.execute(statements::INSERT_EMPLOYEE, &params).await?;

        tracing::info!(role_id, manager_id = ?manager_id, "Employee added");
        Ok(Report::Confirmation(format!(
            "Added {} {} to the database.",
            first_name, last_name
        )))
    }
}
