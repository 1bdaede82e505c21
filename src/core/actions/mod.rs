//! One handler per menu operation. Every handler runs the same chain:
//! reference fetch, elicitation, one statement, report.

pub mod add;
pub mod delete;
pub mod update;
pub mod view;

use crate::core::{Prompter, Store};
use crate::domain::model::{Action, Record};
use crate::utils::error::Result;
use async_trait::async_trait;

/// What a handler hands back to the dispatcher on success.
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    /// A mutation went through.
    Confirmation(String),
    /// A read returned at least one row.
    Table(Vec<Record>),
    /// A read returned nothing.
    NoRows(String),
    /// The handler stopped before prompting because a choice list was empty,
    /// or a mutation matched no row.
    Notice(String),
}

impl Report {
    pub(crate) fn from_rows(rows: Vec<Record>, empty_message: &str) -> Self {
        if rows.is_empty() {
            Report::NoRows(empty_message.to_string())
        } else {
            Report::Table(rows)
        }
    }
}

#[async_trait]
pub trait ActionHandler<S: Store, P: Prompter>: Send + Sync {
    async fn run(&self, store: &S, prompter: &P) -> Result<Report>;
}

/// Closed mapping from menu action to handler. `Quit` has no handler.
pub fn handler_for<S, P>(action: Action) -> Option<Box<dyn ActionHandler<S, P>>>
where
    S: Store + 'static,
    P: Prompter + 'static,
{
    let handler: Box<dyn ActionHandler<S, P>> = match action {
        Action::ViewDepartments => Box::new(view::ViewTable::departments()),
        Action::ViewRoles => Box::new(view::ViewTable::roles()),
        Action::ViewEmployees => Box::new(view::ViewTable::employees()),
        Action::ViewEmployeesByManager => Box::new(view::ViewTable::employees_by_manager()),
        Action::ViewEmployeesByDepartment => Box::new(view::ViewTable::employees_by_department()),
        Action::ViewDepartmentBudget => Box::new(view::ViewDepartmentBudget),
        Action::AddDepartment => Box::new(add::AddDepartment),
        Action::AddRole => Box::new(add::AddRole),
        Action::AddEmployee => Box::new(add::AddEmployee),
        Action::UpdateEmployeeRole => Box::new(update::UpdateEmployeeRole),
        Action::UpdateEmployeeManager => Box::new(update::UpdateEmployeeManager),
        Action::DeleteDepartment => Box::new(delete::DeleteDepartment),
        Action::DeleteRole => Box::new(delete::DeleteRole),
        Action::DeleteEmployee => Box::new(delete::DeleteEmployee),
        Action::Quit => return None,
    };
    Some(handler)
}
