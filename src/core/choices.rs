//! Reference fetches: read a whole entity table and turn it into choice
//! pairs. Always called right before the prompt that offers them.

use crate::core::statements;
use crate::core::Store;
use crate::domain::model::{
    Choice, Department, DepartmentId, Employee, EmployeeId, Role, RoleId, NO_MANAGER_LABEL,
};
use crate::utils::error::Result;

pub async fn fetch_departments<S: Store>(store: &S) -> Result<Vec<Department>> {
    let rows = store.fetch(statements::SELECT_DEPARTMENTS, &[]).await?;
    rows.iter().map(Department::try_from).collect()
}

pub async fn fetch_roles<S: Store>(store: &S) -> Result<Vec<Role>> {
    let rows = store.fetch(statements::SELECT_ROLES, &[]).await?;
    rows.iter().map(Role::try_from).collect()
}

pub async fn fetch_employees<S: Store>(store: &S) -> Result<Vec<Employee>> {
    let rows = store.fetch(statements::SELECT_EMPLOYEES, &[]).await?;
    rows.iter().map(Employee::try_from).collect()
}

pub fn department_choices(departments: &[Department]) -> Vec<Choice<DepartmentId>> {
    departments
        .iter()
        .map(|d| Choice::new(d.name.clone(), d.id))
        .collect()
}

pub fn role_choices(roles: &[Role]) -> Vec<Choice<RoleId>> {
    roles.iter().map(|r| Choice::new(r.title.clone(), r.id)).collect()
}

pub fn employee_choices(employees: &[Employee]) -> Vec<Choice<EmployeeId>> {
    employees
        .iter()
        .map(|e| Choice::new(e.full_name(), e.id))
        .collect()
}

/// Same as [`employee_choices`] with the `None` sentinel in front.
pub fn manager_choices(employees: &[Employee]) -> Vec<Choice<Option<EmployeeId>>> {
    std::iter::once(Choice::new(NO_MANAGER_LABEL, None))
        .chain(
            employees
                .iter()
                .map(|e| Choice::new(e.full_name(), Some(e.id))),
        )
        .collect()
}
