//! SQL text for every statement the tracker issues. User values are only ever
//! bound through the `?N` placeholders.

pub const SELECT_DEPARTMENTS: &str = "SELECT id, name FROM department ORDER BY id";

pub const SELECT_ROLES: &str = "SELECT id, title, salary, department_id FROM role ORDER BY id";

pub const SELECT_EMPLOYEES: &str =
    "SELECT id, first_name, last_name, role_id, manager_id FROM employee ORDER BY id";

pub const SELECT_EMPLOYEES_BY_MANAGER: &str = "\
SELECT m.first_name || ' ' || m.last_name AS manager,
       e.first_name || ' ' || e.last_name AS employee
FROM employee e
JOIN employee m ON e.manager_id = m.id
ORDER BY manager, employee";

pub const SELECT_EMPLOYEES_BY_DEPARTMENT: &str = "\
SELECT d.name AS department,
       e.first_name || ' ' || e.last_name AS employee,
       r.title AS role
FROM employee e
JOIN role r ON e.role_id = r.id
JOIN department d ON r.department_id = d.id
ORDER BY department, employee";

/// Zero employees in the department means zero groups, hence zero rows.
pub const SELECT_DEPARTMENT_BUDGET: &str = "\
SELECT d.name AS department, SUM(r.salary) AS total_budget
FROM employee e
JOIN role r ON e.role_id = r.id
JOIN department d ON r.department_id = d.id
WHERE d.id = ?1
GROUP BY d.id, d.name";

pub const INSERT_DEPARTMENT: &str = "INSERT INTO department (name) VALUES (?1)";

pub const INSERT_ROLE: &str = "INSERT INTO role (title, salary, department_id) VALUES (?1, ?2, ?3)";

pub const INSERT_EMPLOYEE: &str =
    "INSERT INTO employee (first_name, last_name, role_id, manager_id) VALUES (?1, ?2, ?3, ?4)";

pub const UPDATE_EMPLOYEE_ROLE: &str = "UPDATE employee SET role_id = ?1 WHERE id = ?2";

pub const UPDATE_EMPLOYEE_MANAGER: &str = "UPDATE employee SET manager_id = ?1 WHERE id = ?2";

pub const DELETE_DEPARTMENT: &str = "DELETE FROM department WHERE id = ?1";

pub const DELETE_ROLE: &str = "DELETE FROM role WHERE id = ?1";

pub const DELETE_EMPLOYEE: &str = "DELETE FROM employee WHERE id = ?1";
