use anyhow::{Context, Result};

use super::Database;
use crate::models::{non_blank, Employee, EmployeeInput};

const SELECT_EMPLOYEE: &str = r#"
    SELECT
        e.employee_id,
        e.name,
        e.email,
        e.phone,
        e.dob,
        e.joining_date,
        e.department,
        e.manager_id,
        e.rating_overall,
        d.department_name,
        u.name AS manager_name
    FROM employee e
    LEFT JOIN department d ON e.department = d.id
    LEFT JOIN users u ON e.manager_id = u.user_id
"#;

impl Database {
    pub async fn list_employees(&self) -> Result<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(&format!(
            "{SELECT_EMPLOYEE} ORDER BY e.name COLLATE NOCASE ASC, e.employee_id ASC"
        ))
        .fetch_all(self.get_pool())
        .await
        .context("failed to list employees")?;

        Ok(employees)
    }

    pub async fn get_employee(&self, id: i64) -> Result<Option<Employee>> {
        let employee =
            sqlx::query_as::<_, Employee>(&format!("{SELECT_EMPLOYEE} WHERE e.employee_id = ?"))
                .bind(id)
                .fetch_optional(self.get_pool())
                .await
                .with_context(|| format!("failed to load employee {id}"))?;

        Ok(employee)
    }

    pub async fn create_employee(&self, employee: &EmployeeInput) -> Result<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO employee (name, email, phone, dob, joining_date, department, manager_id, rating_overall)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING employee_id
            "#,
        )
        .bind(&employee.name)
        .bind(&employee.email)
        .bind(non_blank(&employee.phone))
        .bind(employee.dob)
        .bind(employee.joining_date)
        .bind(employee.department)
        .bind(employee.manager_id)
        .bind(employee.rating_overall)
        .fetch_one(self.get_pool())
        .await
        .context("failed to create employee")?;

        Ok(id)
    }

    pub async fn update_employee(&self, id: i64, employee: &EmployeeInput) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE employee
            SET name = ?, email = ?, phone = ?, dob = ?, joining_date = ?,
                department = ?, manager_id = ?, rating_overall = ?
            WHERE employee_id = ?
            "#,
        )
        .bind(&employee.name)
        .bind(&employee.email)
        .bind(non_blank(&employee.phone))
        .bind(employee.dob)
        .bind(employee.joining_date)
        .bind(employee.department)
        .bind(employee.manager_id)
        .bind(employee.rating_overall)
        .bind(id)
        .execute(self.get_pool())
        .await
        .with_context(|| format!("failed to update employee {id}"))?;

        Ok(())
    }

    pub async fn delete_employee(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM employee WHERE employee_id = ?")
            .bind(id)
            .execute(self.get_pool())
            .await
            .with_context(|| format!("failed to delete employee {id}"))?;

        Ok(())
    }
}
