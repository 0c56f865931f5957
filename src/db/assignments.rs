use anyhow::{Context, Result};

use super::Database;
use crate::models::AssignedProject;

impl Database {
    /// Projects the employee is assigned to. An unknown employee simply has none.
    pub async fn list_employee_projects(&self, employee_id: i64) -> Result<Vec<AssignedProject>> {
        let projects = sqlx::query_as::<_, AssignedProject>(
            r#"
            SELECT
                p.project_id,
                p.project_name,
                p.department_id,
                p.starting_date,
                p.deadline,
                p.status,
                d.department_name
            FROM employee_project ep
            JOIN project p ON ep.project_id = p.project_id
            LEFT JOIN department d ON p.department_id = d.id
            WHERE ep.employee_id = ?
            ORDER BY p.starting_date DESC, p.project_id DESC
            "#,
        )
        .bind(employee_id)
        .fetch_all(self.get_pool())
        .await
        .with_context(|| format!("failed to list projects for employee {employee_id}"))?;

        Ok(projects)
    }

    /// Link an employee to a project. Linking an already linked pair is a no-op.
    pub async fn assign_project(&self, employee_id: i64, project_id: i64) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO employee_project (employee_id, project_id)
            VALUES (?, ?)
            ON CONFLICT (employee_id, project_id) DO NOTHING
            "#,
        )
        .bind(employee_id)
        .bind(project_id)
        .execute(self.get_pool())
        .await
        .with_context(|| format!("failed to assign project {project_id} to employee {employee_id}"))?;

        Ok(())
    }

    pub async fn unassign_project(&self, employee_id: i64, project_id: i64) -> Result<()> {
        sqlx::query("DELETE FROM employee_project WHERE employee_id = ? AND project_id = ?")
            .bind(employee_id)
            .bind(project_id)
            .execute(self.get_pool())
            .await
            .with_context(|| {
                format!("failed to unassign project {project_id} from employee {employee_id}")
            })?;

        Ok(())
    }
}
