use anyhow::{Context, Result};
use tracing::debug;

use super::Database;
use crate::models::{non_blank, Project, ProjectInput};

pub(super) const SELECT_PROJECT: &str = r#"
    SELECT
        p.project_id,
        p.project_name,
        p.department_id,
        p.starting_date,
        p.project_manager,
        p.co_manager,
        p.deadline,
        p.status,
        p.no_of_people_working,
        p.remarks,
        d.department_name,
        m.name AS manager_name,
        c.name AS co_manager_name
    FROM project p
    LEFT JOIN department d ON p.department_id = d.id
    LEFT JOIN users m ON p.project_manager = m.user_id
    LEFT JOIN users c ON p.co_manager = c.user_id
"#;

impl Database {
    /// All projects, most recently started first.
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        let projects = sqlx::query_as::<_, Project>(&format!(
            "{SELECT_PROJECT} ORDER BY p.starting_date DESC, p.project_id DESC"
        ))
        .fetch_all(self.get_pool())
        .await
        .context("failed to list projects")?;

        Ok(projects)
    }

    pub async fn get_project(&self, id: i64) -> Result<Option<Project>> {
        let project =
            sqlx::query_as::<_, Project>(&format!("{SELECT_PROJECT} WHERE p.project_id = ?"))
                .bind(id)
                .fetch_optional(self.get_pool())
                .await
                .with_context(|| format!("failed to load project {id}"))?;

        Ok(project)
    }

    pub async fn create_project(&self, project: &ProjectInput) -> Result<i64> {
        debug!(status = project.status.as_str(), "Inserting project");

        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO project (project_name, department_id, starting_date, project_manager, co_manager,
                                 deadline, status, no_of_people_working, remarks)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING project_id
            "#,
        )
        .bind(&project.project_name)
        .bind(project.department_id)
        .bind(project.starting_date)
        .bind(project.project_manager)
        .bind(project.co_manager)
        .bind(project.deadline)
        .bind(project.status)
        .bind(project.no_of_people_working)
        .bind(non_blank(&project.remarks))
        .fetch_one(self.get_pool())
        .await
        .context("failed to create project")?;

        Ok(id)
    }

    pub async fn update_project(&self, id: i64, project: &ProjectInput) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE project
            SET project_name = ?, department_id = ?, starting_date = ?, project_manager = ?,
                co_manager = ?, deadline = ?, status = ?, no_of_people_working = ?, remarks = ?
            WHERE project_id = ?
            "#,
        )
        .bind(&project.project_name)
        .bind(project.department_id)
        .bind(project.starting_date)
        .bind(project.project_manager)
        .bind(project.co_manager)
        .bind(project.deadline)
        .bind(project.status)
        .bind(project.no_of_people_working)
        .bind(non_blank(&project.remarks))
        .bind(id)
        .execute(self.get_pool())
        .await
        .with_context(|| format!("failed to update project {id}"))?;

        Ok(())
    }

    pub async fn delete_project(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM project WHERE project_id = ?")
            .bind(id)
            .execute(self.get_pool())
            .await
            .with_context(|| format!("failed to delete project {id}"))?;

        Ok(())
    }
}
