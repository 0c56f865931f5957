use anyhow::{Context, Result};

use super::projects::SELECT_PROJECT;
use super::Database;
use crate::models::{DashboardCounts, DashboardStats, Project, ProjectStatus, StatusCount};

const RECENT_PROJECT_LIMIT: i64 = 5;

impl Database {
    async fn count_rows(&self, table: &'static str) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(self.get_pool())
            .await
            .with_context(|| format!("failed to count {table}"))?;

        Ok(count)
    }

    /// Aggregate figures for the dashboard. Each figure is its own query.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats> {
        let counts = DashboardCounts {
            departments: self.count_rows("department").await?,
            employees: self.count_rows("employee").await?,
            projects: self.count_rows("project").await?,
            administrators: self.count_rows("users").await?,
        };

        let active_project_count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM project WHERE status = ?")
                .bind(ProjectStatus::InProgress)
                .fetch_one(self.get_pool())
                .await
                .context("failed to count active projects")?;

        let projects_by_status = sqlx::query_as::<_, StatusCount>(
            "SELECT status, COUNT(*) AS count FROM project GROUP BY status ORDER BY status",
        )
        .fetch_all(self.get_pool())
        .await
        .context("failed to group projects by status")?;

        let recent_projects = sqlx::query_as::<_, Project>(&format!(
            "{SELECT_PROJECT} ORDER BY p.starting_date DESC, p.project_id DESC LIMIT ?"
        ))
        .bind(RECENT_PROJECT_LIMIT)
        .fetch_all(self.get_pool())
        .await
        .context("failed to load recent projects")?;

        Ok(DashboardStats {
            counts,
            active_project_count,
            projects_by_status,
            recent_projects,
        })
    }
}
