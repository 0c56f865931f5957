use serde::Serialize;

use super::{Project, ProjectStatus};

#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardCounts {
    pub departments: i64,
    pub employees: i64,
    pub projects: i64,
    pub administrators: i64,
}

#[derive(sqlx::FromRow, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StatusCount {
    pub status: ProjectStatus,
    pub count: i64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub counts: DashboardCounts,
    pub active_project_count: i64,
    pub projects_by_status: Vec<StatusCount>,
    pub recent_projects: Vec<Project>,
}
