use chrono::NaiveDate;
use serde::Serialize;

use super::ProjectStatus;

/// A project as seen from one of the employees assigned to it.
#[derive(sqlx::FromRow, Serialize, Debug, Clone, PartialEq)]
pub struct AssignedProject {
    pub project_id: i64,
    pub project_name: String,
    pub department_id: Option<i64>,
    pub starting_date: NaiveDate,
    pub deadline: Option<NaiveDate>,
    pub status: ProjectStatus,
    pub department_name: Option<String>,
}
