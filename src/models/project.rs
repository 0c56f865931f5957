use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{require_non_negative, require_text, Validate, ValidationError};

#[derive(sqlx::Type, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectStatus {
    #[default]
    #[serde(rename = "Not Started")]
    #[sqlx(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    #[sqlx(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Completed")]
    #[sqlx(rename = "Completed")]
    Completed,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::NotStarted => "Not Started",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Completed => "Completed",
        }
    }
}

/// Project row joined with department and manager names.
#[derive(sqlx::FromRow, Serialize, Debug, Clone, PartialEq)]
pub struct Project {
    pub project_id: i64,
    pub project_name: String,
    pub department_id: Option<i64>,
    pub starting_date: NaiveDate,
    pub project_manager: Option<i64>,
    pub co_manager: Option<i64>,
    pub deadline: Option<NaiveDate>,
    pub status: ProjectStatus,
    pub no_of_people_working: i64,
    pub remarks: Option<String>,
    pub department_name: Option<String>,
    pub manager_name: Option<String>,
    pub co_manager_name: Option<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ProjectInput {
    pub project_name: String,
    #[serde(default)]
    pub department_id: Option<i64>,
    pub starting_date: NaiveDate,
    #[serde(default)]
    pub project_manager: Option<i64>,
    #[serde(default)]
    pub co_manager: Option<i64>,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub no_of_people_working: i64,
    #[serde(default)]
    pub remarks: Option<String>,
}

impl Validate for ProjectInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("project_name", &self.project_name)?;
        require_non_negative("no_of_people_working", self.no_of_people_working)?;
        if let Some(deadline) = self.deadline {
            if deadline < self.starting_date {
                return Err(ValidationError(
                    "deadline must not be before starting_date".to_string(),
                ));
            }
        }
        Ok(())
    }
}
