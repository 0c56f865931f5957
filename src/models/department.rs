use serde::{Deserialize, Serialize};

use super::{require_non_negative, require_text, Validate, ValidationError};

#[derive(sqlx::FromRow, Serialize, Debug, Clone, PartialEq)]
pub struct Department {
    pub id: i64,
    pub department_name: String,
    pub respective_manager: String,
    pub no_of_ongoing_projects: i64,
    pub no_of_finished_projects: i64,
    pub no_of_people_in_department: i64,
}

/// Body of department create and replace requests.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct DepartmentInput {
    pub department_name: String,
    pub respective_manager: String,
    #[serde(default)]
    pub no_of_ongoing_projects: i64,
    #[serde(default)]
    pub no_of_finished_projects: i64,
    #[serde(default)]
    pub no_of_people_in_department: i64,
}

impl Validate for DepartmentInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("department_name", &self.department_name)?;
        require_text("respective_manager", &self.respective_manager)?;
        require_non_negative("no_of_ongoing_projects", self.no_of_ongoing_projects)?;
        require_non_negative("no_of_finished_projects", self.no_of_finished_projects)?;
        require_non_negative("no_of_people_in_department", self.no_of_people_in_department)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_counts_default_to_zero() {
        let input: DepartmentInput = serde_json::from_str(
            r#"{"department_name":"R&D","respective_manager":"Amy"}"#,
        )
        .unwrap();

        assert_eq!(input.no_of_ongoing_projects, 0);
        assert_eq!(input.no_of_finished_projects, 0);
        assert_eq!(input.no_of_people_in_department, 0);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn negative_counts_are_rejected() {
        let input = DepartmentInput {
            department_name: "Ops".to_string(),
            respective_manager: "Raj".to_string(),
            no_of_ongoing_projects: 0,
            no_of_finished_projects: -1,
            no_of_people_in_department: 3,
        };

        assert_eq!(
            input.validate().unwrap_err().to_string(),
            "no_of_finished_projects must not be negative"
        );
    }
}
