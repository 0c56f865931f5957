use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{require_email, require_text, Validate, ValidationError};

pub const MAX_RATING: f64 = 5.0;

/// Employee row joined with its department and manager names.
#[derive(sqlx::FromRow, Serialize, Debug, Clone, PartialEq)]
pub struct Employee {
    pub employee_id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub dob: Option<NaiveDate>,
    pub joining_date: NaiveDate,
    pub department: Option<i64>,
    pub manager_id: Option<i64>,
    pub rating_overall: f64,
    pub department_name: Option<String>,
    pub manager_name: Option<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct EmployeeInput {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub dob: Option<NaiveDate>,
    pub joining_date: NaiveDate,
    #[serde(default)]
    pub department: Option<i64>,
    #[serde(default)]
    pub manager_id: Option<i64>,
    #[serde(default)]
    pub rating_overall: f64,
}

impl Validate for EmployeeInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)?;
        require_email(&self.email)?;
        if !(0.0..=MAX_RATING).contains(&self.rating_overall) {
            return Err(ValidationError(format!(
                "rating_overall must be between 0 and {MAX_RATING}"
            )));
        }
        Ok(())
    }
}
