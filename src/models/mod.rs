mod assignment;
mod dashboard;
mod department;
mod employee;
mod project;
mod user;

pub use assignment::AssignedProject;
pub use dashboard::{DashboardCounts, DashboardStats, StatusCount};
pub use department::{Department, DepartmentInput};
pub use employee::{Employee, EmployeeInput};
pub use project::{Project, ProjectInput, ProjectStatus};
pub use user::{LoginRequest, User, UserCredentials, UserInput};

/// Reason an incoming payload was rejected before reaching storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

/// Boundary checks applied to request payloads.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

pub(crate) fn require_text(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError(format!("{field} is required")));
    }
    Ok(())
}

pub(crate) fn require_non_negative(field: &str, value: i64) -> Result<(), ValidationError> {
    if value < 0 {
        return Err(ValidationError(format!("{field} must not be negative")));
    }
    Ok(())
}

pub(crate) fn require_email(value: &str) -> Result<(), ValidationError> {
    require_text("email", value)?;
    if !value.contains('@') {
        return Err(ValidationError("email must be a valid address".to_string()));
    }
    Ok(())
}

/// Blank optional text is stored as null.
pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
