use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{require_email, require_text, Validate, ValidationError};

/// Administrator read model. Never carries the password hash.
#[derive(sqlx::FromRow, Serialize, Debug, Clone, PartialEq)]
pub struct User {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub phone_no: Option<String>,
    pub dob: Option<NaiveDate>,
    pub joining_date: NaiveDate,
    pub department: Option<i64>,
    pub department_name: Option<String>,
}

/// Administrator row plus its stored password hash, used only by login.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct UserCredentials {
    #[sqlx(flatten)]
    pub user: User,
    pub password_hash: String,
}

/// Body of administrator create and replace requests.
///
/// `password` is mandatory on create. On replace an absent or empty
/// password keeps the stored one.
#[derive(Deserialize, Clone, PartialEq)]
pub struct UserInput {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone_no: Option<String>,
    #[serde(default)]
    pub dob: Option<NaiveDate>,
    pub joining_date: NaiveDate,
    #[serde(default)]
    pub department: Option<i64>,
    #[serde(default)]
    pub password: Option<String>,
}

impl UserInput {
    /// The password to store, if the payload carries one.
    pub fn new_password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }
}

impl std::fmt::Debug for UserInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserInput")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("phone_no", &self.phone_no)
            .field("dob", &self.dob)
            .field("joining_date", &self.joining_date)
            .field("department", &self.department)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Validate for UserInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)?;
        require_email(&self.email)
    }
}

#[derive(Deserialize, Default)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl LoginRequest {
    /// Both credentials, when present and non-empty.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let email = self.email.as_deref().map(str::trim).filter(|e| !e.is_empty())?;
        let password = self.password.as_deref().filter(|p| !p.is_empty())?;
        Some((email, password))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_counts_as_absent() {
        let input: UserInput = serde_json::from_str(
            r#"{"name":"Ana","email":"ana@example.com","joining_date":"2022-01-10","password":""}"#,
        )
        .unwrap();
        assert_eq!(input.new_password(), None);
    }

    #[test]
    fn debug_output_hides_password() {
        let input: UserInput = serde_json::from_str(
            r#"{"name":"Ana","email":"ana@example.com","joining_date":"2022-01-10","password":"hunter2"}"#,
        )
        .unwrap();
        let rendered = format!("{input:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn login_requires_both_fields() {
        let missing: LoginRequest = serde_json::from_str(r#"{"email":"ana@example.com"}"#).unwrap();
        assert!(missing.credentials().is_none());

        let blank: LoginRequest =
            serde_json::from_str(r#"{"email":"  ","password":"x"}"#).unwrap();
        assert!(blank.credentials().is_none());

        let full: LoginRequest =
            serde_json::from_str(r#"{"email":"ana@example.com","password":"x"}"#).unwrap();
        assert_eq!(full.credentials(), Some(("ana@example.com", "x")));
    }
}
