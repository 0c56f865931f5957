use anyhow::{Context, Result};

use super::Database;
use crate::models::{Department, DepartmentInput};

const SELECT_DEPARTMENT: &str = r#"
    SELECT
        id,
        department_name,
        respective_manager,
        no_of_ongoing_projects,
        no_of_finished_projects,
        no_of_people_in_department
    FROM department
"#;

impl Database {
    pub async fn list_departments(&self) -> Result<Vec<Department>> {
        let departments = sqlx::query_as::<_, Department>(&format!(
            "{SELECT_DEPARTMENT} ORDER BY department_name COLLATE NOCASE ASC, id ASC"
        ))
        .fetch_all(self.get_pool())
        .await
        .context("failed to list departments")?;

        Ok(departments)
    }

    pub async fn get_department(&self, id: i64) -> Result<Option<Department>> {
        let department =
            sqlx::query_as::<_, Department>(&format!("{SELECT_DEPARTMENT} WHERE id = ?"))
                .bind(id)
                .fetch_optional(self.get_pool())
                .await
                .with_context(|| format!("failed to load department {id}"))?;

        Ok(department)
    }

    pub async fn create_department(&self, department: &DepartmentInput) -> Result<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO department (department_name, respective_manager, no_of_ongoing_projects,
                                    no_of_finished_projects, no_of_people_in_department)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&department.department_name)
        .bind(&department.respective_manager)
        .bind(department.no_of_ongoing_projects)
        .bind(department.no_of_finished_projects)
        .bind(department.no_of_people_in_department)
        .fetch_one(self.get_pool())
        .await
        .context("failed to create department")?;

        Ok(id)
    }

    pub async fn update_department(&self, id: i64, department: &DepartmentInput) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE department
            SET department_name = ?, respective_manager = ?, no_of_ongoing_projects = ?,
                no_of_finished_projects = ?, no_of_people_in_department = ?
            WHERE id = ?
            "#,
        )
        .bind(&department.department_name)
        .bind(&department.respective_manager)
        .bind(department.no_of_ongoing_projects)
        .bind(department.no_of_finished_projects)
        .bind(department.no_of_people_in_department)
        .bind(id)
        .execute(self.get_pool())
        .await
        .with_context(|| format!("failed to update department {id}"))?;

        Ok(())
    }

    pub async fn delete_department(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM department WHERE id = ?")
            .bind(id)
            .execute(self.get_pool())
            .await
            .with_context(|| format!("failed to delete department {id}"))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::db::test_db;
    use crate::models::DepartmentInput;

    fn input(name: &str, manager: &str) -> DepartmentInput {
        DepartmentInput {
            department_name: name.to_string(),
            respective_manager: manager.to_string(),
            no_of_ongoing_projects: 0,
            no_of_finished_projects: 0,
            no_of_people_in_department: 0,
        }
    }

    #[tokio::test]
    async fn create_then_get_returns_the_input() {
        let db = test_db().await;
        let mut dept = input("R&D", "Amy");
        dept.no_of_people_in_department = 12;

        let id = db.create_department(&dept).await.unwrap();
        let stored = db.get_department(id).await.unwrap().unwrap();

        assert_eq!(stored.id, id);
        assert_eq!(stored.department_name, "R&D");
        assert_eq!(stored.respective_manager, "Amy");
        assert_eq!(stored.no_of_ongoing_projects, 0);
        assert_eq!(stored.no_of_people_in_department, 12);
    }

    #[tokio::test]
    async fn list_is_sorted_by_name_ignoring_case() {
        let db = test_db().await;
        for name in ["Sales", "finance", "Operations"] {
            db.create_department(&input(name, "Lee")).await.unwrap();
        }

        let names: Vec<String> = db
            .list_departments()
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.department_name)
            .collect();

        assert_eq!(names, vec!["finance", "Operations", "Sales"]);
    }

    #[tokio::test]
    async fn text_is_stored_as_given() {
        let db = test_db().await;
        let id = db.create_department(&input(" R&D ", "Amy ")).await.unwrap();

        let stored = db.get_department(id).await.unwrap().unwrap();
        assert_eq!(stored.department_name, " R&D ");
        assert_eq!(stored.respective_manager, "Amy ");
    }

    #[tokio::test]
    async fn update_replaces_every_field() {
        let db = test_db().await;
        let mut dept = input("Support", "Kim");
        dept.no_of_ongoing_projects = 4;
        let id = db.create_department(&dept).await.unwrap();

        let replacement = input("Customer Care", "Jo");
        db.update_department(id, &replacement).await.unwrap();

        let stored = db.get_department(id).await.unwrap().unwrap();
        assert_eq!(stored.department_name, "Customer Care");
        assert_eq!(stored.respective_manager, "Jo");
        assert_eq!(stored.no_of_ongoing_projects, 0);
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let db = test_db().await;
        let id = db.create_department(&input("Legal", "Sam")).await.unwrap();

        db.delete_department(id).await.unwrap();

        assert!(db.get_department(id).await.unwrap().is_none());
        // Deleting again is not an error.
        db.delete_department(id).await.unwrap();
    }
}
