use anyhow::{Context, Result};

use super::Database;
use crate::models::{non_blank, User, UserCredentials, UserInput};

const SELECT_USER: &str = r#"
    SELECT
        u.user_id,
        u.name,
        u.email,
        u.phone_no,
        u.dob,
        u.joining_date,
        u.department,
        d.department_name
    FROM users u
    LEFT JOIN department d ON u.department = d.id
"#;

impl Database {
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(&format!(
            "{SELECT_USER} ORDER BY u.name COLLATE NOCASE ASC, u.user_id ASC"
        ))
        .fetch_all(self.get_pool())
        .await
        .context("failed to list administrators")?;

        Ok(users)
    }

    pub async fn get_user(&self, id: i64) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!("{SELECT_USER} WHERE u.user_id = ?"))
            .bind(id)
            .fetch_optional(self.get_pool())
            .await
            .with_context(|| format!("failed to load administrator {id}"))?;

        Ok(user)
    }

    /// Administrators registered under `email`, lowest id first, with
    /// their stored password hashes.
    pub async fn find_credentials(&self, email: &str) -> Result<Vec<UserCredentials>> {
        let credentials = sqlx::query_as::<_, UserCredentials>(
            r#"
            SELECT
                u.user_id,
                u.name,
                u.email,
                u.phone_no,
                u.dob,
                u.joining_date,
                u.department,
                d.department_name,
                u.password_hash
            FROM users u
            LEFT JOIN department d ON u.department = d.id
            WHERE u.email = ?
            ORDER BY u.user_id ASC
            "#,
        )
        .bind(email)
        .fetch_all(self.get_pool())
        .await
        .context("failed to look up administrator credentials")?;

        Ok(credentials)
    }

    /// Insert an administrator. `password_hash` must already be hashed.
    pub async fn create_user(&self, user: &UserInput, password_hash: &str) -> Result<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO users (name, email, phone_no, dob, joining_date, department, password_hash)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING user_id
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(non_blank(&user.phone_no))
        .bind(user.dob)
        .bind(user.joining_date)
        .bind(user.department)
        .bind(password_hash)
        .fetch_one(self.get_pool())
        .await
        .context("failed to create administrator")?;

        Ok(id)
    }

    /// Replace an administrator's fields. The stored password hash is only
    /// overwritten when `password_hash` is given.
    pub async fn update_user(
        &self,
        id: i64,
        user: &UserInput,
        password_hash: Option<&str>,
    ) -> Result<()> {
        let query = match password_hash {
            Some(hash) => sqlx::query(
                r#"
                UPDATE users
                SET name = ?, email = ?, phone_no = ?, dob = ?, joining_date = ?,
                    department = ?, password_hash = ?
                WHERE user_id = ?
                "#,
            )
            .bind(&user.name)
            .bind(&user.email)
            .bind(non_blank(&user.phone_no))
            .bind(user.dob)
            .bind(user.joining_date)
            .bind(user.department)
            .bind(hash)
            .bind(id),
            None => sqlx::query(
                r#"
                UPDATE users
                SET name = ?, email = ?, phone_no = ?, dob = ?, joining_date = ?, department = ?
                WHERE user_id = ?
                "#,
            )
            .bind(&user.name)
            .bind(&user.email)
            .bind(non_blank(&user.phone_no))
            .bind(user.dob)
            .bind(user.joining_date)
            .bind(user.department)
            .bind(id),
        };

        query
            .execute(self.get_pool())
            .await
            .with_context(|| format!("failed to update administrator {id}"))?;

        Ok(())
    }

    pub async fn delete_user(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM users WHERE user_id = ?")
            .bind(id)
            .execute(self.get_pool())
            .await
            .with_context(|| format!("failed to delete administrator {id}"))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use crate::db::test_db;
    use crate::models::UserInput;

    fn input(name: &str, email: &str) -> UserInput {
        UserInput {
            name: name.to_string(),
            email: email.to_string(),
            phone_no: None,
            dob: None,
            joining_date: NaiveDate::from_ymd_opt(2020, 1, 6).unwrap(),
            department: None,
            password: None,
        }
    }

    async fn stored_hash(db: &crate::db::Database, id: i64) -> String {
        sqlx::query_scalar::<_, String>("SELECT password_hash FROM users WHERE user_id = ?")
            .bind(id)
            .fetch_one(db.get_pool())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn update_without_hash_keeps_the_stored_one() {
        let db = test_db().await;
        let id = db
            .create_user(&input("Ana", "ana@example.com"), "hash-one")
            .await
            .unwrap();

        let mut replacement = input("Ana Lopez", "ana@example.com");
        replacement.phone_no = Some("555-0199".to_string());
        db.update_user(id, &replacement, None).await.unwrap();

        let stored = db.get_user(id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Ana Lopez");
        assert_eq!(stored.phone_no.as_deref(), Some("555-0199"));
        assert_eq!(stored_hash(&db, id).await, "hash-one");
    }

    #[tokio::test]
    async fn update_with_hash_replaces_it() {
        let db = test_db().await;
        let id = db
            .create_user(&input("Ben", "ben@example.com"), "hash-one")
            .await
            .unwrap();

        db.update_user(id, &input("Ben", "ben@example.com"), Some("hash-two"))
            .await
            .unwrap();

        assert_eq!(stored_hash(&db, id).await, "hash-two");
    }

    #[tokio::test]
    async fn credentials_are_ordered_by_id() {
        let db = test_db().await;
        let first = db
            .create_user(&input("Cy", "shared@example.com"), "a")
            .await
            .unwrap();
        let second = db
            .create_user(&input("Di", "shared@example.com"), "b")
            .await
            .unwrap();
        db.create_user(&input("Ed", "other@example.com"), "c")
            .await
            .unwrap();

        let found = db.find_credentials("shared@example.com").await.unwrap();
        let ids: Vec<i64> = found.iter().map(|c| c.user.user_id).collect();
        assert_eq!(ids, vec![first, second]);
        assert_eq!(found[0].password_hash, "a");
    }

    #[tokio::test]
    async fn list_sorted_and_delete_removes() {
        let db = test_db().await;
        let zed = db.create_user(&input("Zed", "z@example.com"), "h").await.unwrap();
        db.create_user(&input("ami", "a@example.com"), "h").await.unwrap();
        db.create_user(&input("Bo", "b@example.com"), "h").await.unwrap();

        let names: Vec<String> = db
            .list_users()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.name)
            .collect();
        assert_eq!(names, vec!["ami", "Bo", "Zed"]);

        db.delete_user(zed).await.unwrap();
        assert!(db.get_user(zed).await.unwrap().is_none());
    }
}
