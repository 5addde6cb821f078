// ABOUTME: User management database operations
// ABOUTME: Handles user registration lookups and credential storage

use super::Database;
use crate::constants::error_messages;
use crate::errors::{AppError, AppResult};
use crate::models::User;
use chrono::{DateTime, Utc};
use sqlx::Row;
use uuid::Uuid;

impl Database {
    /// Create the users table
    ///
    /// # Errors
    ///
    /// Returns an error if table or index creation fails
    pub(super) async fn migrate_users(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                username TEXT UNIQUE NOT NULL,
                password_hash TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_users_username ON users(username)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Persist a new user
    ///
    /// # Errors
    ///
    /// Returns a conflict error if the username is already in use, or a
    /// database error if the insert fails
    pub async fn create_user(&self, user: &User) -> AppResult<Uuid> {
        // The UNIQUE constraint on username is the authoritative duplicate
        // check; a pre-read would race with concurrent registrations.
        let result = sqlx::query(
            r"
            INSERT INTO users (id, username, password_hash, created_at)
            VALUES (?, ?, ?, ?)
            ",
        )
        .bind(user.id.to_string())
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(user.created_at.to_rfc3339())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(user.id),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(AppError::conflict(error_messages::USERNAME_TAKEN))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Look up a user by username
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row cannot be decoded
    pub async fn get_user_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let row = sqlx::query("SELECT id, username, password_hash, created_at FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| Self::row_to_user(&r)).transpose()
    }

    /// Look up a user by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row cannot be decoded
    pub async fn get_user(&self, user_id: Uuid) -> AppResult<Option<User>> {
        let row = sqlx::query("SELECT id, username, password_hash, created_at FROM users WHERE id = ?")
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| Self::row_to_user(&r)).transpose()
    }

    fn row_to_user(row: &sqlx::sqlite::SqliteRow) -> AppResult<User> {
        let id_text: String = row.try_get("id")?;
        let id = Uuid::parse_str(&id_text)
            .map_err(|e| AppError::database(format!("Invalid user id in store: {e}")))?;

        let created_at_text: String = row.try_get("created_at")?;
        let created_at = DateTime::parse_from_rfc3339(&created_at_text)
            .map_err(|e| AppError::database(format!("Invalid user timestamp in store: {e}")))?
            .with_timezone(&Utc);

        Ok(User {
            id,
            username: row.try_get("username")?,
            password_hash: row.try_get("password_hash")?,
            created_at,
        })
    }
}
