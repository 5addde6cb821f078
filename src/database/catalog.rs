// ABOUTME: Read-only catalog queries for services and staff
// ABOUTME: Also provides seeding helpers used by tests and demo data

use super::Database;
use crate::errors::AppResult;
use crate::models::{Service, Staff};

impl Database {
    /// Create the services and staff tables
    ///
    /// # Errors
    ///
    /// Returns an error if table creation fails
    pub(super) async fn migrate_catalog(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS services (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                description TEXT,
                duration_minutes INTEGER NOT NULL,
                price_cents INTEGER NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS staff (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                role TEXT
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// List every service, in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn list_services(&self) -> AppResult<Vec<Service>> {
        let services = sqlx::query_as::<_, Service>(
            "SELECT id, name, description, duration_minutes, price_cents FROM services ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(services)
    }

    /// List every staff member, in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn list_staff(&self) -> AppResult<Vec<Staff>> {
        let staff = sqlx::query_as::<_, Staff>("SELECT id, name, role FROM staff ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(staff)
    }

    /// Insert a service row, returning its id
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn create_service(
        &self,
        name: &str,
        description: Option<&str>,
        duration_minutes: i64,
        price_cents: i64,
    ) -> AppResult<i64> {
        let result = sqlx::query(
            "INSERT INTO services (name, description, duration_minutes, price_cents) VALUES (?, ?, ?, ?)",
        )
        .bind(name)
        .bind(description)
        .bind(duration_minutes)
        .bind(price_cents)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Insert a staff row, returning its id
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn create_staff(&self, name: &str, role: Option<&str>) -> AppResult<i64> {
        let result = sqlx::query("INSERT INTO staff (name, role) VALUES (?, ?)")
            .bind(name)
            .bind(role)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }
}
