// ABOUTME: Booking and availability database operations
// ABOUTME: Implements slot filtering and the transactional booking overlap check

use super::Database;
use crate::constants::error_messages;
use crate::errors::{AppError, AppResult};
use crate::models::{Booking, NewBooking};
use chrono::Utc;
use sqlx::{Row, SqliteConnection};
use std::collections::HashSet;

impl Database {
    /// Create the bookings and available_slots tables
    ///
    /// # Errors
    ///
    /// Returns an error if table or index creation fails
    pub(super) async fn migrate_bookings(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS available_slots (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                staff_id INTEGER NOT NULL,
                date TEXT NOT NULL,
                time_slot TEXT NOT NULL,
                UNIQUE (staff_id, date, time_slot)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_available_slots_staff_date ON available_slots(staff_id, date)",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS bookings (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                customer_id INTEGER NOT NULL,
                service_id INTEGER NOT NULL,
                staff_id INTEGER NOT NULL,
                booking_date TEXT NOT NULL,
                start_time TEXT NOT NULL,
                end_time TEXT NOT NULL,
                notes TEXT,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_bookings_staff_date ON bookings(staff_id, booking_date)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Publish an opening for a staff member on a date
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn publish_slot(&self, staff_id: i64, date: &str, time_slot: &str) -> AppResult<()> {
        sqlx::query("INSERT INTO available_slots (staff_id, date, time_slot) VALUES (?, ?, ?)")
            .bind(staff_id)
            .bind(date)
            .bind(time_slot)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Compute the free slots for a staff member on a date.
    ///
    /// Published slots are returned in publication order, minus any slot
    /// whose time equals a booked start time. A slot is dropped only on that
    /// exact start-time match; a booking that merely overlaps a slot's
    /// interval does not filter it.
    ///
    /// # Errors
    ///
    /// Returns an error if either query fails
    pub async fn get_available_slots(&self, staff_id: i64, date: &str) -> AppResult<Vec<String>> {
        let published = self.get_published_slots(staff_id, date).await?;
        let booked: HashSet<String> = self
            .get_booked_start_times(staff_id, date)
            .await?
            .into_iter()
            .collect();

        Ok(published
            .into_iter()
            .filter(|slot| !booked.contains(slot))
            .collect())
    }

    /// Fetch all published slots for a staff member on a date, in
    /// publication order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_published_slots(&self, staff_id: i64, date: &str) -> AppResult<Vec<String>> {
        let slots = sqlx::query_scalar::<_, String>(
            "SELECT time_slot FROM available_slots WHERE staff_id = ? AND date = ? ORDER BY id",
        )
        .bind(staff_id)
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(slots)
    }

    /// Fetch the start times of all bookings for a staff member on a date
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_booked_start_times(&self, staff_id: i64, date: &str) -> AppResult<Vec<String>> {
        let times = sqlx::query_scalar::<_, String>(
            "SELECT start_time FROM bookings WHERE staff_id = ? AND booking_date = ?",
        )
        .bind(staff_id)
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(times)
    }

    /// Create a booking, enforcing the no-overlap invariant.
    ///
    /// The conflict check and the insert run inside one `BEGIN IMMEDIATE`
    /// transaction. The write lock is taken before the check, so two
    /// concurrent requests for the same slot serialize and at most one of
    /// them inserts. The transaction rolls back when dropped uncommitted,
    /// so a request cancelled mid-flight (client disconnect) cannot return
    /// a connection to the pool with the write lock still held.
    ///
    /// # Errors
    ///
    /// Returns a conflict error if an existing booking for the same staff
    /// member and date overlaps the requested interval or starts at the
    /// same time, or a database error if any statement fails
    pub async fn create_booking(&self, booking: &NewBooking) -> AppResult<i64> {
        let mut tx = self.pool.begin_with("BEGIN IMMEDIATE").await?;

        let id = Self::check_and_insert(&mut *tx, booking).await?;

        tx.commit().await?;

        tracing::info!(
            "Booking {} created for staff {} on {} at {}",
            id,
            booking.staff_id,
            booking.booking_date,
            booking.start_time
        );

        Ok(id)
    }

    /// Run the overlap check and the insert on the transaction's connection
    async fn check_and_insert(conn: &mut SqliteConnection, booking: &NewBooking) -> AppResult<i64> {
        // Two intervals [a, b) and [c, d) overlap when a < d and b > c.
        // An exact start-time match is rejected as well, which also covers
        // zero-length intervals the range test would let through.
        let conflicts = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM bookings
            WHERE staff_id = ? AND booking_date = ?
              AND ((start_time < ? AND end_time > ?) OR start_time = ?)
            ",
        )
        .bind(booking.staff_id)
        .bind(&booking.booking_date)
        .bind(&booking.end_time)
        .bind(&booking.start_time)
        .bind(&booking.start_time)
        .fetch_one(&mut *conn)
        .await?;

        if conflicts > 0 {
            return Err(AppError::conflict(error_messages::SLOT_ALREADY_BOOKED));
        }

        let result = sqlx::query(
            r"
            INSERT INTO bookings
                (customer_id, service_id, staff_id, booking_date, start_time, end_time, notes, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(booking.customer_id)
        .bind(booking.service_id)
        .bind(booking.staff_id)
        .bind(&booking.booking_date)
        .bind(&booking.start_time)
        .bind(&booking.end_time)
        .bind(&booking.notes)
        .bind(Utc::now().to_rfc3339())
        .execute(&mut *conn)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Fetch a booking by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row cannot be decoded
    pub async fn get_booking(&self, id: i64) -> AppResult<Option<Booking>> {
        let row = sqlx::query(
            r"
            SELECT id, customer_id, service_id, staff_id, booking_date,
                   start_time, end_time, notes, created_at
            FROM bookings WHERE id = ?
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| Self::row_to_booking(&r)).transpose()
    }

    fn row_to_booking(row: &sqlx::sqlite::SqliteRow) -> AppResult<Booking> {
        let created_at_text: String = row.try_get("created_at")?;
        let created_at = chrono::DateTime::parse_from_rfc3339(&created_at_text)
            .map_err(|e| AppError::database(format!("Invalid booking timestamp in store: {e}")))?
            .with_timezone(&Utc);

        Ok(Booking {
            id: row.try_get("id")?,
            customer_id: row.try_get("customer_id")?,
            service_id: row.try_get("service_id")?,
            staff_id: row.try_get("staff_id")?,
            booking_date: row.try_get("booking_date")?,
            start_time: row.try_get("start_time")?,
            end_time: row.try_get("end_time")?,
            notes: row.try_get("notes")?,
            created_at,
        })
    }

    /// Count bookings for a staff member on a date
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn count_bookings(&self, staff_id: i64, date: &str) -> AppResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM bookings WHERE staff_id = ? AND booking_date = ?",
        )
        .bind(staff_id)
        .bind(date)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}
