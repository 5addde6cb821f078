// ABOUTME: Domain models for users, catalog entries, slots, and bookings
// ABOUTME: Shared between the database layer and the HTTP route handlers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Core data models for the salon booking server

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: Uuid,
    /// Unique login name
    pub username: String,
    /// Bcrypt hash of the user's password; never serialized to clients
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a fresh id
    #[must_use]
    pub fn new(username: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            password_hash,
            created_at: Utc::now(),
        }
    }
}

/// A bookable salon service
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Service {
    /// Unique identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// How long an appointment for this service takes
    pub duration_minutes: i64,
    /// Price in cents
    pub price_cents: i64,
}

/// A staff member who can be booked
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Staff {
    /// Unique identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Optional role or specialty
    pub role: Option<String>,
}

/// A confirmed booking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    /// Unique identifier
    pub id: i64,
    /// Customer who made the booking
    pub customer_id: i64,
    /// Booked service
    pub service_id: i64,
    /// Staff member performing the service
    pub staff_id: i64,
    /// Date in `YYYY-MM-DD` form
    pub booking_date: String,
    /// Interval start in `HH:MM` form, inclusive
    pub start_time: String,
    /// Interval end in `HH:MM` form, exclusive
    pub end_time: String,
    /// Free-form customer notes
    pub notes: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Parameters for creating a booking, after request validation
#[derive(Debug, Clone)]
pub struct NewBooking {
    /// Customer who is booking
    pub customer_id: i64,
    /// Requested service
    pub service_id: i64,
    /// Requested staff member
    pub staff_id: i64,
    /// Date in `YYYY-MM-DD` form
    pub booking_date: String,
    /// Interval start in `HH:MM` form, inclusive
    pub start_time: String,
    /// Interval end in `HH:MM` form, exclusive
    pub end_time: String,
    /// Free-form customer notes
    pub notes: Option<String>,
}
