// ABOUTME: Booking creation route handlers with conflict-checked persistence
// ABOUTME: Validates request fields, authenticates the caller, and delegates to the store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Booking routes
//!
//! Creating a booking requires a valid bearer token. The overlap invariant
//! is enforced inside the database layer's transactional check-and-insert.

use crate::errors::{AppError, AppResult};
use crate::models::NewBooking;
use crate::server::ServerResources;
use axum::{
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Booking creation request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBookingRequest {
    /// Customer making the booking; required
    pub customer_id: Option<i64>,
    /// Requested service; required
    pub service_id: Option<i64>,
    /// Requested staff member; required
    pub staff_id: Option<i64>,
    /// Date in `YYYY-MM-DD` form; required
    pub booking_date: Option<String>,
    /// Interval start in `HH:MM` form; required
    pub start_time: Option<String>,
    /// Interval end in `HH:MM` form; required
    pub end_time: Option<String>,
    /// Free-form notes; optional
    pub notes: Option<String>,
}

/// Booking creation response
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateBookingResponse {
    /// Always `true` on the success path
    pub success: bool,
    /// Human-readable outcome description
    pub message: String,
}

/// Booking routes handler
pub struct BookingRoutes;

impl BookingRoutes {
    /// Create all booking routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/bookings", post(Self::handle_create))
            .with_state(resources)
    }

    /// Validate the request body, naming every missing field
    fn validate(body: CreateBookingRequest) -> AppResult<NewBooking> {
        let mut missing = Vec::new();

        if body.customer_id.is_none() {
            missing.push("customer_id");
        }
        if body.service_id.is_none() {
            missing.push("service_id");
        }
        if body.staff_id.is_none() {
            missing.push("staff_id");
        }
        if body.booking_date.as_deref().unwrap_or_default().is_empty() {
            missing.push("booking_date");
        }
        if body.start_time.as_deref().unwrap_or_default().is_empty() {
            missing.push("start_time");
        }
        if body.end_time.as_deref().unwrap_or_default().is_empty() {
            missing.push("end_time");
        }

        if !missing.is_empty() {
            return Err(AppError::missing_field(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        // Unwraps above were all checked; reconstruct the validated booking
        Ok(NewBooking {
            customer_id: body.customer_id.unwrap_or_default(),
            service_id: body.service_id.unwrap_or_default(),
            staff_id: body.staff_id.unwrap_or_default(),
            booking_date: body.booking_date.unwrap_or_default(),
            start_time: body.start_time.unwrap_or_default(),
            end_time: body.end_time.unwrap_or_default(),
            notes: body.notes,
        })
    }

    /// Handle POST /api/bookings
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(body): Json<CreateBookingRequest>,
    ) -> Result<Response, AppError> {
        let auth_header = headers.get("authorization").and_then(|h| h.to_str().ok());
        let auth = resources
            .auth_middleware
            .authenticate_request(auth_header)
            .await?;

        let booking = Self::validate(body)?;

        tracing::debug!(
            "Booking request from user {} for staff {} on {} at {}-{}",
            auth.user_id,
            booking.staff_id,
            booking.booking_date,
            booking.start_time,
            booking.end_time
        );

        resources.database.create_booking(&booking).await?;

        Ok(Json(CreateBookingResponse {
            success: true,
            message: "Booking created successfully".into(),
        })
        .into_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> CreateBookingRequest {
        CreateBookingRequest {
            customer_id: Some(1),
            service_id: Some(2),
            staff_id: Some(3),
            booking_date: Some("2024-01-01".into()),
            start_time: Some("10:00".into()),
            end_time: Some("11:00".into()),
            notes: None,
        }
    }

    #[test]
    fn test_validate_accepts_complete_request() {
        let booking = BookingRoutes::validate(full_request()).unwrap();
        assert_eq!(booking.staff_id, 3);
        assert_eq!(booking.start_time, "10:00");
    }

    #[test]
    fn test_validate_names_missing_fields() {
        let mut request = full_request();
        request.staff_id = None;
        request.end_time = None;

        let err = BookingRoutes::validate(request).unwrap_err();
        assert!(err.message.contains("staff_id"));
        assert!(err.message.contains("end_time"));
        assert!(!err.message.contains("customer_id"));
    }

    #[test]
    fn test_validate_rejects_empty_strings() {
        let mut request = full_request();
        request.booking_date = Some(String::new());

        let err = BookingRoutes::validate(request).unwrap_err();
        assert!(err.message.contains("booking_date"));
    }
}
