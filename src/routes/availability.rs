// ABOUTME: Availability route handlers computing free slots per staff member and date
// ABOUTME: Filters published openings against booked start times
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Availability routes
//!
//! Computes the free slots for a staff member on a date by subtracting
//! booked start times from the published openings.

use crate::errors::{AppError, AppResult};
use crate::server::ServerResources;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Query parameters for the available-slots endpoint
#[derive(Debug, Deserialize, Default)]
pub struct AvailableSlotsQuery {
    /// Staff member to look up; required
    #[serde(rename = "staffId")]
    pub staff_id: Option<i64>,
    /// Date in `YYYY-MM-DD` form; required
    pub date: Option<String>,
}

/// Response for the available-slots endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct AvailableSlotsResponse {
    /// Always `true` on the success path
    pub success: bool,
    /// Free slot start times, in publication order
    pub slots: Vec<String>,
}

/// Availability routes handler
pub struct AvailabilityRoutes;

impl AvailabilityRoutes {
    /// Create all availability routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/available-slots", get(Self::handle_available_slots))
            .with_state(resources)
    }

    /// Reject requests missing either query parameter
    fn required_params(query: AvailableSlotsQuery) -> AppResult<(i64, String)> {
        match (query.staff_id, query.date) {
            (Some(staff_id), Some(date)) if !date.is_empty() => Ok((staff_id, date)),
            _ => Err(AppError::missing_field("staffId and date are required")),
        }
    }

    /// Handle GET /api/available-slots
    async fn handle_available_slots(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<AvailableSlotsQuery>,
    ) -> Result<Response, AppError> {
        let (staff_id, date) = Self::required_params(query)?;

        let slots = resources
            .database
            .get_available_slots(staff_id, &date)
            .await?;

        Ok(Json(AvailableSlotsResponse {
            success: true,
            slots,
        })
        .into_response())
    }
}
