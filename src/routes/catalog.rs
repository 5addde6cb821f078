// ABOUTME: Read-only catalog route handlers for services and staff listings
// ABOUTME: Provides unfiltered full-table reads backing the booking frontend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Catalog routes
//!
//! Unfiltered listings of services and staff. These fail only when the
//! store itself is unavailable.

use crate::errors::AppError;
use crate::server::ServerResources;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

/// Catalog routes handler
pub struct CatalogRoutes;

impl CatalogRoutes {
    /// Create all catalog routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/services", get(Self::handle_list_services))
            .route("/api/staff", get(Self::handle_list_staff))
            .with_state(resources)
    }

    /// Handle GET /api/services
    async fn handle_list_services(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let services = resources.database.list_services().await?;
        Ok(Json(services).into_response())
    }

    /// Handle GET /api/staff
    async fn handle_list_staff(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let staff = resources.database.list_staff().await?;
        Ok(Json(staff).into_response())
    }
}
