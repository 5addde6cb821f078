// ABOUTME: Route module organization for salon booking HTTP endpoints
// ABOUTME: Provides centralized route definitions organized by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Route module for the salon booking server
//!
//! This module organizes all HTTP routes by domain. Each domain module
//! contains route definitions and thin handler functions that delegate to
//! the database and auth layers.

/// Authentication routes (register, login)
pub mod auth;
/// Availability routes (free slot computation)
pub mod availability;
/// Booking creation routes
pub mod bookings;
/// Read-only service and staff catalog routes
pub mod catalog;
/// Health check routes
pub mod health;

/// Authentication route handlers
pub use auth::AuthRoutes;
/// Authentication service
pub use auth::AuthService;
/// Login request payload
pub use auth::LoginRequest;
/// Registration request payload
pub use auth::RegisterRequest;
/// Shared auth response with token
pub use auth::AuthResponse;
/// User information in auth responses
pub use auth::UserInfo;
/// Availability route handlers
pub use availability::AvailabilityRoutes;
/// Booking route handlers
pub use bookings::BookingRoutes;
/// Catalog route handlers
pub use catalog::CatalogRoutes;
/// Health route handlers
pub use health::HealthRoutes;
