// ABOUTME: Library root for the salon booking server
// ABOUTME: Exposes authentication, database, route, and configuration modules
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Salon Booking Server
//!
//! A booking management backend for a salon scheduling application.
//! Provides user authentication, a read-only service/staff catalog,
//! availability computation, and conflict-checked booking creation over
//! an HTTP/JSON API backed by SQLite.

/// JWT-based authentication and token management
pub mod auth;
/// Environment-based configuration
pub mod config;
/// Shared constants for limits, defaults, and error messages
pub mod constants;
/// Database access layer and migrations
pub mod database;
/// Unified error handling and HTTP error responses
pub mod errors;
/// Logging configuration with structured output
pub mod logging;
/// Request middleware (authentication, CORS)
pub mod middleware;
/// Domain models shared across the database and route layers
pub mod models;
/// HTTP route handlers organized by domain
pub mod routes;
/// Server assembly and shared resources
pub mod server;
