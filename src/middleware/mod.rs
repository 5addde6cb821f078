// ABOUTME: Middleware module organization for request processing
// ABOUTME: Exposes authentication and CORS middleware used by the router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Request middleware for the salon booking server

/// Bearer-token authentication middleware
pub mod auth;
/// Cross-origin resource sharing configuration
pub mod cors;

pub use auth::{AuthMiddleware, AuthResult};
pub use cors::setup_cors;
