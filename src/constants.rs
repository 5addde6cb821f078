// ABOUTME: Centralized constants for limits, defaults, and user-facing error messages
// ABOUTME: Keeps magic numbers and repeated strings out of the service and route layers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Shared constants used across the server

/// Resource limits
pub mod limits {
    /// JWT token lifetime in hours
    pub const JWT_EXPIRY_HOURS: i64 = 1;

    /// Maximum concurrent connections in the database pool
    pub const DB_MAX_CONNECTIONS: u32 = 10;
}

/// Development-only defaults, each overridable via environment
pub mod defaults {
    /// Default HTTP listen port
    pub const HTTP_PORT: u16 = 4000;

    /// Default database location
    pub const DATABASE_URL: &str = "sqlite:./data/salon_booking.db";

    /// Default JWT signing secret. Never acceptable in production;
    /// `ServerConfig::from_env` warns when it is left in place.
    pub const JWT_SECRET: &str = "dev_only_jwt_secret_change_me";

    /// Default allowed CORS origin (the development frontend)
    pub const CORS_ALLOWED_ORIGINS: &str = "http://localhost:3000";
}

/// User-facing error messages
pub mod error_messages {
    /// Register/login request missing username or password
    pub const MISSING_CREDENTIALS: &str = "Username and password are required";

    /// Login rejected; deliberately identical for unknown user and bad password
    pub const INVALID_CREDENTIALS: &str = "Invalid username or password";

    /// Registration rejected because the username exists
    pub const USERNAME_TAKEN: &str = "Username is already taken";

    /// Booking rejected by the overlap check
    pub const SLOT_ALREADY_BOOKED: &str = "Slot already booked";
}

/// Service identification for logging
pub mod service_names {
    /// Canonical service name
    pub const SALON_BOOKING_SERVER: &str = "salon-booking-server";
}
