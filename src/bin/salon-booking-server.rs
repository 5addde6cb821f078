// ABOUTME: Server binary for the salon booking backend
// ABOUTME: Loads configuration, connects the store, and serves the HTTP API
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Salon Booking Server Binary
//!
//! This binary starts the salon booking HTTP API with user authentication
//! and database management. A store outage at startup is fatal.

use anyhow::Result;
use clap::Parser;
use salon_booking_server::{
    auth::AuthManager,
    config::environment::ServerConfig,
    database::Database,
    logging,
    server::{BookingServer, ServerResources},
};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "salon-booking-server")]
#[command(about = "Salon booking backend - authentication, catalog, availability, and bookings")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;

    // Override port if specified
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    // Initialize production logging
    logging::init_from_env()?;

    info!("Starting Salon Booking Server");
    info!("{}", config.summary());

    // Initialize database; an unreachable store here exits the process
    let database = Database::new(&config.database.url, config.database.max_connections).await?;
    info!("Database initialized successfully: {}", config.database.url);

    // Initialize authentication manager
    let auth_manager = AuthManager::new(
        config.auth.jwt_secret.as_bytes(),
        config.auth.jwt_expiry_hours,
    );
    info!("Authentication manager initialized");

    let resources = Arc::new(ServerResources::new(database, auth_manager, config));

    BookingServer::new(resources).run().await
}
