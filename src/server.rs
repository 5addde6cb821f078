// ABOUTME: Server assembly - shared resources, router construction, and the listen loop
// ABOUTME: Wires route modules, middleware layers, and the bound TCP listener together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Server resources and HTTP server assembly
//!
//! All shared handles (database pool, auth manager, middleware) live in a
//! single [`ServerResources`] value that is injected into route handlers as
//! axum state. No module-level singletons exist.

use crate::auth::AuthManager;
use crate::config::environment::ServerConfig;
use crate::database::Database;
use crate::middleware::{setup_cors, AuthMiddleware};
use crate::routes::{
    AuthRoutes, AvailabilityRoutes, BookingRoutes, CatalogRoutes, HealthRoutes,
};
use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared handles injected into every route handler
pub struct ServerResources {
    /// Database pool handle
    pub database: Arc<Database>,
    /// Token generation and validation
    pub auth_manager: Arc<AuthManager>,
    /// Bearer-token authentication for protected endpoints
    pub auth_middleware: AuthMiddleware,
    /// Active configuration
    pub config: ServerConfig,
}

impl ServerResources {
    /// Bundle the server's shared state
    #[must_use]
    pub fn new(database: Database, auth_manager: AuthManager, config: ServerConfig) -> Self {
        let database = Arc::new(database);
        let auth_manager = Arc::new(auth_manager);
        let auth_middleware = AuthMiddleware::new(Arc::clone(&auth_manager), Arc::clone(&database));

        Self {
            database,
            auth_manager,
            auth_middleware,
            config,
        }
    }
}

/// The HTTP booking server
pub struct BookingServer {
    resources: Arc<ServerResources>,
}

impl BookingServer {
    /// Create a server over prepared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Build the complete application router with all routes and layers
    #[must_use]
    pub fn router(resources: Arc<ServerResources>) -> Router {
        let cors = setup_cors(&resources.config);

        Router::new()
            .merge(AuthRoutes::routes(Arc::clone(&resources)))
            .merge(CatalogRoutes::routes(Arc::clone(&resources)))
            .merge(AvailabilityRoutes::routes(Arc::clone(&resources)))
            .merge(BookingRoutes::routes(Arc::clone(&resources)))
            .merge(HealthRoutes::routes(resources))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Bind the configured port and serve requests until shutdown
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot bind or the server fails
    pub async fn run(self) -> Result<()> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.resources.config.http_port));
        let listener = tokio::net::TcpListener::bind(addr).await?;

        tracing::info!("HTTP server listening on {}", addr);

        let app = Self::router(self.resources);
        axum::serve(listener, app).await?;

        Ok(())
    }
}
