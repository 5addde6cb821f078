// ABOUTME: User authentication route handlers for registration and login
// ABOUTME: Provides REST endpoints for account creation and credential checks
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Authentication routes for user management
//!
//! This module handles user registration and login. Handlers are thin
//! wrappers that delegate business logic to [`AuthService`].

use crate::constants::error_messages;
use crate::errors::{AppError, AppResult};
use crate::models::User;
use crate::server::ServerResources;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// User registration request
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    /// Desired login name; required
    pub username: Option<String>,
    /// Plaintext password; required
    pub password: Option<String>,
}

/// User login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Login name; required
    pub username: Option<String>,
    /// Plaintext password; required
    pub password: Option<String>,
}

/// User info for auth responses
#[derive(Debug, Serialize, Deserialize)]
pub struct UserInfo {
    /// User id
    pub id: String,
    /// Login name
    pub username: String,
}

/// Shared response shape for register and login
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Always `true` on the success path
    pub success: bool,
    /// Human-readable outcome description
    pub message: String,
    /// Signed bearer token with a fixed expiry
    pub token: String,
    /// The authenticated user
    pub user: UserInfo,
}

/// Authentication service for business logic
#[derive(Clone)]
pub struct AuthService {
    resources: Arc<ServerResources>,
}

impl AuthService {
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Handle user registration
    ///
    /// # Errors
    /// Returns a conflict error if the username is taken, or a database
    /// error if persistence fails
    pub async fn register(&self, username: String, password: String) -> AppResult<AuthResponse> {
        tracing::info!("User registration attempt for username: {}", username);

        // Hash password
        let password_hash = bcrypt::hash(&password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        // Create user; the store rejects duplicate usernames
        let user = User::new(username.clone(), password_hash);
        let user_id = self.resources.database.create_user(&user).await?;

        let token = self
            .resources
            .auth_manager
            .generate_token(&user)
            .map_err(|e| AppError::internal(format!("Token generation failed: {e}")))?;

        tracing::info!("User registered successfully: {} ({})", username, user_id);

        Ok(AuthResponse {
            success: true,
            message: "User registered successfully".into(),
            token,
            user: UserInfo {
                id: user_id.to_string(),
                username,
            },
        })
    }

    /// Handle user login
    ///
    /// # Errors
    /// Returns an auth error when the username is unknown or the password
    /// does not match; both cases report the same message
    pub async fn login(&self, username: String, password: String) -> AppResult<AuthResponse> {
        tracing::info!("User login attempt for username: {}", username);

        // Get user from database
        let user = self
            .resources
            .database
            .get_user_by_username(&username)
            .await?
            .ok_or_else(|| AppError::auth_invalid(error_messages::INVALID_CREDENTIALS))?;

        // Verify password using spawn_blocking to avoid blocking the async executor
        let password_hash = user.password_hash.clone();
        let is_valid =
            tokio::task::spawn_blocking(move || bcrypt::verify(&password, &password_hash))
                .await
                .map_err(|e| AppError::internal(format!("Password verification task failed: {e}")))?
                .map_err(|e| AppError::internal(format!("Password verification error: {e}")))?;

        if !is_valid {
            tracing::warn!("Invalid password for user: {}", username);
            return Err(AppError::auth_invalid(error_messages::INVALID_CREDENTIALS));
        }

        let token = self
            .resources
            .auth_manager
            .generate_token(&user)
            .map_err(|e| AppError::internal(format!("Token generation failed: {e}")))?;

        tracing::info!("User logged in successfully: {} ({})", username, user.id);

        Ok(AuthResponse {
            success: true,
            message: "Login successful".into(),
            token,
            user: UserInfo {
                id: user.id.to_string(),
                username: user.username,
            },
        })
    }
}

/// Authentication routes handler
pub struct AuthRoutes;

impl AuthRoutes {
    /// Create all authentication routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/auth/register", post(Self::handle_register))
            .route("/api/auth/login", post(Self::handle_login))
            .with_state(resources)
    }

    /// Reject requests missing username or password
    fn required_credentials(
        username: Option<String>,
        password: Option<String>,
    ) -> AppResult<(String, String)> {
        match (username, password) {
            (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => Ok((u, p)),
            _ => Err(AppError::missing_field(error_messages::MISSING_CREDENTIALS)),
        }
    }

    /// Handle POST /api/auth/register
    async fn handle_register(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<RegisterRequest>,
    ) -> Result<Response, AppError> {
        let (username, password) = Self::required_credentials(body.username, body.password)?;

        let response = AuthService::new(resources)
            .register(username, password)
            .await?;

        Ok((StatusCode::CREATED, Json(response)).into_response())
    }

    /// Handle POST /api/auth/login
    async fn handle_login(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<LoginRequest>,
    ) -> Result<Response, AppError> {
        let (username, password) = Self::required_credentials(body.username, body.password)?;

        let response = AuthService::new(resources).login(username, password).await?;

        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
