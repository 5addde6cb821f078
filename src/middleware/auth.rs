// ABOUTME: Bearer-token authentication middleware for mutating endpoints
// ABOUTME: Validates JWT tokens and resolves the requesting user from the store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::auth::{AuthManager, JwtValidationError};
use crate::database::Database;
use crate::errors::{AppError, AppResult, ErrorCode};
use std::sync::Arc;
use uuid::Uuid;

/// Authentication result with user context
#[derive(Debug, Clone)]
pub struct AuthResult {
    /// Authenticated user `ID`
    pub user_id: Uuid,
    /// Authenticated username
    pub username: String,
}

/// Middleware for bearer-token authentication
#[derive(Clone)]
pub struct AuthMiddleware {
    auth_manager: Arc<AuthManager>,
    database: Arc<Database>,
}

impl AuthMiddleware {
    /// Create new auth middleware
    #[must_use]
    pub const fn new(auth_manager: Arc<AuthManager>, database: Arc<Database>) -> Self {
        Self {
            auth_manager,
            database,
        }
    }

    /// Authenticate a request from its `Authorization` header value
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The header is missing or not a Bearer token
    /// - JWT token validation fails
    /// - The token's user no longer exists
    pub async fn authenticate_request(&self, auth_header: Option<&str>) -> AppResult<AuthResult> {
        let Some(auth_str) = auth_header else {
            tracing::warn!("Authentication failed: Missing authorization header");
            return Err(AppError::auth_required());
        };

        let Some(token) = auth_str.strip_prefix("Bearer ") else {
            tracing::warn!("Authentication failed: Invalid authorization header format");
            return Err(AppError::auth_invalid(
                "Invalid authorization header format - must be 'Bearer <token>'",
            ));
        };

        let claims = self
            .auth_manager
            .validate_token_detailed(token)
            .map_err(|e| match e {
                JwtValidationError::TokenExpired { .. } => {
                    AppError::new(ErrorCode::AuthExpired, e.to_string())
                }
                JwtValidationError::TokenMalformed { .. } => {
                    AppError::new(ErrorCode::AuthMalformed, e.to_string())
                }
                JwtValidationError::TokenInvalid { .. } => AppError::auth_invalid(e.to_string()),
            })?;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::auth_invalid("Invalid user ID in token"))?;

        // The token may outlive the account; confirm the user still exists.
        let user = self
            .database
            .get_user(user_id)
            .await?
            .ok_or_else(|| AppError::auth_invalid("Token user no longer exists"))?;

        tracing::debug!("JWT authentication successful for user: {}", user_id);

        Ok(AuthResult {
            user_id,
            username: user.username,
        })
    }
}
