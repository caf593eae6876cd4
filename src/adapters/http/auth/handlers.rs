//! HTTP handlers for authentication endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use super::dto::{CredentialsRequest, LoginResponse, UserResponse};
use crate::adapters::http::error::{account_error, auth_error};
use crate::adapters::http::middleware::{bearer_token, RequireAuth};
use crate::application::handlers::auth::{
    LoginCommand, LoginHandler, LogoutHandler, RegisterUserCommand, RegisterUserHandler,
};

#[derive(Clone)]
pub struct AuthHandlers {
    login_handler: Arc<LoginHandler>,
    logout_handler: Arc<LogoutHandler>,
    register_handler: Arc<RegisterUserHandler>,
}

impl AuthHandlers {
    pub fn new(
        login_handler: Arc<LoginHandler>,
        logout_handler: Arc<LogoutHandler>,
        register_handler: Arc<RegisterUserHandler>,
    ) -> Self {
        Self {
            login_handler,
            logout_handler,
            register_handler,
        }
    }
}

/// POST /api/auth/login
pub async fn login(
    State(handlers): State<AuthHandlers>,
    Json(req): Json<CredentialsRequest>,
) -> Response {
    let cmd = LoginCommand {
        email: req.email,
        password: req.password,
    };

    match handlers.login_handler.handle(cmd).await {
        Ok(result) => (
            StatusCode::OK,
            Json(LoginResponse {
                token: result.token,
                user_id: result.user.id.to_string(),
                email: result.user.email,
            }),
        )
            .into_response(),
        Err(e) => auth_error(e),
    }
}

/// POST /api/auth/logout
pub async fn logout(
    State(handlers): State<AuthHandlers>,
    RequireAuth(user): RequireAuth,
    headers: HeaderMap,
) -> Response {
    let Some(token) = bearer_token(&headers) else {
        return StatusCode::NO_CONTENT.into_response();
    };

    match handlers.logout_handler.handle(token).await {
        Ok(()) => {
            tracing::info!(user_id = %user.id, "User logged out");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => auth_error(e),
    }
}

/// POST /api/auth/users - an authenticated user registers a colleague
pub async fn register_user(
    State(handlers): State<AuthHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<CredentialsRequest>,
) -> Response {
    let cmd = RegisterUserCommand {
        email: req.email,
        password: req.password,
    };

    match handlers.register_handler.handle(cmd).await {
        Ok(account) => {
            tracing::info!(by = %user.id, new_user = %account.id(), "Account created");
            (StatusCode::CREATED, Json(UserResponse::from(&account))).into_response()
        }
        Err(e) => account_error(e),
    }
}
