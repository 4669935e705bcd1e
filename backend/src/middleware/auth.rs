//! Client key authorization middleware
//!
//! The mobile client identifies itself with a single shared key in a request
//! header. The check sits behind [`ClientAuthorizer`] so a real credential
//! scheme can replace it without touching the handlers.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::{AppError, AppResult};
use crate::AppState;

/// Decides whether a request may reach the forecast handlers
pub trait ClientAuthorizer: Send + Sync {
    fn authorize(&self, headers: &HeaderMap) -> AppResult<()>;
}

/// Exact-match check of one header against one configured value
#[derive(Clone, Debug)]
pub struct StaticKeyAuthorizer {
    header_name: String,
    expected: String,
}

impl StaticKeyAuthorizer {
    pub fn new(header_name: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            header_name: header_name.into(),
            expected: expected.into(),
        }
    }
}

impl ClientAuthorizer for StaticKeyAuthorizer {
    fn authorize(&self, headers: &HeaderMap) -> AppResult<()> {
        match headers.get(self.header_name.as_str()) {
            Some(value) if value.as_bytes() == self.expected.as_bytes() => Ok(()),
            Some(_) => Err(AppError::Unauthorized("Invalid Client Key".to_string())),
            None => Err(AppError::Unauthorized("Missing Client Key".to_string())),
        }
    }
}

/// Middleware rejecting requests the configured authorizer does not accept
pub async fn client_key_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if let Err(err) = state.authorizer.authorize(request.headers()) {
        tracing::debug!(path = %request.uri().path(), "Client key check failed");
        return err.into_response();
    }

    next.run(request).await
}
