use std::sync::Arc;

use axum::{
    extract::Request,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use standard_error::{StandardError, Status};

use crate::{conf::settings, pkg::internal::auth::Claims, prelude::Result};

/// Gate for the admin-only routes. Rejects before any handler or database
/// work happens.
pub async fn ensure_admin(headers: HeaderMap, mut request: Request, next: Next) -> Result<Response> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| {
            tracing::warn!("bearer token missing, authentication denied");
            StandardError::new("ERR-AUTH-001: missing bearer token")
                .code(StatusCode::UNAUTHORIZED)
        })?;
    let claims = Claims::verify(token, &settings.secret_key)?;
    if !claims.is_admin {
        tracing::warn!("user {} lacks the admin claim, denied", claims.username);
        return Err(StandardError::new("ERR-AUTH-002: admin privileges required")
            .code(StatusCode::UNAUTHORIZED));
    }
    request.extensions_mut().insert(Arc::new(claims));
    Ok(next.run(request).await)
}
