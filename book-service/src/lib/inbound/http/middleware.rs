use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type to store the authenticated caller in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub name: String,
}

/// Middleware guarding protected routes.
///
/// Extracts the bearer token, verifies the signature, resolves the embedded
/// identity against the user store, and attaches the caller to the request.
/// A token whose subject no longer resolves to a stored user is rejected;
/// a request never proceeds with an unresolved identity.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    let claims = state.token_issuer.verify(token).map_err(|e| {
        tracing::warn!(error = %e, "Token verification failed");
        ApiError::Unauthenticated.into_response()
    })?;

    let user_id = UserId::from_string(&claims.sub).map_err(|e| {
        tracing::warn!(error = %e, "Token subject is not a valid user id");
        ApiError::Unauthenticated.into_response()
    })?;

    let user = state
        .user_service
        .get_user(&user_id)
        .await
        .map_err(|e| match e {
            UserError::NotFound(_) => {
                tracing::warn!(user_id = %user_id, "Token subject does not resolve to a user");
                ApiError::Unauthenticated.into_response()
            }
            other => ApiError::from(other).into_response(),
        })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id: user.id,
        name: user.name.as_str().to_string(),
    });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::Unauthenticated.into_response()
        })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        tracing::warn!("Authorization header is not valid UTF-8");
        ApiError::Unauthenticated.into_response()
    })?;

    // A header without the scheme prefix is rejected outright rather than
    // passed downstream as-is
    auth_str.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Authorization header is not a bearer credential");
        ApiError::Unauthenticated.into_response()
    })
}
