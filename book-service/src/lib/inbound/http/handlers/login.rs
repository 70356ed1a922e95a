use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::inbound::http::validation::FieldViolation;
use crate::inbound::http::validation::Violations;

pub async fn login_user(
    State(state): State<AppState>,
    Json(body): Json<LoginUserRequest>,
) -> Result<ApiSuccess<LoginUserResponseData>, ApiError> {
    let (email, password) = body.try_into_credentials().map_err(ApiError::Validation)?;

    // Unknown email and wrong password fail identically inside the service
    let user = state
        .user_service
        .authenticate_user(&email, &password)
        .await
        .map_err(ApiError::from)?;

    let token = state
        .token_issuer
        .issue(&user.id.to_string())
        .map_err(|e| ApiError::InternalServerError(format!("Token generation failed: {}", e)))?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginUserResponseData { token },
    ))
}

/// HTTP request body for logging in (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginUserRequest {
    email: Option<String>,
    password: Option<String>,
}

impl LoginUserRequest {
    fn try_into_credentials(self) -> Result<(String, String), Vec<FieldViolation>> {
        let mut violations = Violations::new();

        let email = violations.require("email", self.email);
        let password = violations.require("password", self.password);

        match (email, password) {
            (Some(email), Some(password)) => Ok((email, password)),
            _ => Err(violations.into_inner()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginUserResponseData {
    pub token: String,
}
