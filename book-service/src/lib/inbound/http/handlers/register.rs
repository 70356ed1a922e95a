use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::UserName;
use crate::inbound::http::router::AppState;
use crate::inbound::http::validation::FieldViolation;
use crate::inbound::http::validation::Violations;

pub async fn register_user(
    State(state): State<AppState>,
    Json(body): Json<RegisterUserRequest>,
) -> Result<ApiSuccess<RegisterUserResponseData>, ApiError> {
    let command = body.try_into_command().map_err(ApiError::Validation)?;

    state
        .user_service
        .register_user(command)
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::CREATED,
                RegisterUserResponseData {
                    message: "User registered successfully".to_string(),
                },
            )
        })
}

/// HTTP request body for registering a user (raw JSON)
///
/// Every field is optional at the deserialization layer so that missing
/// fields surface as validation errors instead of body-parse failures.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterUserRequest {
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
}

impl RegisterUserRequest {
    /// Field rules, in order: name non-empty, email non-empty and
    /// well-formed, password non-empty. Every failing field is reported.
    fn try_into_command(self) -> Result<RegisterUserCommand, Vec<FieldViolation>> {
        let mut violations = Violations::new();

        let name = violations.capture("name", UserName::new(self.name.unwrap_or_default()));
        let email = violations.capture("email", EmailAddress::new(self.email.unwrap_or_default()));
        let password = violations.require("password", self.password);

        match (name, email, password) {
            (Some(name), Some(email), Some(password)) => Ok(RegisterUserCommand {
                name,
                email,
                password,
            }),
            _ => Err(violations.into_inner()),
        }
    }
}

/// Response body does not echo the user back; in particular the password
/// and its hash never leave the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterUserResponseData {
    pub message: String,
}
