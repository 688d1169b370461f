use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dto::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No member id present in the session.
    ///
    /// The request hit an endpoint that requires a logged-in member but the
    /// session carries no member id. Results in a 401 Unauthorized response.
    #[error("No member in session")]
    NotLoggedIn,

    /// Session references a member id that no longer exists.
    ///
    /// A stale session can outlive its member row. Results in a 401
    /// Unauthorized response so the client re-authenticates.
    #[error("Member {0} in session does not exist")]
    MemberNotInDatabase(i32),

    /// Email and password did not match any member.
    ///
    /// Results in a 401 Unauthorized response with a generic message so the
    /// client cannot distinguish an unknown email from a wrong password.
    #[error("Invalid login credentials")]
    InvalidCredentials,

    /// Logged-in member lacks the required permission.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Member {0}: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// All variants map to 401 Unauthorized. The full error is logged at debug level
/// for diagnostics while client-facing messages stay generic to avoid leaking
/// which part of the check failed.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let message = match self {
            Self::InvalidCredentials => "Invalid email or password",
            Self::AccessDenied(_, _) => "You do not have permission to do that",
            Self::NotLoggedIn | Self::MemberNotInDatabase(_) => "Authentication required",
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
