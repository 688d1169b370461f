use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    dto::{api::ErrorDto, member::LoginDto, member::MemberDto},
    error::AppError,
    middleware::{auth::AuthGuard, session::AuthSession},
    service::member::MemberService,
    state::AppState,
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log a member in with email and password.
///
/// Validates the credentials and stores the member's id in the cookie session.
///
/// # Returns
/// - `200 OK` - Logged in, member returned
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = MemberDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = MemberService::new(&state.db);

    let member = service.login(&payload.email, &payload.password).await?;

    AuthSession::new(&session).set_member_id(member.id).await?;

    Ok((StatusCode::OK, Json(member.into_dto())))
}

/// Log the current member out.
///
/// Clears the session regardless of whether anyone was logged in.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Session cleared"),
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::OK)
}

/// Get the currently logged-in member.
///
/// # Returns
/// - `200 OK` - The member behind the session
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    get,
    path = "/api/auth/member",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current member", body = MemberDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_member(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(member.into_dto())))
}
