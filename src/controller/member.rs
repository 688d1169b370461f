use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    dto::{
        api::ErrorDto,
        member::{MemberDto, SignupDto},
    },
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::member::SignupParams,
    service::member::MemberService,
    state::AppState,
};

/// Tag for grouping member endpoints in OpenAPI documentation
pub static MEMBER_TAG: &str = "member";

/// Register a new member.
///
/// # Returns
/// - `201 Created` - Member registered
/// - `400 Bad Request` - Email already registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/members",
    tag = MEMBER_TAG,
    request_body = SignupDto,
    responses(
        (status = 201, description = "Member registered", body = MemberDto),
        (status = 400, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = MemberService::new(&state.db);

    let params = SignupParams {
        name: payload.name,
        email: payload.email,
        password: payload.password,
    };

    let member = service.signup(params).await?;

    Ok((StatusCode::CREATED, Json(member.into_dto())))
}

/// List all members, ordered by name.
///
/// Backs the admin reservation form's member picker.
///
/// # Access Control
/// - `Admin` - Only admins can list members
#[utoipa::path(
    get,
    path = "/api/members",
    tag = MEMBER_TAG,
    responses(
        (status = 200, description = "All members", body = [MemberDto]),
        (status = 401, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_members(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = MemberService::new(&state.db);

    let members = service.get_all().await?;

    let dtos: Vec<MemberDto> = members.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
