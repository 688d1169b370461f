use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    dto::{
        api::ErrorDto,
        theme::{CreateThemeDto, PopularThemesQuery, ThemeDto},
    },
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::theme::CreateThemeParams,
    service::theme::ThemeService,
    state::AppState,
};

/// Tag for grouping theme endpoints in OpenAPI documentation
pub static THEME_TAG: &str = "theme";

/// List all themes.
#[utoipa::path(
    get,
    path = "/api/themes",
    tag = THEME_TAG,
    responses(
        (status = 200, description = "All themes", body = [ThemeDto]),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_themes(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = ThemeService::new(&state.db);

    let themes = service.get_all().await?;

    let dtos: Vec<ThemeDto> = themes.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// List the ten most-reserved themes within a date range.
///
/// With no range the ranking covers the seven days ending yesterday. Ties
/// break on ascending theme id.
///
/// # Returns
/// - `200 OK` - Ranked themes, most reserved first
/// - `400 Bad Request` - date_from after date_to
#[utoipa::path(
    get,
    path = "/api/themes/popular",
    tag = THEME_TAG,
    params(PopularThemesQuery),
    responses(
        (status = 200, description = "Ranked themes", body = [ThemeDto]),
        (status = 400, description = "Invalid date range", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_popular_themes(
    State(state): State<AppState>,
    Query(query): Query<PopularThemesQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = ThemeService::new(&state.db);

    let themes = service
        .get_popular(query.date_from, query.date_to, Utc::now().date_naive())
        .await?;

    let dtos: Vec<ThemeDto> = themes.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a new theme.
///
/// # Access Control
/// - `Admin` - Only admins can create themes
#[utoipa::path(
    post,
    path = "/api/themes",
    tag = THEME_TAG,
    request_body = CreateThemeDto,
    responses(
        (status = 201, description = "Theme created", body = ThemeDto),
        (status = 401, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_theme(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateThemeDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = ThemeService::new(&state.db);

    let params = CreateThemeParams {
        name: payload.name,
        description: payload.description,
        thumbnail: payload.thumbnail,
    };

    let theme = service.add(params).await?;

    Ok((StatusCode::CREATED, Json(theme.into_dto())))
}

/// Delete a theme.
///
/// # Access Control
/// - `Admin` - Only admins can delete themes
///
/// # Returns
/// - `204 No Content` - Theme deleted
/// - `400 Bad Request` - Theme missing or still referenced by a reservation
/// - `401 Unauthorized` - Not an admin
#[utoipa::path(
    delete,
    path = "/api/themes/{id}",
    tag = THEME_TAG,
    params(
        ("id" = i32, Path, description = "Theme id")
    ),
    responses(
        (status = 204, description = "Theme deleted"),
        (status = 400, description = "Theme missing or in use", body = ErrorDto),
        (status = 401, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_theme(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = ThemeService::new(&state.db);

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
