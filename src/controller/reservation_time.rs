use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    dto::{
        api::ErrorDto,
        reservation_time::{
            AvailableTimeDto, AvailableTimesQuery, CreateReservationTimeDto, ReservationTimeDto,
        },
    },
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    service::reservation_time::ReservationTimeService,
    state::AppState,
};

/// Tag for grouping time slot endpoints in OpenAPI documentation
pub static TIME_TAG: &str = "time";

/// List all bookable time slots, ordered by start time.
#[utoipa::path(
    get,
    path = "/api/times",
    tag = TIME_TAG,
    responses(
        (status = 200, description = "All time slots", body = [ReservationTimeDto]),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_times(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = ReservationTimeService::new(&state.db);

    let times = service.get_all().await?;

    let dtos: Vec<ReservationTimeDto> = times.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// List every time slot with its booked state for a date and theme.
///
/// Slots already reserved for the given date and theme come back with
/// `booked: true` so the booking form can grey them out.
#[utoipa::path(
    get,
    path = "/api/times/available",
    tag = TIME_TAG,
    params(AvailableTimesQuery),
    responses(
        (status = 200, description = "Slots with booked state", body = [AvailableTimeDto]),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_available_times(
    State(state): State<AppState>,
    Query(query): Query<AvailableTimesQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = ReservationTimeService::new(&state.db);

    let times = service.get_available(query.date, query.theme_id).await?;

    let dtos: Vec<AvailableTimeDto> = times.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a new time slot.
///
/// # Access Control
/// - `Admin` - Only admins can create time slots
///
/// # Returns
/// - `201 Created` - Slot created
/// - `400 Bad Request` - Unparseable `HH:MM` value or duplicate start time
/// - `401 Unauthorized` - Not an admin
#[utoipa::path(
    post,
    path = "/api/times",
    tag = TIME_TAG,
    request_body = CreateReservationTimeDto,
    responses(
        (status = 201, description = "Slot created", body = ReservationTimeDto),
        (status = 400, description = "Invalid or duplicate start time", body = ErrorDto),
        (status = 401, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_time(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateReservationTimeDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = ReservationTimeService::new(&state.db);

    let time = service.add(&payload.start_at).await?;

    Ok((StatusCode::CREATED, Json(time.into_dto())))
}

/// Delete a time slot.
///
/// # Access Control
/// - `Admin` - Only admins can delete time slots
///
/// # Returns
/// - `204 No Content` - Slot deleted
/// - `400 Bad Request` - Slot missing or still referenced by a reservation
/// - `401 Unauthorized` - Not an admin
#[utoipa::path(
    delete,
    path = "/api/times/{id}",
    tag = TIME_TAG,
    params(
        ("id" = i32, Path, description = "Time slot id")
    ),
    responses(
        (status = 204, description = "Slot deleted"),
        (status = 400, description = "Slot missing or in use", body = ErrorDto),
        (status = 401, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_time(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = ReservationTimeService::new(&state.db);

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
