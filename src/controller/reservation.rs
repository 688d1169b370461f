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
        reservation::{
            AdminCreateReservationDto, CreateReservationDto, ReservationDto,
            ReservationSearchQuery,
        },
    },
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::reservation::{CreateReservationParams, ReservationFilterParams},
    service::reservation::ReservationService,
    state::AppState,
};

/// Tag for grouping reservation endpoints in OpenAPI documentation
pub static RESERVATION_TAG: &str = "reservation";

/// List all reservations with joined member, time, and theme.
#[utoipa::path(
    get,
    path = "/api/reservations",
    tag = RESERVATION_TAG,
    responses(
        (status = 200, description = "All reservations", body = [ReservationDto]),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservations(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = ReservationService::new(&state.db);

    let reservations = service.get_all().await?;

    let dtos: Vec<ReservationDto> = reservations.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a reservation for the logged-in member.
///
/// The member comes from the session; the body names the date, time slot, and
/// theme.
///
/// # Returns
/// - `201 Created` - Reservation created
/// - `400 Bad Request` - Missing time/theme, past date, or slot already booked
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/api/reservations",
    tag = RESERVATION_TAG,
    request_body = CreateReservationDto,
    responses(
        (status = 201, description = "Reservation created", body = ReservationDto),
        (status = 400, description = "Invalid reservation", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = ReservationService::new(&state.db);

    let params = CreateReservationParams {
        member_id: member.id,
        date: payload.date,
        time_id: payload.time_id,
        theme_id: payload.theme_id,
    };

    let reservation = service.add(params, Utc::now().naive_utc()).await?;

    Ok((StatusCode::CREATED, Json(reservation.into_dto())))
}

/// Cancel a reservation.
///
/// # Returns
/// - `204 No Content` - Reservation deleted
/// - `400 Bad Request` - No reservation with that id
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    delete,
    path = "/api/reservations/{id}",
    tag = RESERVATION_TAG,
    params(
        ("id" = i32, Path, description = "Reservation id")
    ),
    responses(
        (status = 204, description = "Reservation deleted"),
        (status = 400, description = "No reservation with that id", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = ReservationService::new(&state.db);

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Create a reservation on behalf of any member.
///
/// # Access Control
/// - `Admin` - Only admins can book for other members
///
/// # Returns
/// - `201 Created` - Reservation created
/// - `400 Bad Request` - Missing member/time/theme, past date, or slot booked
/// - `401 Unauthorized` - Not an admin
#[utoipa::path(
    post,
    path = "/api/admin/reservations",
    tag = RESERVATION_TAG,
    request_body = AdminCreateReservationDto,
    responses(
        (status = 201, description = "Reservation created", body = ReservationDto),
        (status = 400, description = "Invalid reservation", body = ErrorDto),
        (status = 401, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_admin_reservation(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<AdminCreateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = ReservationService::new(&state.db);

    let params = CreateReservationParams {
        member_id: payload.member_id,
        date: payload.date,
        time_id: payload.time_id,
        theme_id: payload.theme_id,
    };

    let reservation = service.add(params, Utc::now().naive_utc()).await?;

    Ok((StatusCode::CREATED, Json(reservation.into_dto())))
}

/// Search reservations by member, theme, and date range.
///
/// Every filter is optional; an empty query returns all reservations.
///
/// # Access Control
/// - `Admin` - Only admins can search reservations
///
/// # Returns
/// - `200 OK` - Matching reservations
/// - `400 Bad Request` - date_from after date_to
/// - `401 Unauthorized` - Not an admin
#[utoipa::path(
    get,
    path = "/api/admin/reservations/search",
    tag = RESERVATION_TAG,
    params(ReservationSearchQuery),
    responses(
        (status = 200, description = "Matching reservations", body = [ReservationDto]),
        (status = 400, description = "Invalid date range", body = ErrorDto),
        (status = 401, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_reservations(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ReservationSearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = ReservationService::new(&state.db);

    let params = ReservationFilterParams {
        member_id: query.member_id,
        theme_id: query.theme_id,
        date_from: query.date_from,
        date_to: query.date_to,
    };

    let reservations = service.search(params).await?;

    let dtos: Vec<ReservationDto> = reservations.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
