use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{auth, member, reservation, reservation_time, theme},
    dto,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::login,
        auth::logout,
        auth::get_member,
        member::signup,
        member::get_members,
        reservation_time::get_times,
        reservation_time::get_available_times,
        reservation_time::create_time,
        reservation_time::delete_time,
        theme::get_themes,
        theme::get_popular_themes,
        theme::create_theme,
        theme::delete_theme,
        reservation::get_reservations,
        reservation::create_reservation,
        reservation::delete_reservation,
        reservation::create_admin_reservation,
        reservation::search_reservations,
    ),
    components(schemas(
        dto::api::ErrorDto,
        dto::member::MemberDto,
        dto::member::SignupDto,
        dto::member::LoginDto,
        dto::reservation_time::ReservationTimeDto,
        dto::reservation_time::CreateReservationTimeDto,
        dto::reservation_time::AvailableTimeDto,
        dto::theme::ThemeDto,
        dto::theme::CreateThemeDto,
        dto::reservation::ReservationDto,
        dto::reservation::CreateReservationDto,
        dto::reservation::AdminCreateReservationDto,
    ))
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/member", get(auth::get_member))
        .route("/api/members", post(member::signup).get(member::get_members))
        .route(
            "/api/times",
            get(reservation_time::get_times).post(reservation_time::create_time),
        )
        .route(
            "/api/times/available",
            get(reservation_time::get_available_times),
        )
        .route("/api/times/{id}", axum::routing::delete(reservation_time::delete_time))
        .route("/api/themes", get(theme::get_themes).post(theme::create_theme))
        .route("/api/themes/popular", get(theme::get_popular_themes))
        .route("/api/themes/{id}", axum::routing::delete(theme::delete_theme))
        .route(
            "/api/reservations",
            get(reservation::get_reservations).post(reservation::create_reservation),
        )
        .route(
            "/api/reservations/{id}",
            axum::routing::delete(reservation::delete_reservation),
        )
        .route(
            "/api/admin/reservations",
            post(reservation::create_admin_reservation),
        )
        .route(
            "/api/admin/reservations/search",
            get(reservation::search_reservations),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
