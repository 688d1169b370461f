use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Bookable time slot. `start_at` is formatted as `HH:MM` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReservationTimeDto {
    pub id: i32,
    pub start_at: String,
}

/// Time slot creation request body. `start_at` must parse as `HH:MM`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateReservationTimeDto {
    pub start_at: String,
}

/// Time slot with its booked state for a given date and theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AvailableTimeDto {
    pub id: i32,
    pub start_at: String,
    pub booked: bool,
}

/// Query parameters for the availability listing.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct AvailableTimesQuery {
    /// Date to check, `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Theme to check availability for.
    pub theme_id: i32,
}
