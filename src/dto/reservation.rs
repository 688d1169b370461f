use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::dto::{reservation_time::ReservationTimeDto, theme::ThemeDto};

/// Reservation with its joined member name, time slot, and theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReservationDto {
    pub id: i32,
    pub member_name: String,
    pub date: NaiveDate,
    pub time: ReservationTimeDto,
    pub theme: ThemeDto,
}

/// Reservation creation request body for a logged-in member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateReservationDto {
    pub date: NaiveDate,
    pub time_id: i32,
    pub theme_id: i32,
}

/// Admin reservation creation request body, booking on behalf of a member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AdminCreateReservationDto {
    pub member_id: i32,
    pub date: NaiveDate,
    pub time_id: i32,
    pub theme_id: i32,
}

/// Query parameters for the admin reservation search. Every filter is optional.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ReservationSearchQuery {
    /// Restrict to reservations made by this member.
    pub member_id: Option<i32>,
    /// Restrict to reservations of this theme.
    pub theme_id: Option<i32>,
    /// Inclusive start of the date range, `YYYY-MM-DD`.
    pub date_from: Option<NaiveDate>,
    /// Inclusive end of the date range, `YYYY-MM-DD`.
    pub date_to: Option<NaiveDate>,
}
