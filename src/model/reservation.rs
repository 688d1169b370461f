//! Reservation domain models and parameters.

use chrono::NaiveDate;

use crate::{
    dto::reservation::ReservationDto,
    model::{member::Member, reservation_time::ReservationTime, theme::Theme},
};

/// Booking of a theme at a date and time slot by a member.
///
/// Carries the fully joined member, time slot, and theme so the controller can
/// render a response without further queries.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: i32,
    pub member: Member,
    pub date: NaiveDate,
    pub time: ReservationTime,
    pub theme: Theme,
}

impl Reservation {
    /// Converts the reservation domain model to a DTO for API responses.
    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            id: self.id,
            member_name: self.member.name,
            date: self.date,
            time: self.time.into_dto(),
            theme: self.theme.into_dto(),
        }
    }
}

/// Parameters for creating a reservation.
///
/// Used by both the member endpoint (member id taken from the session) and the
/// admin endpoint (member id taken from the request body).
#[derive(Debug, Clone)]
pub struct CreateReservationParams {
    pub member_id: i32,
    pub date: NaiveDate,
    pub time_id: i32,
    pub theme_id: i32,
}

/// Optional filters for the admin reservation search.
#[derive(Debug, Clone, Default)]
pub struct ReservationFilterParams {
    pub member_id: Option<i32>,
    pub theme_id: Option<i32>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}
