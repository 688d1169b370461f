//! Reservation time slot domain models.

use chrono::NaiveTime;

use crate::dto::reservation_time::{AvailableTimeDto, ReservationTimeDto};

/// Wire format for times of day, hours and minutes only.
pub const START_AT_FORMAT: &str = "%H:%M";

/// Bookable time-of-day slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationTime {
    pub id: i32,
    pub start_at: NaiveTime,
}

impl ReservationTime {
    /// Converts the time slot domain model to a DTO, formatting `start_at`
    /// as `HH:MM`.
    pub fn into_dto(self) -> ReservationTimeDto {
        ReservationTimeDto {
            id: self.id,
            start_at: self.start_at.format(START_AT_FORMAT).to_string(),
        }
    }

    /// Converts an entity model to a time slot domain model.
    pub fn from_entity(entity: entity::reservation_time::Model) -> Self {
        Self {
            id: entity.id,
            start_at: entity.start_at,
        }
    }
}

/// Time slot paired with whether it is already booked for a date and theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableTime {
    pub time: ReservationTime,
    pub booked: bool,
}

impl AvailableTime {
    pub fn into_dto(self) -> AvailableTimeDto {
        AvailableTimeDto {
            id: self.time.id,
            start_at: self.time.start_at.format(START_AT_FORMAT).to_string(),
            booked: self.booked,
        }
    }
}
