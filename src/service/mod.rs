//! Service layer for business logic and orchestration.
//!
//! Sits between the controller (API) layer and the data (repository) layer.
//! Services implement the booking rules: referenced rows must exist before an
//! insert, a date + time + theme slot can only be booked once, reservations
//! cannot be made in the past, and times or themes still referenced by a
//! reservation cannot be deleted.

pub mod member;
pub mod reservation;
pub mod reservation_time;
pub mod theme;
