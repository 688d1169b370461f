//! Wire-format DTOs for the JSON API.
//!
//! Request and response bodies exchanged with clients. DTOs stay free of
//! business logic; controllers convert them to parameter models on the way in
//! and domain models convert to DTOs on the way out.

pub mod api;
pub mod member;
pub mod reservation;
pub mod reservation_time;
pub mod theme;
