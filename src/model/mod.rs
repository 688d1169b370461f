//! Domain models and operation parameter types.
//!
//! Business entities used throughout the service layer. Domain models are
//! converted from entity models at the repository boundary and transformed to
//! DTOs at the controller boundary, keeping database and wire concerns out of
//! the business rules.

pub mod member;
pub mod reservation;
pub mod reservation_time;
pub mod theme;
