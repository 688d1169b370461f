//! SeaORM entity models for the roomescape database schema.

pub mod member;
pub mod prelude;
pub mod reservation;
pub mod reservation_time;
pub mod theme;
