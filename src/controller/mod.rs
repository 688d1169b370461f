//! HTTP request handlers.
//!
//! Controllers validate access through `AuthGuard`, convert DTOs to parameter
//! models, delegate to the service layer, and convert domain models back to
//! DTOs for the response. Each handler carries a utoipa annotation so the
//! OpenAPI document stays next to the code it describes.

pub mod auth;
pub mod member;
pub mod reservation;
pub mod reservation_time;
pub mod theme;
