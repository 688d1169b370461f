//! Request processing and authentication guards.

pub mod auth;
pub mod session;
