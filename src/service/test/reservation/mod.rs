use crate::{
    error::AppError,
    model::reservation::{CreateReservationParams, ReservationFilterParams},
    service::reservation::ReservationService,
};
use chrono::{NaiveDate, NaiveTime};
use test_utils::{builder::TestBuilder, factory};

mod add;
mod delete;
