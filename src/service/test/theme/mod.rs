use crate::{
    error::AppError,
    model::theme::CreateThemeParams,
    service::theme::ThemeService,
};
use chrono::NaiveDate;
use test_utils::{builder::TestBuilder, factory};

mod add;
mod delete;
