use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ThemeDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub thumbnail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateThemeDto {
    pub name: String,
    pub description: String,
    pub thumbnail: String,
}

/// Query parameters for the popular-themes ranking.
///
/// Both bounds are optional; when omitted the ranking covers the seven days
/// ending yesterday.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct PopularThemesQuery {
    /// Inclusive start of the date range, `YYYY-MM-DD`.
    pub date_from: Option<NaiveDate>,
    /// Inclusive end of the date range, `YYYY-MM-DD`.
    pub date_to: Option<NaiveDate>,
}
