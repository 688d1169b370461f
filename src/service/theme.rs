//! Theme service for managing room-escape themes.

use chrono::{Duration, NaiveDate};
use sea_orm::DatabaseConnection;

use crate::{
    data::{reservation::ReservationRepository, theme::ThemeRepository},
    error::AppError,
    model::theme::{CreateThemeParams, Theme},
};

/// Width of the default popularity window in days.
const DEFAULT_POPULAR_WINDOW_DAYS: i64 = 7;

pub struct ThemeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ThemeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all themes.
    pub async fn get_all(&self) -> Result<Vec<Theme>, AppError> {
        let repo = ThemeRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Creates a new theme.
    pub async fn add(&self, params: CreateThemeParams) -> Result<Theme, AppError> {
        let repo = ThemeRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Gets the ten most-reserved themes within a date range.
    ///
    /// When either bound is omitted it defaults to the seven days ending
    /// yesterday relative to `today`, which the controller supplies so the
    /// clock stays out of the business rules.
    ///
    /// # Returns
    /// - `Ok(Vec<Theme>)` - Ranked themes, most reserved first
    /// - `Err(AppError::BadRequest)` - date_from is after date_to
    pub async fn get_popular(
        &self,
        date_from: Option<NaiveDate>,
        date_to: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<Vec<Theme>, AppError> {
        let repo = ThemeRepository::new(self.db);

        let yesterday = today - Duration::days(1);
        let date_to = date_to.unwrap_or(yesterday);
        let date_from =
            date_from.unwrap_or(yesterday - Duration::days(DEFAULT_POPULAR_WINDOW_DAYS - 1));

        if date_from > date_to {
            return Err(AppError::BadRequest(
                "date_from cannot be after date_to".to_string(),
            ));
        }

        Ok(repo.get_popular(date_from, date_to).await?)
    }

    /// Deletes a theme.
    ///
    /// # Returns
    /// - `Ok(())` - Theme deleted
    /// - `Err(AppError::BadRequest)` - Theme does not exist or a reservation
    ///   still references it
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let theme_repo = ThemeRepository::new(self.db);
        let reservation_repo = ReservationRepository::new(self.db);

        if !theme_repo.exists(id).await? {
            return Err(AppError::BadRequest(format!(
                "No theme exists with id {}",
                id
            )));
        }

        if reservation_repo.exists_by_theme_id(id).await? {
            return Err(AppError::BadRequest(
                "A reservation still references that theme".to_string(),
            ));
        }

        theme_repo.delete(id).await?;

        Ok(())
    }
}
