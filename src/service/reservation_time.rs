//! Reservation time service for managing bookable time slots.

use chrono::{NaiveDate, NaiveTime};
use sea_orm::DatabaseConnection;

use crate::{
    data::{reservation::ReservationRepository, reservation_time::ReservationTimeRepository},
    error::AppError,
    model::reservation_time::{AvailableTime, ReservationTime, START_AT_FORMAT},
};

pub struct ReservationTimeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationTimeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all time slots ordered by start time.
    pub async fn get_all(&self) -> Result<Vec<ReservationTime>, AppError> {
        let repo = ReservationTimeRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets every time slot with its booked state for a date and theme.
    ///
    /// Returns all slots; each is flagged booked when a reservation for the
    /// given date and theme already occupies it.
    pub async fn get_available(
        &self,
        date: NaiveDate,
        theme_id: i32,
    ) -> Result<Vec<AvailableTime>, AppError> {
        let time_repo = ReservationTimeRepository::new(self.db);
        let reservation_repo = ReservationRepository::new(self.db);

        let all_times = time_repo.get_all().await?;
        let reserved_ids = reservation_repo
            .get_reserved_time_ids(date, theme_id)
            .await?;

        Ok(all_times
            .into_iter()
            .map(|time| {
                let booked = reserved_ids.contains(&time.id);
                AvailableTime { time, booked }
            })
            .collect())
    }

    /// Creates a new time slot from an `HH:MM` string.
    ///
    /// # Returns
    /// - `Ok(ReservationTime)` - The created slot
    /// - `Err(AppError::BadRequest)` - Unparseable time or a slot with the same
    ///   start time already exists
    pub async fn add(&self, start_at: &str) -> Result<ReservationTime, AppError> {
        let repo = ReservationTimeRepository::new(self.db);

        let start_at = parse_start_at(start_at)?;

        if repo.exists_by_start_at(start_at).await? {
            return Err(AppError::BadRequest(
                "A time slot with that start time already exists".to_string(),
            ));
        }

        Ok(repo.create(start_at).await?)
    }

    /// Deletes a time slot.
    ///
    /// # Returns
    /// - `Ok(())` - Slot deleted
    /// - `Err(AppError::BadRequest)` - Slot does not exist or a reservation
    ///   still references it
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let time_repo = ReservationTimeRepository::new(self.db);
        let reservation_repo = ReservationRepository::new(self.db);

        if time_repo.find_by_id(id).await?.is_none() {
            return Err(AppError::BadRequest(format!(
                "No time slot exists with id {}",
                id
            )));
        }

        if reservation_repo.exists_by_time_id(id).await? {
            return Err(AppError::BadRequest(
                "A reservation still references that time slot".to_string(),
            ));
        }

        time_repo.delete(id).await?;

        Ok(())
    }
}

/// Parses an `HH:MM` wire string into a time of day.
fn parse_start_at(value: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(value, START_AT_FORMAT)
        .map_err(|_| AppError::BadRequest(format!("'{}' is not a valid HH:MM time", value)))
}
