//! Reservation service for creating, listing, searching, and cancelling bookings.

use chrono::NaiveDateTime;
use sea_orm::DatabaseConnection;

use crate::{
    data::{
        member::MemberRepository, reservation::ReservationRepository,
        reservation_time::ReservationTimeRepository, theme::ThemeRepository,
    },
    error::AppError,
    model::reservation::{CreateReservationParams, Reservation, ReservationFilterParams},
};

pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all reservations with joined member, time, and theme.
    pub async fn get_all(&self) -> Result<Vec<Reservation>, AppError> {
        let repo = ReservationRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets reservations matching the given optional filters.
    ///
    /// # Returns
    /// - `Ok(Vec<Reservation>)` - Matching reservations
    /// - `Err(AppError::BadRequest)` - date_from is after date_to
    pub async fn search(
        &self,
        params: ReservationFilterParams,
    ) -> Result<Vec<Reservation>, AppError> {
        let repo = ReservationRepository::new(self.db);

        if let (Some(from), Some(to)) = (params.date_from, params.date_to) {
            if from > to {
                return Err(AppError::BadRequest(
                    "date_from cannot be after date_to".to_string(),
                ));
            }
        }

        Ok(repo.get_filtered(params).await?)
    }

    /// Creates a reservation.
    ///
    /// Checks, in order: the time slot exists, the theme exists, the member
    /// exists, the slot's wall-clock start is not before `now`, and the
    /// date + time + theme slot is not already booked. The controller passes
    /// `now` so the clock stays out of the business rules.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The created reservation with joined relations
    /// - `Err(AppError::BadRequest)` - Any validation failed
    pub async fn add(
        &self,
        params: CreateReservationParams,
        now: NaiveDateTime,
    ) -> Result<Reservation, AppError> {
        let reservation_repo = ReservationRepository::new(self.db);
        let time_repo = ReservationTimeRepository::new(self.db);
        let theme_repo = ThemeRepository::new(self.db);
        let member_repo = MemberRepository::new(self.db);

        let Some(time) = time_repo.find_by_id(params.time_id).await? else {
            return Err(AppError::BadRequest(format!(
                "No time slot exists with id {}",
                params.time_id
            )));
        };

        if !theme_repo.exists(params.theme_id).await? {
            return Err(AppError::BadRequest(format!(
                "No theme exists with id {}",
                params.theme_id
            )));
        }

        if member_repo.find_by_id(params.member_id).await?.is_none() {
            return Err(AppError::BadRequest(format!(
                "No member exists with id {}",
                params.member_id
            )));
        }

        if params.date.and_time(time.start_at) < now {
            return Err(AppError::BadRequest(
                "Cannot make a reservation in the past".to_string(),
            ));
        }

        if reservation_repo
            .has_duplicate(params.date, params.time_id, params.theme_id)
            .await?
        {
            return Err(AppError::BadRequest(
                "That date, time, and theme is already booked".to_string(),
            ));
        }

        Ok(reservation_repo.create(params).await?)
    }

    /// Deletes a reservation.
    ///
    /// # Returns
    /// - `Ok(())` - Reservation deleted
    /// - `Err(AppError::BadRequest)` - No reservation with that id
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = ReservationRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::BadRequest(format!(
                "No reservation exists with id {}",
                id
            )));
        }

        repo.delete(id).await?;

        Ok(())
    }
}
