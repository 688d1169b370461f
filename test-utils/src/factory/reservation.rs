//! Reservation factory for creating test reservation entities.

use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reservations with customizable fields.
///
/// The member, time slot, and theme must already exist; use the other factories
/// to create them. The default date is one week from today so reservations pass
/// past-date validation in service tests.
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    member_id: i32,
    date: NaiveDate,
    time_id: i32,
    theme_id: i32,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory for the given member, time, and theme.
    pub fn new(db: &'a DatabaseConnection, member_id: i32, time_id: i32, theme_id: i32) -> Self {
        Self {
            db,
            member_id,
            date: Utc::now().date_naive() + Duration::days(7),
            time_id,
            theme_id,
        }
    }

    /// Sets the reservation date.
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Builds and inserts the reservation entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::reservation::Model)` - Created reservation entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            member_id: ActiveValue::Set(self.member_id),
            date: ActiveValue::Set(self.date),
            time_id: ActiveValue::Set(self.time_id),
            theme_id: ActiveValue::Set(self.theme_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a reservation with a default date one week out.
///
/// Shorthand for `ReservationFactory::new(db, member_id, time_id, theme_id).build().await`.
pub async fn create_reservation(
    db: &DatabaseConnection,
    member_id: i32,
    time_id: i32,
    theme_id: i32,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, member_id, time_id, theme_id)
        .build()
        .await
}
