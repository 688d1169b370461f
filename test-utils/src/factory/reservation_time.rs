//! Reservation time factory for creating test time slot entities.

use crate::factory::helpers::next_id;
use chrono::NaiveTime;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test time slots with customizable fields.
///
/// The `start_at` column is unique, so the default generates a distinct
/// time-of-day per factory invocation from the shared counter.
pub struct ReservationTimeFactory<'a> {
    db: &'a DatabaseConnection,
    start_at: NaiveTime,
}

impl<'a> ReservationTimeFactory<'a> {
    /// Creates a new ReservationTimeFactory with a unique default start time.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let hour = (9 + id / 60) % 24;
        let minute = id % 60;
        Self {
            db,
            start_at: NaiveTime::from_hms_opt(hour as u32, minute as u32, 0)
                .unwrap_or(NaiveTime::MIN),
        }
    }

    /// Sets the start time for the slot.
    pub fn start_at(mut self, start_at: NaiveTime) -> Self {
        self.start_at = start_at;
        self
    }

    /// Builds and inserts the time slot entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::reservation_time::Model)` - Created time slot entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::reservation_time::Model, DbErr> {
        entity::reservation_time::ActiveModel {
            start_at: ActiveValue::Set(self.start_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a time slot with a unique default start time.
///
/// Shorthand for `ReservationTimeFactory::new(db).build().await`.
pub async fn create_time(
    db: &DatabaseConnection,
) -> Result<entity::reservation_time::Model, DbErr> {
    ReservationTimeFactory::new(db).build().await
}

/// Creates a time slot at a specific time of day.
pub async fn create_time_at(
    db: &DatabaseConnection,
    start_at: NaiveTime,
) -> Result<entity::reservation_time::Model, DbErr> {
    ReservationTimeFactory::new(db).start_at(start_at).build().await
}
