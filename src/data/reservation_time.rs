//! Reservation time data repository for database operations.

use chrono::NaiveTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::reservation_time::ReservationTime;

/// Repository providing database operations for bookable time slots.
pub struct ReservationTimeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationTimeRepository<'a> {
    /// Creates a new ReservationTimeRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new time slot.
    ///
    /// # Returns
    /// - `Ok(ReservationTime)` - The created slot with its generated id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, start_at: NaiveTime) -> Result<ReservationTime, DbErr> {
        let entity = entity::reservation_time::ActiveModel {
            start_at: ActiveValue::Set(start_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ReservationTime::from_entity(entity))
    }

    /// Finds a time slot by its id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<ReservationTime>, DbErr> {
        let entity = entity::prelude::ReservationTime::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(ReservationTime::from_entity))
    }

    /// Checks whether a slot with the given start time already exists.
    ///
    /// `start_at` is unique, so this backs the duplicate-slot rejection.
    pub async fn exists_by_start_at(&self, start_at: NaiveTime) -> Result<bool, DbErr> {
        let count = entity::prelude::ReservationTime::find()
            .filter(entity::reservation_time::Column::StartAt.eq(start_at))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all time slots ordered by start time.
    pub async fn get_all(&self) -> Result<Vec<ReservationTime>, DbErr> {
        let entities = entity::prelude::ReservationTime::find()
            .order_by_asc(entity::reservation_time::Column::StartAt)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(ReservationTime::from_entity)
            .collect())
    }

    /// Deletes a time slot by its id.
    ///
    /// # Returns
    /// - `Ok(())` - Slot deleted (or no row matched)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::ReservationTime::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
