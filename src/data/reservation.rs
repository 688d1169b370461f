//! Reservation data repository for database operations.
//!
//! Reads return fully joined domain models: the repository batches the member,
//! time slot, and theme lookups into per-table queries and assembles the
//! results through `HashMap`s keyed by id.

use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::model::{
    member::Member,
    reservation::{CreateReservationParams, Reservation, ReservationFilterParams},
    reservation_time::ReservationTime,
    theme::Theme,
};

/// Repository providing database operations for reservations.
pub struct ReservationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationRepository<'a> {
    /// Creates a new ReservationRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new reservation and returns it with joined relations.
    ///
    /// The referenced member, time slot, and theme must exist; the service layer
    /// checks this before calling, and the foreign keys enforce it below.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The created reservation with member, time, and theme
    /// - `Err(DbErr)` - Database error during insert or relation fetch
    pub async fn create(&self, params: CreateReservationParams) -> Result<Reservation, DbErr> {
        let entity = entity::reservation::ActiveModel {
            member_id: ActiveValue::Set(params.member_id),
            date: ActiveValue::Set(params.date),
            time_id: ActiveValue::Set(params.time_id),
            theme_id: ActiveValue::Set(params.theme_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.find_by_id(entity.id).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!(
                "Reservation with id {} not found after creation",
                entity.id
            ))
        })
    }

    /// Finds a reservation by its id with joined relations.
    ///
    /// # Returns
    /// - `Ok(Some(Reservation))` - Reservation found with member, time, and theme
    /// - `Ok(None)` - No reservation with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Reservation>, DbErr> {
        let Some(entity) = entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut assembled = self.assemble_with_relations(vec![entity]).await?;

        Ok(assembled.pop())
    }

    /// Gets all reservations with joined relations, oldest first.
    pub async fn get_all(&self) -> Result<Vec<Reservation>, DbErr> {
        let entities = entity::prelude::Reservation::find()
            .order_by_asc(entity::reservation::Column::Id)
            .all(self.db)
            .await?;

        self.assemble_with_relations(entities).await
    }

    /// Gets reservations matching the given optional filters, oldest first.
    ///
    /// Each filter narrows the result independently; an empty filter set returns
    /// everything. Date bounds are inclusive.
    pub async fn get_filtered(
        &self,
        params: ReservationFilterParams,
    ) -> Result<Vec<Reservation>, DbErr> {
        let mut query = entity::prelude::Reservation::find();

        if let Some(member_id) = params.member_id {
            query = query.filter(entity::reservation::Column::MemberId.eq(member_id));
        }
        if let Some(theme_id) = params.theme_id {
            query = query.filter(entity::reservation::Column::ThemeId.eq(theme_id));
        }
        if let Some(date_from) = params.date_from {
            query = query.filter(entity::reservation::Column::Date.gte(date_from));
        }
        if let Some(date_to) = params.date_to {
            query = query.filter(entity::reservation::Column::Date.lte(date_to));
        }

        let entities = query
            .order_by_asc(entity::reservation::Column::Id)
            .all(self.db)
            .await?;

        self.assemble_with_relations(entities).await
    }

    /// Gets the ids of time slots already booked for a date and theme.
    ///
    /// Backs the availability listing: every slot whose id appears here is
    /// booked for that date and theme.
    pub async fn get_reserved_time_ids(
        &self,
        date: NaiveDate,
        theme_id: i32,
    ) -> Result<Vec<i32>, DbErr> {
        let entities = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::Date.eq(date))
            .filter(entity::reservation::Column::ThemeId.eq(theme_id))
            .select_only()
            .column(entity::reservation::Column::TimeId)
            .into_tuple::<i32>()
            .all(self.db)
            .await?;

        Ok(entities)
    }

    /// Checks whether a reservation already occupies the date + time + theme slot.
    pub async fn has_duplicate(
        &self,
        date: NaiveDate,
        time_id: i32,
        theme_id: i32,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::Date.eq(date))
            .filter(entity::reservation::Column::TimeId.eq(time_id))
            .filter(entity::reservation::Column::ThemeId.eq(theme_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether any reservation references the given time slot.
    pub async fn exists_by_time_id(&self, time_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::TimeId.eq(time_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether any reservation references the given theme.
    pub async fn exists_by_theme_id(&self, theme_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::ThemeId.eq(theme_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes a reservation by its id.
    ///
    /// # Returns
    /// - `Ok(())` - Reservation deleted (or no row matched)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Reservation::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Joins reservation entities to their members, time slots, and themes.
    ///
    /// Batches the related rows into one query per table and assembles the
    /// domain models through id-keyed maps. A reservation referencing a missing
    /// row is a broken foreign key and surfaces as `DbErr::RecordNotFound`.
    async fn assemble_with_relations(
        &self,
        entities: Vec<entity::reservation::Model>,
    ) -> Result<Vec<Reservation>, DbErr> {
        if entities.is_empty() {
            return Ok(Vec::new());
        }

        let member_ids: Vec<i32> = entities.iter().map(|r| r.member_id).collect();
        let time_ids: Vec<i32> = entities.iter().map(|r| r.time_id).collect();
        let theme_ids: Vec<i32> = entities.iter().map(|r| r.theme_id).collect();

        let members_map: HashMap<i32, entity::member::Model> = entity::prelude::Member::find()
            .filter(entity::member::Column::Id.is_in(member_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|m| (m.id, m))
            .collect();

        let times_map: HashMap<i32, entity::reservation_time::Model> =
            entity::prelude::ReservationTime::find()
                .filter(entity::reservation_time::Column::Id.is_in(time_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|t| (t.id, t))
                .collect();

        let themes_map: HashMap<i32, entity::theme::Model> = entity::prelude::Theme::find()
            .filter(entity::theme::Column::Id.is_in(theme_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|t| (t.id, t))
            .collect();

        entities
            .into_iter()
            .map(|r| {
                let member = members_map.get(&r.member_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Member {} referenced by reservation {} not found",
                        r.member_id, r.id
                    ))
                })?;
                let time = times_map.get(&r.time_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Time slot {} referenced by reservation {} not found",
                        r.time_id, r.id
                    ))
                })?;
                let theme = themes_map.get(&r.theme_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Theme {} referenced by reservation {} not found",
                        r.theme_id, r.id
                    ))
                })?;

                Ok(Reservation {
                    id: r.id,
                    member: Member::from_entity(member),
                    date: r.date,
                    time: ReservationTime::from_entity(time),
                    theme: Theme::from_entity(theme),
                })
            })
            .collect()
    }
}
