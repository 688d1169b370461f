//! Theme data repository for database operations.

use chrono::NaiveDate;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, ExprTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};

use crate::model::theme::{CreateThemeParams, Theme};

/// How many themes the popularity ranking returns.
const POPULAR_THEME_LIMIT: u64 = 10;

/// Repository providing database operations for themes.
pub struct ThemeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ThemeRepository<'a> {
    /// Creates a new ThemeRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new theme from creation parameters.
    ///
    /// # Returns
    /// - `Ok(Theme)` - The created theme with its generated id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateThemeParams) -> Result<Theme, DbErr> {
        let entity = entity::theme::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            thumbnail: ActiveValue::Set(params.thumbnail),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Theme::from_entity(entity))
    }

    /// Checks whether a theme with the given id exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Theme::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all themes in insertion order.
    pub async fn get_all(&self) -> Result<Vec<Theme>, DbErr> {
        let entities = entity::prelude::Theme::find().all(self.db).await?;

        Ok(entities.into_iter().map(Theme::from_entity).collect())
    }

    /// Gets the most-reserved themes within an inclusive date range.
    ///
    /// Joins themes to their reservations, counts reservations per theme within
    /// the range, and returns at most ten themes ordered by descending count.
    /// Ties break on ascending theme id. Themes with no reservations in the
    /// range do not appear.
    ///
    /// # Arguments
    /// - `date_from` - Inclusive start of the date range
    /// - `date_to` - Inclusive end of the date range
    ///
    /// # Returns
    /// - `Ok(Vec<Theme>)` - Ranked themes, most reserved first
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_popular(
        &self,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> Result<Vec<Theme>, DbErr> {
        let entities = entity::prelude::Theme::find()
            .join(JoinType::InnerJoin, entity::theme::Relation::Reservation.def())
            .filter(entity::reservation::Column::Date.between(date_from, date_to))
            .group_by(entity::theme::Column::Id)
            .order_by_desc(
                Expr::col((entity::reservation::Entity, entity::reservation::Column::Id)).count(),
            )
            .order_by_asc(entity::theme::Column::Id)
            .limit(POPULAR_THEME_LIMIT)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Theme::from_entity).collect())
    }

    /// Deletes a theme by its id.
    ///
    /// # Returns
    /// - `Ok(())` - Theme deleted (or no row matched)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Theme::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
