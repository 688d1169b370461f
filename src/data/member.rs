//! Member data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::member::{Member, SignupParams};

/// Repository providing database operations for member management.
pub struct MemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberRepository<'a> {
    /// Creates a new MemberRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new member from signup parameters.
    ///
    /// # Arguments
    /// - `params` - Signup parameters including name, email, and password
    ///
    /// # Returns
    /// - `Ok(Member)` - The created member with its generated id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: SignupParams) -> Result<Member, DbErr> {
        let entity = entity::member::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            password: ActiveValue::Set(params.password),
            admin: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Member::from_entity(entity))
    }

    /// Finds a member by their id.
    ///
    /// # Returns
    /// - `Ok(Some(Member))` - Member found
    /// - `Ok(None)` - No member with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Member>, DbErr> {
        let entity = entity::prelude::Member::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Member::from_entity))
    }

    /// Finds a member matching both email and password.
    ///
    /// Used by the login flow; returns None on either an unknown email or a
    /// password mismatch so callers cannot tell the two apart.
    ///
    /// # Returns
    /// - `Ok(Some(Member))` - Credentials matched a member
    /// - `Ok(None)` - No member with those credentials
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Member>, DbErr> {
        let entity = entity::prelude::Member::find()
            .filter(entity::member::Column::Email.eq(email))
            .filter(entity::member::Column::Password.eq(password))
            .one(self.db)
            .await?;

        Ok(entity.map(Member::from_entity))
    }

    /// Checks whether a member with the given email already exists.
    ///
    /// # Returns
    /// - `Ok(true)` - Email is taken
    /// - `Ok(false)` - Email is free
    /// - `Err(DbErr)` - Database error during query
    pub async fn exists_by_email(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Member::find()
            .filter(entity::member::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all members ordered by name.
    ///
    /// # Returns
    /// - `Ok(Vec<Member>)` - All members
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Member>, DbErr> {
        let entities = entity::prelude::Member::find()
            .order_by_asc(entity::member::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Member::from_entity).collect())
    }
}
