//! Member service for signup, login, and member queries.

use sea_orm::DatabaseConnection;

use crate::{
    data::member::MemberRepository,
    error::{auth::AuthError, AppError},
    model::member::{Member, SignupParams},
};

pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new member.
    ///
    /// # Returns
    /// - `Ok(Member)` - The registered member
    /// - `Err(AppError::BadRequest)` - Email is already registered
    pub async fn signup(&self, params: SignupParams) -> Result<Member, AppError> {
        let repo = MemberRepository::new(self.db);

        if repo.exists_by_email(&params.email).await? {
            return Err(AppError::BadRequest(
                "A member with that email already exists".to_string(),
            ));
        }

        Ok(repo.create(params).await?)
    }

    /// Authenticates a member by email and password.
    ///
    /// # Returns
    /// - `Ok(Member)` - Credentials matched
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong password
    pub async fn login(&self, email: &str, password: &str) -> Result<Member, AppError> {
        let repo = MemberRepository::new(self.db);

        let Some(member) = repo.find_by_credentials(email, password).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        Ok(member)
    }

    /// Gets all members ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Member>, AppError> {
        let repo = MemberRepository::new(self.db);

        Ok(repo.get_all().await?)
    }
}
