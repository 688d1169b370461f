use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    data::member::MemberRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::member::Member,
};

/// Permissions a handler can require before running.
pub enum Permission {
    Admin,
}

/// Session-backed access control for request handlers.
///
/// Resolves the member behind the current session and verifies the requested
/// permissions, returning the member so handlers can act on their behalf.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires a logged-in member holding every listed permission.
    ///
    /// # Returns
    /// - `Ok(Member)` - The authenticated member
    /// - `Err(AppError::AuthErr(NotLoggedIn))` - No member id in the session
    /// - `Err(AppError::AuthErr(MemberNotInDatabase))` - Session member no longer exists
    /// - `Err(AppError::AuthErr(AccessDenied))` - Member lacks a required permission
    pub async fn require(&self, permissions: &[Permission]) -> Result<Member, AppError> {
        let member_repo = MemberRepository::new(self.db);

        let Some(member_id) = AuthSession::new(self.session).get_member_id().await? else {
            return Err(AuthError::NotLoggedIn.into());
        };

        let Some(member) = member_repo.find_by_id(member_id).await? else {
            return Err(AuthError::MemberNotInDatabase(member_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !member.admin {
                        return Err(AuthError::AccessDenied(
                            member_id,
                            "Member attempted an admin operation without admin permissions"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(member)
    }
}
