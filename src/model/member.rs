//! Member domain models and parameters.
//!
//! The domain model never carries the password; credentials are checked inside
//! the repository and only the public member fields cross the boundary.

use crate::dto::member::MemberDto;

/// Registered member with their permission flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: i32,
    /// Display name shown on reservations.
    pub name: String,
    pub email: String,
    /// Whether the member may use the admin endpoints.
    pub admin: bool,
}

impl Member {
    /// Converts the member domain model to a DTO for API responses.
    pub fn into_dto(self) -> MemberDto {
        MemberDto {
            id: self.id,
            name: self.name,
            email: self.email,
            admin: self.admin,
        }
    }

    /// Converts an entity model to a member domain model at the repository
    /// boundary, dropping the stored password.
    pub fn from_entity(entity: entity::member::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            admin: entity.admin,
        }
    }
}

/// Parameters for registering a new member.
#[derive(Debug, Clone)]
pub struct SignupParams {
    pub name: String,
    pub email: String,
    pub password: String,
}
