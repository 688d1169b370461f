//! Theme domain models and parameters.

use crate::dto::theme::ThemeDto;

/// Room-escape experience offered for booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub id: i32,
    pub name: String,
    pub description: String,
    /// URL of the theme's thumbnail image.
    pub thumbnail: String,
}

impl Theme {
    /// Converts the theme domain model to a DTO for API responses.
    pub fn into_dto(self) -> ThemeDto {
        ThemeDto {
            id: self.id,
            name: self.name,
            description: self.description,
            thumbnail: self.thumbnail,
        }
    }

    /// Converts an entity model to a theme domain model.
    pub fn from_entity(entity: entity::theme::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            thumbnail: entity.thumbnail,
        }
    }
}

/// Parameters for creating a new theme.
#[derive(Debug, Clone)]
pub struct CreateThemeParams {
    pub name: String,
    pub description: String,
    pub thumbnail: String,
}
