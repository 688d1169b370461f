//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// Ensures each factory-created entity gets a unique identifier to prevent
/// collisions with unique columns (member email, time slot start_at).
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a reservation together with all of its dependencies.
///
/// This is a convenience method that creates:
/// 1. Member (as the reserving member)
/// 2. ReservationTime
/// 3. Theme
/// 4. Reservation
///
/// All entities are created with default values. Use the individual factories
/// if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((member, time, theme, reservation))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_reservation_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::member::Model,
        entity::reservation_time::Model,
        entity::theme::Model,
        entity::reservation::Model,
    ),
    DbErr,
> {
    let member = crate::factory::member::create_member(db).await?;
    let time = crate::factory::reservation_time::create_time(db).await?;
    let theme = crate::factory::theme::create_theme(db).await?;
    let reservation =
        crate::factory::reservation::create_reservation(db, member.id, time.id, theme.id).await?;

    Ok((member, time, theme, reservation))
}
