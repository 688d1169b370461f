use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260115_000001_create_member_table::Member,
    m20260115_000002_create_reservation_time_table::ReservationTime,
    m20260115_000003_create_theme_table::Theme,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(integer(Reservation::MemberId))
                    .col(date(Reservation::Date))
                    .col(integer(Reservation::TimeId))
                    .col(integer(Reservation::ThemeId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_member")
                            .from(Reservation::Table, Reservation::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_time")
                            .from(Reservation::Table, Reservation::TimeId)
                            .to(ReservationTime::Table, ReservationTime::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_theme")
                            .from(Reservation::Table, Reservation::ThemeId)
                            .to(Theme::Table, Theme::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // One booking per date + time + theme, enforced by the database so the
        // service-level duplicate check cannot race.
        manager
            .create_index(
                Index::create()
                    .name("idx_reservation_slot")
                    .table(Reservation::Table)
                    .col(Reservation::Date)
                    .col(Reservation::TimeId)
                    .col(Reservation::ThemeId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    Table,
    Id,
    MemberId,
    Date,
    TimeId,
    ThemeId,
}
