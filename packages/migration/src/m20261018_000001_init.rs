use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Players {
    Table,
    Id,
    Username,
    FullName,
    RegisteredAt,
}

#[derive(Iden)]
enum Devices {
    Table,
    Id,
    OwnerId,
    Name,
    RegisteredAt,
    LastSeen,
}

#[derive(Iden)]
enum Games {
    Table,
    Id,
    Code,
    DeviceId,
    PlayerId,
    Difficulty,
    Status,
    CreatedAt,
    StartedAt,
    CompletedAt,
    TotalStrokes,
    CurrentHole,
    LockVersion,
}

#[derive(Iden)]
enum ShotResults {
    Table,
    Id,
    GameId,
    HoleNumber,
    Strokes,
    Revolutions,
    Completed,
    RecordedAt,
}

#[derive(Iden)]
enum LeaderboardEntries {
    Table,
    Id,
    EntryDate,
    Difficulty,
    PlayerId,
    TotalStrokes,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // players (ids are assigned by the messenger integration, not the DB)
        manager
            .create_table(
                Table::create()
                    .table(Players::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Players::Id)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Players::Username).string().null())
                    .col(ColumnDef::new(Players::FullName).string().null())
                    .col(
                        ColumnDef::new(Players::RegisteredAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // devices
        manager
            .create_table(
                Table::create()
                    .table(Devices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Devices::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Devices::OwnerId).big_integer().null())
                    .col(ColumnDef::new(Devices::Name).string().null())
                    .col(
                        ColumnDef::new(Devices::RegisteredAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Devices::LastSeen)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_devices_owner_id")
                            .from(Devices::Table, Devices::OwnerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // games
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Games::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Games::Code).string().not_null())
                    .col(ColumnDef::new(Games::DeviceId).string().not_null())
                    .col(ColumnDef::new(Games::PlayerId).big_integer().not_null())
                    .col(ColumnDef::new(Games::Difficulty).small_integer().not_null())
                    .col(
                        ColumnDef::new(Games::Status)
                            .string_len(16)
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(Games::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Games::StartedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Games::CompletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Games::TotalStrokes)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Games::CurrentHole)
                            .small_integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(Games::LockVersion)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_games_device_id")
                            .from(Games::Table, Games::DeviceId)
                            .to(Devices::Table, Devices::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_games_player_id")
                            .from(Games::Table, Games::PlayerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_games_code")
                    .table(Games::Table)
                    .col(Games::Code)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // shot_results
        manager
            .create_table(
                Table::create()
                    .table(ShotResults::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ShotResults::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(ShotResults::GameId).big_integer().not_null())
                    .col(
                        ColumnDef::new(ShotResults::HoleNumber)
                            .small_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ShotResults::Strokes).integer().not_null())
                    .col(ColumnDef::new(ShotResults::Revolutions).double().not_null())
                    .col(
                        ColumnDef::new(ShotResults::Completed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ShotResults::RecordedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shot_results_game_id")
                            .from(ShotResults::Table, ShotResults::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_shot_results_game_hole")
                    .table(ShotResults::Table)
                    .col(ShotResults::GameId)
                    .col(ShotResults::HoleNumber)
                    .to_owned(),
            )
            .await?;

        // leaderboard_entries
        manager
            .create_table(
                Table::create()
                    .table(LeaderboardEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LeaderboardEntries::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(LeaderboardEntries::EntryDate).date().not_null())
                    .col(
                        ColumnDef::new(LeaderboardEntries::Difficulty)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LeaderboardEntries::PlayerId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LeaderboardEntries::TotalStrokes)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LeaderboardEntries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_leaderboard_entries_player_id")
                            .from(LeaderboardEntries::Table, LeaderboardEntries::PlayerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_leaderboard_difficulty_date")
                    .table(LeaderboardEntries::Table)
                    .col(LeaderboardEntries::Difficulty)
                    .col(LeaderboardEntries::EntryDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop in reverse dependency order
        manager
            .drop_table(Table::drop().table(LeaderboardEntries::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ShotResults::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Games::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Devices::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Players::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}
