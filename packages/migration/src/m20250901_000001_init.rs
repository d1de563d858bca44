use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Users {
    Table,
    Id,
    Username,
    Email,
    Elo,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Games {
    Table,
    Id,
    GameType,
    PlayersNumber,
    RngSeed,
    RotationStart,
    IsFinished,
    CreatedAt,
    FinishedAt,
}

#[derive(Iden)]
enum GamePlayers {
    Table,
    Id,
    GameId,
    UserId,
    Seat,
}

#[derive(Iden)]
enum GameWinners {
    Table,
    Id,
    GameId,
    UserId,
}

#[derive(Iden)]
enum Rounds {
    Table,
    Id,
    GameId,
    SequenceNumber,
    ShapeName,
    TrumpSuit,
    TrumpRank,
    IsCurrent,
    DealerId,
    OpeningPlayerId,
    CreatedAt,
}

#[derive(Iden)]
enum Dealings {
    Table,
    Id,
    RoundId,
    UserId,
    Bid,
    ActualBid,
    Score,
}

#[derive(Iden)]
enum Entries {
    Table,
    Id,
    RoundId,
    OwnerId,
    TrickNo,
    IsFinished,
    CreatedAt,
    FinishedAt,
}

#[derive(Iden)]
enum Cards {
    Table,
    Id,
    DealingId,
    Suit,
    Rank,
    EntryId,
    PlayPosition,
}

fn pk<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .big_integer()
        .not_null()
        .primary_key()
        .auto_increment()
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // users
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk(Users::Id))
                    .col(ColumnDef::new(Users::Username).string().not_null())
                    .col(ColumnDef::new(Users::Email).string().not_null())
                    .col(ColumnDef::new(Users::Elo).integer().not_null().default(1000))
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_users_username")
                    .table(Users::Table)
                    .col(Users::Username)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_users_email")
                    .table(Users::Table)
                    .col(Users::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // games
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(pk(Games::Id))
                    .col(ColumnDef::new(Games::GameType).string_len(16).not_null())
                    .col(
                        ColumnDef::new(Games::PlayersNumber)
                            .small_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Games::RngSeed).big_integer().not_null())
                    .col(
                        ColumnDef::new(Games::RotationStart)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Games::IsFinished)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Games::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Games::FinishedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        // game_players
        manager
            .create_table(
                Table::create()
                    .table(GamePlayers::Table)
                    .if_not_exists()
                    .col(pk(GamePlayers::Id))
                    .col(ColumnDef::new(GamePlayers::GameId).big_integer().not_null())
                    .col(ColumnDef::new(GamePlayers::UserId).big_integer().not_null())
                    .col(ColumnDef::new(GamePlayers::Seat).small_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_players_game_id")
                            .from(GamePlayers::Table, GamePlayers::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_players_user_id")
                            .from(GamePlayers::Table, GamePlayers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_game_players_game_user")
                    .table(GamePlayers::Table)
                    .col(GamePlayers::GameId)
                    .col(GamePlayers::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_game_players_game_seat")
                    .table(GamePlayers::Table)
                    .col(GamePlayers::GameId)
                    .col(GamePlayers::Seat)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // game_winners
        manager
            .create_table(
                Table::create()
                    .table(GameWinners::Table)
                    .if_not_exists()
                    .col(pk(GameWinners::Id))
                    .col(ColumnDef::new(GameWinners::GameId).big_integer().not_null())
                    .col(ColumnDef::new(GameWinners::UserId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_winners_game_id")
                            .from(GameWinners::Table, GameWinners::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_winners_user_id")
                            .from(GameWinners::Table, GameWinners::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_game_winners_game_user")
                    .table(GameWinners::Table)
                    .col(GameWinners::GameId)
                    .col(GameWinners::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // rounds
        manager
            .create_table(
                Table::create()
                    .table(Rounds::Table)
                    .if_not_exists()
                    .col(pk(Rounds::Id))
                    .col(ColumnDef::new(Rounds::GameId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Rounds::SequenceNumber)
                            .small_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Rounds::ShapeName).string_len(8).not_null())
                    .col(ColumnDef::new(Rounds::TrumpSuit).string_len(1))
                    .col(ColumnDef::new(Rounds::TrumpRank).small_integer())
                    .col(
                        ColumnDef::new(Rounds::IsCurrent)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Rounds::DealerId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Rounds::OpeningPlayerId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Rounds::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rounds_game_id")
                            .from(Rounds::Table, Rounds::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rounds_dealer_id")
                            .from(Rounds::Table, Rounds::DealerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rounds_opening_player_id")
                            .from(Rounds::Table, Rounds::OpeningPlayerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_rounds_game_sequence")
                    .table(Rounds::Table)
                    .col(Rounds::GameId)
                    .col(Rounds::SequenceNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_rounds_game_current")
                    .table(Rounds::Table)
                    .col(Rounds::GameId)
                    .col(Rounds::IsCurrent)
                    .to_owned(),
            )
            .await?;

        // dealings
        manager
            .create_table(
                Table::create()
                    .table(Dealings::Table)
                    .if_not_exists()
                    .col(pk(Dealings::Id))
                    .col(ColumnDef::new(Dealings::RoundId).big_integer().not_null())
                    .col(ColumnDef::new(Dealings::UserId).big_integer().not_null())
                    .col(ColumnDef::new(Dealings::Bid).small_integer())
                    .col(ColumnDef::new(Dealings::ActualBid).small_integer())
                    .col(ColumnDef::new(Dealings::Score).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dealings_round_id")
                            .from(Dealings::Table, Dealings::RoundId)
                            .to(Rounds::Table, Rounds::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dealings_user_id")
                            .from(Dealings::Table, Dealings::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_dealings_round_user")
                    .table(Dealings::Table)
                    .col(Dealings::RoundId)
                    .col(Dealings::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // entries (tricks)
        manager
            .create_table(
                Table::create()
                    .table(Entries::Table)
                    .if_not_exists()
                    .col(pk(Entries::Id))
                    .col(ColumnDef::new(Entries::RoundId).big_integer().not_null())
                    .col(ColumnDef::new(Entries::OwnerId).big_integer().not_null())
                    .col(ColumnDef::new(Entries::TrickNo).small_integer().not_null())
                    .col(
                        ColumnDef::new(Entries::IsFinished)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Entries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Entries::FinishedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_entries_round_id")
                            .from(Entries::Table, Entries::RoundId)
                            .to(Rounds::Table, Rounds::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_entries_owner_id")
                            .from(Entries::Table, Entries::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_entries_round_trick")
                    .table(Entries::Table)
                    .col(Entries::RoundId)
                    .col(Entries::TrickNo)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // cards (dealt instances)
        manager
            .create_table(
                Table::create()
                    .table(Cards::Table)
                    .if_not_exists()
                    .col(pk(Cards::Id))
                    .col(ColumnDef::new(Cards::DealingId).big_integer().not_null())
                    .col(ColumnDef::new(Cards::Suit).string_len(1).not_null())
                    .col(ColumnDef::new(Cards::Rank).small_integer().not_null())
                    .col(ColumnDef::new(Cards::EntryId).big_integer())
                    .col(ColumnDef::new(Cards::PlayPosition).small_integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cards_dealing_id")
                            .from(Cards::Table, Cards::DealingId)
                            .to(Dealings::Table, Dealings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cards_entry_id")
                            .from(Cards::Table, Cards::EntryId)
                            .to(Entries::Table, Entries::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_cards_dealing_id")
                    .table(Cards::Table)
                    .col(Cards::DealingId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_cards_entry_id")
                    .table(Cards::Table)
                    .col(Cards::EntryId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cards::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Entries::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Dealings::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Rounds::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GameWinners::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GamePlayers::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Games::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}
