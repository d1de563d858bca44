//! SeaORM adapters. Every function returns `DbErr`; repos map it to `DomainError`.

pub mod cards_sea;
pub mod dealings_sea;
pub mod entries_sea;
pub mod game_players_sea;
pub mod games_sea;
pub mod rounds_sea;
pub mod users_sea;
