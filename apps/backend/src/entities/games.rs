use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "snake_case")]
pub enum GameType {
    #[sea_orm(string_value = "multiplayer")]
    Multiplayer,
    #[sea_orm(string_value = "single")]
    Single,
    #[sea_orm(string_value = "analysis")]
    Analysis,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "game_type")]
    pub game_type: GameType,
    #[sea_orm(column_name = "players_number", column_type = "SmallInteger")]
    pub players_number: i16,
    #[sea_orm(column_name = "rng_seed")]
    pub rng_seed: i64,
    #[sea_orm(column_name = "rotation_start", column_type = "SmallInteger")]
    pub rotation_start: i16,
    #[sea_orm(column_name = "is_finished")]
    pub is_finished: bool,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "finished_at")]
    pub finished_at: Option<OffsetDateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::game_players::Entity")]
    GamePlayers,
    #[sea_orm(has_many = "super::game_winners::Entity")]
    GameWinners,
    #[sea_orm(has_many = "super::rounds::Entity")]
    Rounds,
}

impl Related<super::game_players::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GamePlayers.def()
    }
}

impl Related<super::game_winners::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameWinners.def()
    }
}

impl Related<super::rounds::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rounds.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
