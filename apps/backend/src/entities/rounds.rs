use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::card_suit::CardSuit;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rounds")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "game_id")]
    pub game_id: i64,
    #[sea_orm(column_name = "sequence_number", column_type = "SmallInteger")]
    pub sequence_number: i16,
    #[sea_orm(column_name = "shape_name")]
    pub shape_name: String,
    #[sea_orm(column_name = "trump_suit")]
    pub trump_suit: Option<CardSuit>,
    #[sea_orm(column_name = "trump_rank", column_type = "SmallInteger", nullable)]
    pub trump_rank: Option<i16>,
    #[sea_orm(column_name = "is_current")]
    pub is_current: bool,
    #[sea_orm(column_name = "dealer_id")]
    pub dealer_id: i64,
    #[sea_orm(column_name = "opening_player_id")]
    pub opening_player_id: i64,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::games::Entity",
        from = "Column::GameId",
        to = "super::games::Column::Id",
        on_delete = "Cascade"
    )]
    Game,
    #[sea_orm(has_many = "super::dealings::Entity")]
    Dealings,
    #[sea_orm(has_many = "super::entries::Entity")]
    Entries,
}

impl Related<super::games::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Game.def()
    }
}

impl Related<super::dealings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Dealings.def()
    }
}

impl Related<super::entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Entries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
