use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::card_suit::CardSuit;

/// A dealt card instance. `entry_id` stays null until the card is played.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cards")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "dealing_id")]
    pub dealing_id: i64,
    pub suit: CardSuit,
    #[sea_orm(column_type = "SmallInteger")]
    pub rank: i16,
    #[sea_orm(column_name = "entry_id")]
    pub entry_id: Option<i64>,
    #[sea_orm(column_name = "play_position", column_type = "SmallInteger", nullable)]
    pub play_position: Option<i16>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::dealings::Entity",
        from = "Column::DealingId",
        to = "super::dealings::Column::Id",
        on_delete = "Cascade"
    )]
    Dealing,
    #[sea_orm(
        belongs_to = "super::entries::Entity",
        from = "Column::EntryId",
        to = "super::entries::Column::Id"
    )]
    Entry,
}

impl Related<super::dealings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Dealing.def()
    }
}

impl Related<super::entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Entry.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
