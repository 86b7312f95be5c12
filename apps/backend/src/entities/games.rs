use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::items::Variant;

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum GameVariant {
    #[sea_orm(string_value = "FOREST")]
    Forest,
    #[sea_orm(string_value = "TAVERN")]
    Tavern,
}

impl From<Variant> for GameVariant {
    fn from(variant: Variant) -> Self {
        match variant {
            Variant::Forest => GameVariant::Forest,
            Variant::Tavern => GameVariant::Tavern,
        }
    }
}

impl From<GameVariant> for Variant {
    fn from(variant: GameVariant) -> Self {
        match variant {
            GameVariant::Forest => Variant::Forest,
            GameVariant::Tavern => Variant::Tavern,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub variant: GameVariant,
    /// Grid cells as a JSON array of columns, row codes nested inside.
    #[sea_orm(column_type = "Text")]
    pub grid: String,
    pub score: i64,
    pub moves: i32,
    #[sea_orm(column_name = "next_item", column_type = "SmallInteger")]
    pub next_item: i16,
    #[sea_orm(column_name = "game_over")]
    pub game_over: bool,
    #[sea_orm(column_name = "rng_seed")]
    pub rng_seed: i64,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
