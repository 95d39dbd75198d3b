use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "players")]
pub struct Model {
    #[sea_orm(
        primary_key,
        auto_increment = false,
        column_type = "String(StringLen::N(64))"
    )]
    pub riot_id: String,
    pub irl_name: String,
    pub team: String,
    pub rank: String,
    pub role: String,
    pub main: String,
    pub acs: f64,
    pub kdr: f64,
    pub damage_per_round: f64,
    pub hs: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
