use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One expense entry against a crop (seeds, fertilizer, pesticide, ...).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cost_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub crop_id: i32,
    pub category: String,
    pub description: Option<String>,
    pub amount: f64,
    pub transaction_date: ChronoDateTimeUtc,
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::crops::Entity",
        from = "Column::CropId",
        to = "super::crops::Column::Id"
    )]
    Crops,
}

impl Related<super::crops::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Crops.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
