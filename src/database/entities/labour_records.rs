use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One day's work entry linking a crop and a labour.
///
/// The record's cost is not stored; it is derived at read time as
/// hours_worked x (daily_wage / 8) via an explicit lookup of the labour row.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "labour_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub crop_id: i32,
    pub labour_id: i32,
    pub work_date: ChronoDate,
    pub hours_worked: f64,
    pub work_type: Option<String>, // Seeding, Weeding, Harvesting, ...
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
    #[sea_orm(
        belongs_to = "super::labours::Entity",
        from = "Column::LabourId",
        to = "super::labours::Column::Id"
    )]
    Labours,
}

impl Related<super::crops::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Crops.def()
    }
}

impl Related<super::labours::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Labours.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
