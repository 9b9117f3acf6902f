use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One planting-to-harvest cycle on a field.
///
/// Quantities are kilograms. `actual_yield` stays unset until harvest; revenue
/// derivation treats an unset yield as zero. Owns labour and cost records,
/// both removed when the crop is deleted.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "crops")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub field_id: i32,
    pub crop_type: String,
    pub variety: Option<String>,
    pub seeding_date: ChronoDate,
    pub expected_harvest_date: Option<ChronoDate>,
    pub actual_harvest_date: Option<ChronoDate>,
    pub quantity_seeded: f64,
    pub expected_yield: Option<f64>,
    pub actual_yield: Option<f64>,
    pub status: String, // 'Growing', 'Harvested', 'Failed'
    pub notes: Option<String>,
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::fields::Entity",
        from = "Column::FieldId",
        to = "super::fields::Column::Id"
    )]
    Fields,
    #[sea_orm(has_many = "super::labour_records::Entity")]
    LabourRecords,
    #[sea_orm(has_many = "super::cost_records::Entity")]
    CostRecords,
}

impl Related<super::fields::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fields.def()
    }
}

impl Related<super::labour_records::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LabourRecords.def()
    }
}

impl Related<super::cost_records::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CostRecords.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CropStatus {
    Growing,
    Harvested,
    Failed,
}

impl CropStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CropStatus::Growing => "Growing",
            CropStatus::Harvested => "Harvested",
            CropStatus::Failed => "Failed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Growing" => Some(CropStatus::Growing),
            "Harvested" => Some(CropStatus::Harvested),
            "Failed" => Some(CropStatus::Failed),
            _ => None,
        }
    }
}

impl Default for CropStatus {
    fn default() -> Self {
        CropStatus::Growing
    }
}

impl Model {
    pub fn is_harvested(&self) -> bool {
        self.status == CropStatus::Harvested.as_str()
    }

    pub fn is_growing(&self) -> bool {
        self.status == CropStatus::Growing.as_str()
    }
}
