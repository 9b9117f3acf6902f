use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A worker. The daily wage is for an 8-hour day; per-record labour costs are
/// derived from it at read time. Deleting a labour removes its work records.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "labours")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub designation: Option<String>,
    pub contact: Option<String>,
    pub daily_wage: f64,
    pub status: String, // 'Active', 'Inactive'
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::labour_records::Entity")]
    LabourRecords,
}

impl Related<super::labour_records::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LabourRecords.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabourStatus {
    Active,
    Inactive,
}

impl LabourStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LabourStatus::Active => "Active",
            LabourStatus::Inactive => "Inactive",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Active" => Some(LabourStatus::Active),
            "Inactive" => Some(LabourStatus::Inactive),
            _ => None,
        }
    }
}

impl Default for LabourStatus {
    fn default() -> Self {
        LabourStatus::Active
    }
}

impl Model {
    pub fn is_active(&self) -> bool {
        self.status == LabourStatus::Active.as_str()
    }
}
