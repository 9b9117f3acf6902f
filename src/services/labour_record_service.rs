use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use tracing::info;

use crate::database::entities::{crops, labour_records, labours};
use crate::errors::{FarmError, FarmResult};
use crate::services::{metrics, validation};

/// Payload for creating or fully replacing a labour record.
#[derive(Clone, Debug, Default)]
pub struct LabourRecordInput {
    pub crop_id: i32,
    pub labour_id: i32,
    pub work_date: String,
    pub hours_worked: String,
    pub work_type: Option<String>,
    pub notes: Option<String>,
}

#[derive(Clone)]
pub struct LabourRecordService {
    db: DatabaseConnection,
}

impl LabourRecordService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> FarmResult<Vec<labour_records::Model>> {
        let records = labour_records::Entity::find()
            .order_by_asc(labour_records::Column::Id)
            .all(&self.db)
            .await?;
        Ok(records)
    }

    pub async fn get(&self, id: i32) -> FarmResult<labour_records::Model> {
        labour_records::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| FarmError::not_found("labour record", id))
    }

    /// Derived cost of one record: hours at the labour's hourly rate, looked
    /// up at read time. 0 when the labour row no longer resolves.
    pub async fn record_cost(&self, record: &labour_records::Model) -> FarmResult<f64> {
        let labour = labours::Entity::find_by_id(record.labour_id)
            .one(&self.db)
            .await?;
        Ok(match labour {
            Some(labour) => metrics::labour_record_cost(record.hours_worked, labour.daily_wage),
            None => 0.0,
        })
    }

    /// The store accepts any existing labour here, active or not; restricting
    /// the choice to active labours is the caller's concern
    /// (`LabourService::list_active`).
    pub async fn create(&self, input: LabourRecordInput) -> FarmResult<labour_records::Model> {
        let parsed = validate(&self.db, &input).await?;

        let record = labour_records::ActiveModel {
            crop_id: Set(input.crop_id),
            labour_id: Set(input.labour_id),
            work_date: Set(parsed.work_date),
            hours_worked: Set(parsed.hours_worked),
            work_type: Set(parsed.work_type),
            notes: Set(parsed.notes),
            ..Default::default()
        };

        let record = record.insert(&self.db).await?;
        info!(
            record_id = record.id,
            crop_id = record.crop_id,
            labour_id = record.labour_id,
            "created labour record"
        );
        Ok(record)
    }

    /// Full-row replace: every editable column is rewritten from the payload.
    pub async fn update(
        &self,
        id: i32,
        input: LabourRecordInput,
    ) -> FarmResult<labour_records::Model> {
        let existing = self.get(id).await?;
        let parsed = validate(&self.db, &input).await?;

        let mut record: labour_records::ActiveModel = existing.into();
        record.crop_id = Set(input.crop_id);
        record.labour_id = Set(input.labour_id);
        record.work_date = Set(parsed.work_date);
        record.hours_worked = Set(parsed.hours_worked);
        record.work_type = Set(parsed.work_type);
        record.notes = Set(parsed.notes);

        Ok(record.update(&self.db).await?)
    }

    pub async fn delete(&self, id: i32) -> FarmResult<()> {
        self.get(id).await?;
        labour_records::Entity::delete_by_id(id).exec(&self.db).await?;
        info!(record_id = id, "deleted labour record");
        Ok(())
    }
}

struct ParsedRecord {
    work_date: chrono::NaiveDate,
    hours_worked: f64,
    work_type: Option<String>,
    notes: Option<String>,
}

async fn validate(db: &DatabaseConnection, input: &LabourRecordInput) -> FarmResult<ParsedRecord> {
    let work_date = validation::parse_date("work_date", &input.work_date)?;
    let hours_worked = validation::parse_positive("hours_worked", &input.hours_worked)?;

    let crop_exists = crops::Entity::find_by_id(input.crop_id)
        .one(db)
        .await?
        .is_some();
    if !crop_exists {
        return Err(FarmError::invalid_field(
            "crop_id",
            "does not reference an existing crop",
        ));
    }

    let labour_exists = labours::Entity::find_by_id(input.labour_id)
        .one(db)
        .await?
        .is_some();
    if !labour_exists {
        return Err(FarmError::invalid_field(
            "labour_id",
            "does not reference an existing labour",
        ));
    }

    Ok(ParsedRecord {
        work_date,
        hours_worked,
        work_type: validation::optional_text(input.work_type.as_deref()),
        notes: validation::optional_text(input.notes.as_deref()),
    })
}
