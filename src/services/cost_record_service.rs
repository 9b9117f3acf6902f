use chrono::{NaiveTime, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use tracing::info;

use crate::database::entities::{cost_records, crops};
use crate::errors::{FarmError, FarmResult};
use crate::services::validation;

/// Payload for creating or fully replacing a cost record. An omitted
/// `transaction_date` defaults to the current time.
#[derive(Clone, Debug, Default)]
pub struct CostRecordInput {
    pub crop_id: i32,
    pub category: String,
    pub description: Option<String>,
    pub amount: String,
    pub transaction_date: Option<String>,
    pub notes: Option<String>,
}

#[derive(Clone)]
pub struct CostRecordService {
    db: DatabaseConnection,
}

impl CostRecordService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> FarmResult<Vec<cost_records::Model>> {
        let records = cost_records::Entity::find()
            .order_by_asc(cost_records::Column::Id)
            .all(&self.db)
            .await?;
        Ok(records)
    }

    pub async fn get(&self, id: i32) -> FarmResult<cost_records::Model> {
        cost_records::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| FarmError::not_found("cost record", id))
    }

    pub async fn create(&self, input: CostRecordInput) -> FarmResult<cost_records::Model> {
        let parsed = validate(&self.db, &input).await?;

        let record = cost_records::ActiveModel {
            crop_id: Set(input.crop_id),
            category: Set(parsed.category),
            description: Set(parsed.description),
            amount: Set(parsed.amount),
            transaction_date: Set(parsed.transaction_date),
            notes: Set(parsed.notes),
            ..Default::default()
        };

        let record = record.insert(&self.db).await?;
        info!(record_id = record.id, crop_id = record.crop_id, "created cost record");
        Ok(record)
    }

    /// Full-row replace: every editable column is rewritten from the payload,
    /// so an omitted transaction date is reset to now.
    pub async fn update(&self, id: i32, input: CostRecordInput) -> FarmResult<cost_records::Model> {
        let existing = self.get(id).await?;
        let parsed = validate(&self.db, &input).await?;

        let mut record: cost_records::ActiveModel = existing.into();
        record.crop_id = Set(input.crop_id);
        record.category = Set(parsed.category);
        record.description = Set(parsed.description);
        record.amount = Set(parsed.amount);
        record.transaction_date = Set(parsed.transaction_date);
        record.notes = Set(parsed.notes);

        Ok(record.update(&self.db).await?)
    }

    pub async fn delete(&self, id: i32) -> FarmResult<()> {
        self.get(id).await?;
        cost_records::Entity::delete_by_id(id).exec(&self.db).await?;
        info!(record_id = id, "deleted cost record");
        Ok(())
    }
}

struct ParsedCost {
    category: String,
    description: Option<String>,
    amount: f64,
    transaction_date: chrono::DateTime<Utc>,
    notes: Option<String>,
}

async fn validate(db: &DatabaseConnection, input: &CostRecordInput) -> FarmResult<ParsedCost> {
    let category = validation::require_text("category", &input.category)?;
    let amount = validation::parse_positive("amount", &input.amount)?;
    let transaction_date =
        match validation::parse_optional_date("transaction_date", input.transaction_date.as_deref())? {
            Some(date) => date.and_time(NaiveTime::MIN).and_utc(),
            None => Utc::now(),
        };

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

    Ok(ParsedCost {
        category,
        description: validation::optional_text(input.description.as_deref()),
        amount,
        transaction_date,
        notes: validation::optional_text(input.notes.as_deref()),
    })
}
