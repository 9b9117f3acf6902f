use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::info;

use crate::database::entities::{labour_records, labours, LabourStatus};
use crate::errors::{FarmError, FarmResult};
use crate::services::validation;

/// Payload for creating or fully replacing a labour. A missing `status`
/// falls back to the Active default.
#[derive(Clone, Debug, Default)]
pub struct LabourInput {
    pub name: String,
    pub designation: Option<String>,
    pub contact: Option<String>,
    pub daily_wage: String,
    pub status: Option<String>,
}

#[derive(Clone)]
pub struct LabourService {
    db: DatabaseConnection,
}

impl LabourService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> FarmResult<Vec<labours::Model>> {
        let labours = labours::Entity::find()
            .order_by_asc(labours::Column::Id)
            .all(&self.db)
            .await?;
        Ok(labours)
    }

    /// The labours offered as valid choices when adding a labour record.
    /// The store itself does not reject records that name an inactive labour;
    /// this filter is the interface boundary only.
    pub async fn list_active(&self) -> FarmResult<Vec<labours::Model>> {
        let labours = labours::Entity::find()
            .filter(labours::Column::Status.eq(LabourStatus::Active.as_str()))
            .order_by_asc(labours::Column::Id)
            .all(&self.db)
            .await?;
        Ok(labours)
    }

    pub async fn get(&self, id: i32) -> FarmResult<labours::Model> {
        labours::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| FarmError::not_found("labour", id))
    }

    pub async fn create(&self, input: LabourInput) -> FarmResult<labours::Model> {
        let (name, designation, contact, daily_wage, status) = validate(&input)?;

        let labour = labours::ActiveModel {
            name: Set(name),
            designation: Set(designation),
            contact: Set(contact),
            daily_wage: Set(daily_wage),
            status: Set(status),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let labour = labour.insert(&self.db).await?;
        info!(labour_id = labour.id, "created labour");
        Ok(labour)
    }

    /// Full-row replace: every editable column is rewritten from the payload.
    pub async fn update(&self, id: i32, input: LabourInput) -> FarmResult<labours::Model> {
        let existing = self.get(id).await?;
        let (name, designation, contact, daily_wage, status) = validate(&input)?;

        let mut labour: labours::ActiveModel = existing.into();
        labour.name = Set(name);
        labour.designation = Set(designation);
        labour.contact = Set(contact);
        labour.daily_wage = Set(daily_wage);
        labour.status = Set(status);

        Ok(labour.update(&self.db).await?)
    }

    /// Deletes the labour and every work record referencing it.
    pub async fn delete(&self, id: i32) -> FarmResult<()> {
        self.get(id).await?;

        let txn = self.db.begin().await?;

        labour_records::Entity::delete_many()
            .filter(labour_records::Column::LabourId.eq(id))
            .exec(&txn)
            .await?;
        labours::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        info!(labour_id = id, "deleted labour and its records");
        Ok(())
    }
}

type ParsedLabour = (String, Option<String>, Option<String>, f64, String);

fn validate(input: &LabourInput) -> FarmResult<ParsedLabour> {
    let name = validation::require_text("name", &input.name)?;
    let daily_wage = validation::parse_positive("daily_wage", &input.daily_wage)?;
    let status = validation::parse_labour_status(input.status.as_deref())?;

    Ok((
        name,
        validation::optional_text(input.designation.as_deref()),
        validation::optional_text(input.contact.as_deref()),
        daily_wage,
        status.as_str().to_string(),
    ))
}
