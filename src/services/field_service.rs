use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::info;

use crate::database::entities::{crops, fields};
use crate::errors::{FarmError, FarmResult};
use crate::services::crop_service;
use crate::services::validation;

/// Payload for creating or fully replacing a field. Numeric input is carried
/// as the raw string from the entry boundary and parsed during validation.
#[derive(Clone, Debug, Default)]
pub struct FieldInput {
    pub name: String,
    pub area: String,
    pub location: Option<String>,
}

/// CRUD operations for fields, including the cascade that removes a field's
/// crops and their dependent records.
#[derive(Clone)]
pub struct FieldService {
    db: DatabaseConnection,
}

impl FieldService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> FarmResult<Vec<fields::Model>> {
        let fields = fields::Entity::find()
            .order_by_asc(fields::Column::Id)
            .all(&self.db)
            .await?;
        Ok(fields)
    }

    pub async fn get(&self, id: i32) -> FarmResult<fields::Model> {
        fields::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| FarmError::not_found("field", id))
    }

    pub async fn create(&self, input: FieldInput) -> FarmResult<fields::Model> {
        let (name, area, location) = validate(&input)?;

        let field = fields::ActiveModel {
            name: Set(name),
            area: Set(area),
            location: Set(location),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let field = field.insert(&self.db).await?;
        info!(field_id = field.id, "created field");
        Ok(field)
    }

    /// Full-row replace: every editable column is rewritten from the payload.
    pub async fn update(&self, id: i32, input: FieldInput) -> FarmResult<fields::Model> {
        let existing = self.get(id).await?;
        let (name, area, location) = validate(&input)?;

        let mut field: fields::ActiveModel = existing.into();
        field.name = Set(name);
        field.area = Set(area);
        field.location = Set(location);

        Ok(field.update(&self.db).await?)
    }

    /// Deletes the field and cascades to its crops, which in turn removes
    /// their labour and cost records. Runs in one transaction so a failure
    /// leaves no partial deletion behind.
    pub async fn delete(&self, id: i32) -> FarmResult<()> {
        self.get(id).await?;

        let txn = self.db.begin().await?;

        let crop_ids: Vec<i32> = crops::Entity::find()
            .filter(crops::Column::FieldId.eq(id))
            .all(&txn)
            .await?
            .into_iter()
            .map(|crop| crop.id)
            .collect();

        for crop_id in crop_ids {
            crop_service::delete_crop_rows(&txn, crop_id).await?;
        }

        fields::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        info!(field_id = id, "deleted field and its crops");
        Ok(())
    }
}

fn validate(input: &FieldInput) -> FarmResult<(String, f64, Option<String>)> {
    let name = validation::require_text("name", &input.name)?;
    let area = validation::parse_positive("area", &input.area)?;
    let location = validation::optional_text(input.location.as_deref());
    Ok((name, area, location))
}
