use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::info;

use crate::database::entities::{cost_records, crops, fields, labour_records, labours};
use crate::errors::{FarmError, FarmResult};
use crate::services::{metrics, validation};

/// Payload for creating or fully replacing a crop.
///
/// Dates and quantities are raw strings from the entry boundary. Optional
/// fields left as `None` are cleared on update (full-row replace); a missing
/// `status` falls back to the Growing default.
#[derive(Clone, Debug, Default)]
pub struct CropInput {
    pub field_id: i32,
    pub crop_type: String,
    pub variety: Option<String>,
    pub seeding_date: String,
    pub expected_harvest_date: Option<String>,
    pub actual_harvest_date: Option<String>,
    pub quantity_seeded: String,
    pub expected_yield: Option<String>,
    pub actual_yield: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

/// A crop with its related records and the derived financials computed from
/// them. Nothing here is stored; it is assembled per request.
#[derive(Clone, Debug)]
pub struct CropDetail {
    pub crop: crops::Model,
    pub cost_records: Vec<cost_records::Model>,
    /// Each labour record with its derived cost (0 when the labour row is gone)
    pub labour_records: Vec<(labour_records::Model, f64)>,
    pub total_cost: f64,
    pub total_labour_cost: f64,
    pub revenue: f64,
    pub gross_profit: f64,
}

#[derive(Clone)]
pub struct CropService {
    db: DatabaseConnection,
}

impl CropService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> FarmResult<Vec<crops::Model>> {
        let crops = crops::Entity::find()
            .order_by_asc(crops::Column::Id)
            .all(&self.db)
            .await?;
        Ok(crops)
    }

    pub async fn get(&self, id: i32) -> FarmResult<crops::Model> {
        crops::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| FarmError::not_found("crop", id))
    }

    /// The crop together with its expense and labour records and the derived
    /// cost/revenue/profit figures.
    pub async fn get_detail(&self, id: i32) -> FarmResult<CropDetail> {
        let crop = self.get(id).await?;

        let cost_records = cost_records::Entity::find()
            .filter(cost_records::Column::CropId.eq(id))
            .all(&self.db)
            .await?;

        let records = labour_records::Entity::find()
            .filter(labour_records::Column::CropId.eq(id))
            .all(&self.db)
            .await?;

        // Explicit lookup of the referenced labours; a dangling reference
        // degrades to a zero-cost record rather than an error
        let labour_ids: Vec<i32> = records.iter().map(|record| record.labour_id).collect();
        let wages: HashMap<i32, f64> = labours::Entity::find()
            .filter(labours::Column::Id.is_in(labour_ids))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|labour| (labour.id, labour.daily_wage))
            .collect();

        let total_cost = metrics::total_cost(&cost_records);
        let total_labour_cost =
            metrics::total_labour_cost(&records, |labour_id| wages.get(&labour_id).copied());
        let revenue = metrics::revenue(&crop);
        let gross_profit = metrics::gross_profit(revenue, total_cost, total_labour_cost);

        let labour_records = records
            .into_iter()
            .map(|record| {
                let cost = match wages.get(&record.labour_id) {
                    Some(daily_wage) => metrics::labour_record_cost(record.hours_worked, *daily_wage),
                    None => 0.0,
                };
                (record, cost)
            })
            .collect();

        Ok(CropDetail {
            crop,
            cost_records,
            labour_records,
            total_cost,
            total_labour_cost,
            revenue,
            gross_profit,
        })
    }

    pub async fn create(&self, input: CropInput) -> FarmResult<crops::Model> {
        let parsed = validate(&self.db, &input).await?;

        let crop = crops::ActiveModel {
            field_id: Set(input.field_id),
            crop_type: Set(parsed.crop_type),
            variety: Set(parsed.variety),
            seeding_date: Set(parsed.seeding_date),
            expected_harvest_date: Set(parsed.expected_harvest_date),
            actual_harvest_date: Set(parsed.actual_harvest_date),
            quantity_seeded: Set(parsed.quantity_seeded),
            expected_yield: Set(parsed.expected_yield),
            actual_yield: Set(parsed.actual_yield),
            status: Set(parsed.status),
            notes: Set(parsed.notes),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let crop = crop.insert(&self.db).await?;
        info!(crop_id = crop.id, field_id = crop.field_id, "created crop");
        Ok(crop)
    }

    /// Full-row replace. Optional fields absent from the payload are cleared,
    /// so editing without `actual_yield` unsets a previously recorded yield.
    pub async fn update(&self, id: i32, input: CropInput) -> FarmResult<crops::Model> {
        let existing = self.get(id).await?;
        let parsed = validate(&self.db, &input).await?;

        let mut crop: crops::ActiveModel = existing.into();
        crop.field_id = Set(input.field_id);
        crop.crop_type = Set(parsed.crop_type);
        crop.variety = Set(parsed.variety);
        crop.seeding_date = Set(parsed.seeding_date);
        crop.expected_harvest_date = Set(parsed.expected_harvest_date);
        crop.actual_harvest_date = Set(parsed.actual_harvest_date);
        crop.quantity_seeded = Set(parsed.quantity_seeded);
        crop.expected_yield = Set(parsed.expected_yield);
        crop.actual_yield = Set(parsed.actual_yield);
        crop.status = Set(parsed.status);
        crop.notes = Set(parsed.notes);

        Ok(crop.update(&self.db).await?)
    }

    /// Deletes the crop and its labour and cost records in one transaction.
    pub async fn delete(&self, id: i32) -> FarmResult<()> {
        self.get(id).await?;

        let txn = self.db.begin().await?;
        delete_crop_rows(&txn, id).await?;
        txn.commit().await?;

        info!(crop_id = id, "deleted crop and its records");
        Ok(())
    }
}

/// Cascade step shared with the field cascade: removes a crop's dependent
/// records first, then the crop row itself. Child tables go before the parent
/// so the foreign keys hold at every point.
pub(crate) async fn delete_crop_rows<C: ConnectionTrait>(conn: &C, crop_id: i32) -> Result<(), DbErr> {
    labour_records::Entity::delete_many()
        .filter(labour_records::Column::CropId.eq(crop_id))
        .exec(conn)
        .await?;

    cost_records::Entity::delete_many()
        .filter(cost_records::Column::CropId.eq(crop_id))
        .exec(conn)
        .await?;

    crops::Entity::delete_by_id(crop_id).exec(conn).await?;
    Ok(())
}

struct ParsedCrop {
    crop_type: String,
    variety: Option<String>,
    seeding_date: chrono::NaiveDate,
    expected_harvest_date: Option<chrono::NaiveDate>,
    actual_harvest_date: Option<chrono::NaiveDate>,
    quantity_seeded: f64,
    expected_yield: Option<f64>,
    actual_yield: Option<f64>,
    status: String,
    notes: Option<String>,
}

async fn validate(db: &DatabaseConnection, input: &CropInput) -> FarmResult<ParsedCrop> {
    let crop_type = validation::require_text("crop_type", &input.crop_type)?;
    let seeding_date = validation::parse_date("seeding_date", &input.seeding_date)?;
    let expected_harvest_date = validation::parse_optional_date(
        "expected_harvest_date",
        input.expected_harvest_date.as_deref(),
    )?;
    let actual_harvest_date =
        validation::parse_optional_date("actual_harvest_date", input.actual_harvest_date.as_deref())?;
    let quantity_seeded = validation::parse_positive("quantity_seeded", &input.quantity_seeded)?;
    let expected_yield =
        validation::parse_optional_non_negative("expected_yield", input.expected_yield.as_deref())?;
    let actual_yield =
        validation::parse_optional_non_negative("actual_yield", input.actual_yield.as_deref())?;
    let status = validation::parse_crop_status(input.status.as_deref())?;

    // Every crop must reference an existing field; the create contract only
    // admits validation errors, so a dangling reference reports as one
    let field_exists = fields::Entity::find_by_id(input.field_id)
        .one(db)
        .await?
        .is_some();
    if !field_exists {
        return Err(FarmError::invalid_field(
            "field_id",
            "does not reference an existing field",
        ));
    }

    Ok(ParsedCrop {
        crop_type,
        variety: validation::optional_text(input.variety.as_deref()),
        seeding_date,
        expected_harvest_date,
        actual_harvest_date,
        quantity_seeded,
        expected_yield,
        actual_yield,
        status: status.as_str().to_string(),
        notes: validation::optional_text(input.notes.as_deref()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_utils::setup_test_db;
    use chrono::NaiveDate;
    use sea_orm::PaginatorTrait;

    async fn seed_crop_with_children(db: &DatabaseConnection) -> i32 {
        let field = fields::ActiveModel {
            name: Set("North".to_string()),
            area: Set(10.0),
            location: Set(None),
            created_at: Set(Utc::now()),
            ..Default::default()
        };
        let field = field.insert(db).await.unwrap();

        let crop = crops::ActiveModel {
            field_id: Set(field.id),
            crop_type: Set("Rice".to_string()),
            seeding_date: Set(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
            quantity_seeded: Set(50.0),
            status: Set("Growing".to_string()),
            created_at: Set(Utc::now()),
            ..Default::default()
        };
        let crop = crop.insert(db).await.unwrap();

        let labour = labours::ActiveModel {
            name: Set("Asha".to_string()),
            daily_wage: Set(100.0),
            status: Set("Active".to_string()),
            created_at: Set(Utc::now()),
            ..Default::default()
        };
        let labour = labour.insert(db).await.unwrap();

        let record = labour_records::ActiveModel {
            crop_id: Set(crop.id),
            labour_id: Set(labour.id),
            work_date: Set(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()),
            hours_worked: Set(8.0),
            ..Default::default()
        };
        record.insert(db).await.unwrap();

        let cost = cost_records::ActiveModel {
            crop_id: Set(crop.id),
            category: Set("Seeds".to_string()),
            amount: Set(200.0),
            transaction_date: Set(Utc::now()),
            ..Default::default()
        };
        cost.insert(db).await.unwrap();

        crop.id
    }

    #[tokio::test]
    async fn delete_crop_rows_removes_children_then_the_crop() {
        let db = setup_test_db().await;
        let crop_id = seed_crop_with_children(&db).await;

        delete_crop_rows(&db, crop_id).await.unwrap();

        assert_eq!(labour_records::Entity::find().count(&db).await.unwrap(), 0);
        assert_eq!(cost_records::Entity::find().count(&db).await.unwrap(), 0);
        assert_eq!(crops::Entity::find().count(&db).await.unwrap(), 0);
        // Parent field and the labour row survive
        assert_eq!(fields::Entity::find().count(&db).await.unwrap(), 1);
        assert_eq!(labours::Entity::find().count(&db).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn delete_crop_rows_on_a_childless_crop_is_fine() {
        let db = setup_test_db().await;
        let crop_id = seed_crop_with_children(&db).await;

        delete_crop_rows(&db, crop_id).await.unwrap();
        // The row is gone; running the routine for a missing crop deletes
        // nothing and does not error
        delete_crop_rows(&db, crop_id).await.unwrap();
    }
}
