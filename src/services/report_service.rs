use std::collections::{BTreeMap, HashMap};

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use serde::Serialize;

use crate::database::entities::{
    cost_records, crops, fields, labour_records, labours, CropStatus,
};
use crate::errors::FarmResult;
use crate::services::metrics;

/// Headline counts and money totals for the landing view.
///
/// Revenue is summed over Harvested crops only, while costs are summed over
/// every crop regardless of status. That asymmetry is inherited behaviour,
/// kept as-is.
#[derive(Clone, Debug, Serialize)]
pub struct DashboardSummary {
    pub total_fields: u64,
    pub total_crops: u64,
    pub active_crops: u64,
    pub total_labours: u64,
    pub total_revenue: f64,
    pub total_costs: f64,
    pub gross_profit: f64,
}

/// One row of the crop-wise profit table (Harvested crops only).
#[derive(Clone, Debug, Serialize)]
pub struct CropProfitRow {
    pub crop_type: String,
    pub field: String,
    pub revenue: f64,
    pub cost: f64,
    pub profit: f64,
    #[serde(rename = "yield")]
    pub actual_yield: Option<f64>,
}

/// Cost rollup for one labour across all their work records.
#[derive(Clone, Debug, Serialize)]
pub struct LabourCostRow {
    pub name: String,
    pub total_cost: f64,
}

/// Whole-farm report: totals over all crops plus the per-crop and per-labour
/// breakdowns. Unlike the dashboard, revenue here counts any crop with a
/// recorded actual yield, whatever its status.
#[derive(Clone, Debug, Serialize)]
pub struct FarmReport {
    pub total_revenue: f64,
    pub total_costs: f64,
    pub total_profit: f64,
    pub crop_profits: Vec<CropProfitRow>,
    pub labour_costs: Vec<LabourCostRow>,
}

/// Parallel sequences for chart rendering, one entry per crop in id order.
#[derive(Clone, Debug, Serialize)]
pub struct CropStatsFeed {
    pub labels: Vec<String>,
    pub revenue: Vec<f64>,
    pub costs: Vec<f64>,
    pub profit: Vec<f64>,
}

/// Read-only aggregation over the whole entity store. Everything is
/// recomputed per call; the rows are the single source of truth.
#[derive(Clone)]
pub struct ReportService {
    db: DatabaseConnection,
}

impl ReportService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn dashboard_summary(&self) -> FarmResult<DashboardSummary> {
        let total_fields = fields::Entity::find().count(&self.db).await?;
        let total_crops = crops::Entity::find().count(&self.db).await?;
        let total_labours = labours::Entity::find().count(&self.db).await?;
        let active_crops = crops::Entity::find()
            .filter(crops::Column::Status.eq(CropStatus::Growing.as_str()))
            .count(&self.db)
            .await?;

        let rows = self.load_rows().await?;

        let total_revenue: f64 = rows
            .crops
            .iter()
            .filter(|crop| crop.is_harvested())
            .map(metrics::revenue)
            .sum();
        let total_costs: f64 = rows.crops.iter().map(|crop| rows.crop_cost(crop.id)).sum();

        Ok(DashboardSummary {
            total_fields,
            total_crops,
            active_crops,
            total_labours,
            total_revenue,
            total_costs,
            gross_profit: total_revenue - total_costs,
        })
    }

    pub async fn reports(&self) -> FarmResult<FarmReport> {
        let rows = self.load_rows().await?;

        let field_names: HashMap<i32, String> = fields::Entity::find()
            .all(&self.db)
            .await?
            .into_iter()
            .map(|field| (field.id, field.name))
            .collect();

        let total_revenue: f64 = rows.crops.iter().map(metrics::revenue).sum();
        let total_costs: f64 = rows.crops.iter().map(|crop| rows.crop_cost(crop.id)).sum();

        let crop_profits = rows
            .crops
            .iter()
            .filter(|crop| crop.is_harvested())
            .map(|crop| {
                let revenue = metrics::revenue(crop);
                let cost = rows.crop_cost(crop.id);
                CropProfitRow {
                    crop_type: crop.crop_type.clone(),
                    field: field_names.get(&crop.field_id).cloned().unwrap_or_default(),
                    revenue,
                    cost,
                    profit: revenue - cost,
                    actual_yield: crop.actual_yield,
                }
            })
            .collect();

        // Group work records by labour; only labours with at least one record
        // appear, in id order
        let mut rollup: BTreeMap<i32, f64> = BTreeMap::new();
        for record in &rows.labour_records {
            if let Some(daily_wage) = rows.wages.get(&record.labour_id) {
                *rollup.entry(record.labour_id).or_insert(0.0) +=
                    metrics::labour_record_cost(record.hours_worked, *daily_wage);
            }
        }
        let labour_costs = rollup
            .into_iter()
            .filter_map(|(labour_id, total_cost)| {
                rows.labour_names.get(&labour_id).map(|name| LabourCostRow {
                    name: name.clone(),
                    total_cost,
                })
            })
            .collect();

        Ok(FarmReport {
            total_revenue,
            total_costs,
            total_profit: total_revenue - total_costs,
            crop_profits,
            labour_costs,
        })
    }

    pub async fn crop_stats(&self) -> FarmResult<CropStatsFeed> {
        let rows = self.load_rows().await?;

        let mut feed = CropStatsFeed {
            labels: Vec::with_capacity(rows.crops.len()),
            revenue: Vec::with_capacity(rows.crops.len()),
            costs: Vec::with_capacity(rows.crops.len()),
            profit: Vec::with_capacity(rows.crops.len()),
        };

        for crop in &rows.crops {
            let revenue = metrics::revenue(crop);
            let cost = rows.crop_cost(crop.id);
            feed.labels.push(crop.crop_type.clone());
            feed.revenue.push(revenue);
            feed.costs.push(cost);
            feed.profit.push(revenue - cost);
        }

        Ok(feed)
    }

    async fn load_rows(&self) -> FarmResult<LoadedRows> {
        let crops = crops::Entity::find()
            .order_by_asc(crops::Column::Id)
            .all(&self.db)
            .await?;
        let cost_records = cost_records::Entity::find().all(&self.db).await?;
        let labour_records = labour_records::Entity::find().all(&self.db).await?;
        let labour_rows = labours::Entity::find().all(&self.db).await?;

        let mut costs_by_crop: HashMap<i32, Vec<cost_records::Model>> = HashMap::new();
        for record in cost_records {
            costs_by_crop.entry(record.crop_id).or_default().push(record);
        }

        let mut work_by_crop: HashMap<i32, Vec<labour_records::Model>> = HashMap::new();
        for record in labour_records.iter().cloned() {
            work_by_crop.entry(record.crop_id).or_default().push(record);
        }

        let mut wages = HashMap::new();
        let mut labour_names = HashMap::new();
        for labour in labour_rows {
            wages.insert(labour.id, labour.daily_wage);
            labour_names.insert(labour.id, labour.name);
        }

        Ok(LoadedRows {
            crops,
            costs_by_crop,
            work_by_crop,
            labour_records,
            wages,
            labour_names,
        })
    }
}

struct LoadedRows {
    crops: Vec<crops::Model>,
    costs_by_crop: HashMap<i32, Vec<cost_records::Model>>,
    work_by_crop: HashMap<i32, Vec<labour_records::Model>>,
    labour_records: Vec<labour_records::Model>,
    wages: HashMap<i32, f64>,
    labour_names: HashMap<i32, String>,
}

impl LoadedRows {
    /// Material plus labour cost for one crop.
    fn crop_cost(&self, crop_id: i32) -> f64 {
        let material = self
            .costs_by_crop
            .get(&crop_id)
            .map(|records| metrics::total_cost(records))
            .unwrap_or(0.0);
        let labour = self
            .work_by_crop
            .get(&crop_id)
            .map(|records| {
                metrics::total_labour_cost(records, |labour_id| self.wages.get(&labour_id).copied())
            })
            .unwrap_or(0.0);
        material + labour
    }
}
