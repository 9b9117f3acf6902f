//! Derived financial metrics for crops and labour records.
//!
//! Pure functions over entity rows; nothing here touches the database and
//! nothing is cached. Callers fetch the related rows and hand them in.

use crate::database::entities::{cost_records, crops, labour_records};

/// Fixed market price for valuing actual yield.
// Hard-coded on purpose; making this configurable needs product sign-off.
pub const MARKET_PRICE_PER_KG: f64 = 25.0;

/// An 8-hour day defines the hourly rate derived from a daily wage.
pub const WORK_DAY_HOURS: f64 = 8.0;

/// Cost of one labour record: hours worked at the labour's hourly rate.
pub fn labour_record_cost(hours_worked: f64, daily_wage: f64) -> f64 {
    hours_worked * (daily_wage / WORK_DAY_HOURS)
}

/// Sum of expense amounts for a crop. Empty sum is 0.
pub fn total_cost(cost_records: &[cost_records::Model]) -> f64 {
    cost_records.iter().map(|record| record.amount).sum()
}

/// Sum of labour record costs for a crop. A record whose labour cannot be
/// resolved contributes 0. Empty sum is 0.
pub fn total_labour_cost<F>(records: &[labour_records::Model], wage_for: F) -> f64
where
    F: Fn(i32) -> Option<f64>,
{
    records
        .iter()
        .map(|record| match wage_for(record.labour_id) {
            Some(daily_wage) => labour_record_cost(record.hours_worked, daily_wage),
            None => 0.0,
        })
        .sum()
}

/// Actual yield valued at the fixed market price; 0 while the yield is unset.
/// Depends only on the yield, not on the crop's status.
pub fn revenue(crop: &crops::Model) -> f64 {
    match crop.actual_yield {
        Some(actual_yield) => actual_yield * MARKET_PRICE_PER_KG,
        None => 0.0,
    }
}

pub fn gross_profit(revenue: f64, total_cost: f64, total_labour_cost: f64) -> f64 {
    revenue - (total_cost + total_labour_cost)
}
