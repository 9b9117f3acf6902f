//! Input parsing and validation for CRUD payloads.
//!
//! Payload fields for numbers and dates arrive as raw strings from the entry
//! boundary. These helpers turn them into typed values, producing a
//! `Validation` error that names the offending field.

use chrono::NaiveDate;

use crate::database::entities::{CropStatus, LabourStatus};
use crate::errors::{FarmError, FarmResult};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Required free-text field: trimmed, must be non-empty.
pub fn require_text(field: &str, value: &str) -> FarmResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FarmError::invalid_field(field, "is required"));
    }
    Ok(trimmed.to_string())
}

/// Optional free-text field: trimmed, empty collapses to None.
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(String::from)
}

/// Required numeric field that must parse and be strictly positive.
pub fn parse_positive(field: &str, value: &str) -> FarmResult<f64> {
    let parsed: f64 = value
        .trim()
        .parse()
        .map_err(|_| FarmError::invalid_field(field, "must be a number"))?;
    if !parsed.is_finite() || parsed <= 0.0 {
        return Err(FarmError::invalid_field(field, "must be a positive number"));
    }
    Ok(parsed)
}

/// Optional numeric field that must parse and be non-negative when present.
pub fn parse_optional_non_negative(field: &str, value: Option<&str>) -> FarmResult<Option<f64>> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(raw) => {
            let parsed: f64 = raw
                .parse()
                .map_err(|_| FarmError::invalid_field(field, "must be a number"))?;
            if !parsed.is_finite() || parsed < 0.0 {
                return Err(FarmError::invalid_field(field, "must not be negative"));
            }
            Ok(Some(parsed))
        }
        None => Ok(None),
    }
}

/// Required calendar date in `YYYY-MM-DD` form.
pub fn parse_date(field: &str, value: &str) -> FarmResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| FarmError::invalid_field(field, "must be a date in YYYY-MM-DD form"))
}

/// Optional calendar date; empty input collapses to None.
pub fn parse_optional_date(field: &str, value: Option<&str>) -> FarmResult<Option<NaiveDate>> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(raw) => parse_date(field, raw).map(Some),
        None => Ok(None),
    }
}

/// Crop status, defaulting to Growing when the payload leaves it out.
pub fn parse_crop_status(value: Option<&str>) -> FarmResult<CropStatus> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(raw) => CropStatus::parse(raw).ok_or_else(|| {
            FarmError::invalid_field("status", "must be one of Growing, Harvested, Failed")
        }),
        None => Ok(CropStatus::default()),
    }
}

/// Labour status, defaulting to Active when the payload leaves it out.
pub fn parse_labour_status(value: Option<&str>) -> FarmResult<LabourStatus> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(raw) => LabourStatus::parse(raw)
            .ok_or_else(|| FarmError::invalid_field("status", "must be Active or Inactive")),
        None => Ok(LabourStatus::default()),
    }
}
