pub mod cost_record_service;
pub mod crop_service;
pub mod field_service;
pub mod labour_record_service;
pub mod labour_service;
pub mod metrics;
pub mod report_service;
pub mod validation;

pub use cost_record_service::{CostRecordInput, CostRecordService};
pub use crop_service::{CropDetail, CropInput, CropService};
pub use field_service::{FieldInput, FieldService};
pub use labour_record_service::{LabourRecordInput, LabourRecordService};
pub use labour_service::{LabourInput, LabourService};
pub use report_service::{
    CropProfitRow, CropStatsFeed, DashboardSummary, FarmReport, LabourCostRow, ReportService,
};
