pub mod cost_records;
pub mod crops;
pub mod fields;
pub mod labour_records;
pub mod labours;

pub use crops::CropStatus;
pub use labours::LabourStatus;
