use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::services::{
    CostRecordService, CropService, FieldService, LabourRecordService, LabourService,
    ReportService,
};

/// Shared application context exposing the entity services and reporting to
/// whatever presentation layer sits on top (CLI today).
#[derive(Clone)]
pub struct AppContext {
    db: DatabaseConnection,
    field_service: Arc<FieldService>,
    crop_service: Arc<CropService>,
    labour_service: Arc<LabourService>,
    labour_record_service: Arc<LabourRecordService>,
    cost_record_service: Arc<CostRecordService>,
    report_service: Arc<ReportService>,
}

impl AppContext {
    pub fn new(db: DatabaseConnection) -> Self {
        let field_service = Arc::new(FieldService::new(db.clone()));
        let crop_service = Arc::new(CropService::new(db.clone()));
        let labour_service = Arc::new(LabourService::new(db.clone()));
        let labour_record_service = Arc::new(LabourRecordService::new(db.clone()));
        let cost_record_service = Arc::new(CostRecordService::new(db.clone()));
        let report_service = Arc::new(ReportService::new(db.clone()));

        Self {
            db,
            field_service,
            crop_service,
            labour_service,
            labour_record_service,
            cost_record_service,
            report_service,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn field_service(&self) -> Arc<FieldService> {
        self.field_service.clone()
    }

    pub fn crop_service(&self) -> Arc<CropService> {
        self.crop_service.clone()
    }

    pub fn labour_service(&self) -> Arc<LabourService> {
        self.labour_service.clone()
    }

    pub fn labour_record_service(&self) -> Arc<LabourRecordService> {
        self.labour_record_service.clone()
    }

    pub fn cost_record_service(&self) -> Arc<CostRecordService> {
        self.cost_record_service.clone()
    }

    pub fn report_service(&self) -> Arc<ReportService> {
        self.report_service.clone()
    }
}
