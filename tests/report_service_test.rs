use farmledger::database::migrations::Migrator;
use farmledger::services::{
    CostRecordInput, CostRecordService, CropInput, CropService, FieldInput, FieldService,
    LabourInput, LabourRecordInput, LabourRecordService, LabourService, ReportService,
};
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

/// Create an in-memory SQLite database for testing
async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to test database");
    Migrator::up(&db, None).await.expect("Failed to run migrations");
    db
}

/// Two crops on one field:
///   - Rice, Harvested, yield 500 (revenue 12500), costs 200 + 200 labour
///   - Wheat, Growing, yield 100 recorded early, costs 50, no labour
/// plus a labour with no records at all.
async fn seed(db: &DatabaseConnection) {
    let fields = FieldService::new(db.clone());
    let crops = CropService::new(db.clone());
    let labours = LabourService::new(db.clone());
    let labour_records = LabourRecordService::new(db.clone());
    let cost_records = CostRecordService::new(db.clone());

    let field = fields
        .create(FieldInput {
            name: "North".to_string(),
            area: "10".to_string(),
            location: None,
        })
        .await
        .unwrap();

    let rice = crops
        .create(CropInput {
            field_id: field.id,
            crop_type: "Rice".to_string(),
            seeding_date: "2024-01-01".to_string(),
            quantity_seeded: "50".to_string(),
            status: Some("Harvested".to_string()),
            actual_yield: Some("500".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    // A Growing crop that already has an actual yield recorded: the dashboard
    // ignores its revenue, the report counts it
    let wheat = crops
        .create(CropInput {
            field_id: field.id,
            crop_type: "Wheat".to_string(),
            seeding_date: "2024-02-01".to_string(),
            quantity_seeded: "30".to_string(),
            actual_yield: Some("100".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    let asha = labours
        .create(LabourInput {
            name: "Asha".to_string(),
            daily_wage: "100".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    labours
        .create(LabourInput {
            name: "Idle".to_string(),
            daily_wage: "500".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    labour_records
        .create(LabourRecordInput {
            crop_id: rice.id,
            labour_id: asha.id,
            work_date: "2024-01-02".to_string(),
            hours_worked: "16".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    cost_records
        .create(CostRecordInput {
            crop_id: rice.id,
            category: "Seeds".to_string(),
            amount: "200".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    cost_records
        .create(CostRecordInput {
            crop_id: wheat.id,
            category: "Fertilizer".to_string(),
            amount: "50".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn dashboard_counts_revenue_for_harvested_crops_only() {
    let db = setup_test_db().await;
    seed(&db).await;
    let reports = ReportService::new(db);

    let summary = reports.dashboard_summary().await.unwrap();
    assert_eq!(summary.total_fields, 1);
    assert_eq!(summary.total_crops, 2);
    assert_eq!(summary.active_crops, 1);
    assert_eq!(summary.total_labours, 2);

    // Inherited asymmetry: revenue from Harvested crops only (12500, the
    // Growing wheat's 2500 is excluded), costs from every crop
    assert_eq!(summary.total_revenue, 12500.0);
    assert_eq!(summary.total_costs, 450.0);
    assert_eq!(summary.gross_profit, 12050.0);
}

#[tokio::test]
async fn report_totals_cover_all_crops() {
    let db = setup_test_db().await;
    seed(&db).await;
    let reports = ReportService::new(db);

    let report = reports.reports().await.unwrap();

    // Revenue here depends only on recorded yield, not on status
    assert_eq!(report.total_revenue, 15000.0);
    assert_eq!(report.total_costs, 450.0);
    assert_eq!(report.total_profit, 14550.0);

    // Crop-wise table lists Harvested crops only, with the field name joined
    assert_eq!(report.crop_profits.len(), 1);
    let row = &report.crop_profits[0];
    assert_eq!(row.crop_type, "Rice");
    assert_eq!(row.field, "North");
    assert_eq!(row.revenue, 12500.0);
    assert_eq!(row.cost, 400.0);
    assert_eq!(row.profit, 12100.0);
    assert_eq!(row.actual_yield, Some(500.0));
}

#[tokio::test]
async fn labour_rollup_lists_only_labours_with_records() {
    let db = setup_test_db().await;
    seed(&db).await;
    let reports = ReportService::new(db);

    let report = reports.reports().await.unwrap();
    assert_eq!(report.labour_costs.len(), 1);
    assert_eq!(report.labour_costs[0].name, "Asha");
    assert_eq!(report.labour_costs[0].total_cost, 200.0);
}

#[tokio::test]
async fn labour_rollup_sums_records_across_crops() {
    let db = setup_test_db().await;
    seed(&db).await;

    let crops = CropService::new(db.clone());
    let labours = LabourService::new(db.clone());
    let labour_records = LabourRecordService::new(db.clone());
    let all_crops = crops.list().await.unwrap();
    let wheat = all_crops.iter().find(|c| c.crop_type == "Wheat").unwrap();
    let all_labours = labours.list().await.unwrap();
    let asha = all_labours.iter().find(|l| l.name == "Asha").unwrap();

    // Asha also works a half day on the wheat
    labour_records
        .create(LabourRecordInput {
            crop_id: wheat.id,
            labour_id: asha.id,
            work_date: "2024-02-10".to_string(),
            hours_worked: "4".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    let report = ReportService::new(db).reports().await.unwrap();
    assert_eq!(report.labour_costs.len(), 1);
    assert_eq!(report.labour_costs[0].total_cost, 250.0);
}

#[tokio::test]
async fn crop_stats_feed_has_one_entry_per_crop() {
    let db = setup_test_db().await;
    seed(&db).await;
    let reports = ReportService::new(db);

    let stats = reports.crop_stats().await.unwrap();
    assert_eq!(stats.labels, vec!["Rice".to_string(), "Wheat".to_string()]);
    assert_eq!(stats.revenue, vec![12500.0, 2500.0]);
    assert_eq!(stats.costs, vec![400.0, 50.0]);
    assert_eq!(stats.profit, vec![12100.0, 2450.0]);
}

#[tokio::test]
async fn empty_store_reports_zeros() {
    let db = setup_test_db().await;
    let reports = ReportService::new(db);

    let summary = reports.dashboard_summary().await.unwrap();
    assert_eq!(summary.total_fields, 0);
    assert_eq!(summary.total_revenue, 0.0);
    assert_eq!(summary.total_costs, 0.0);
    assert_eq!(summary.gross_profit, 0.0);

    let report = reports.reports().await.unwrap();
    assert!(report.crop_profits.is_empty());
    assert!(report.labour_costs.is_empty());

    let stats = reports.crop_stats().await.unwrap();
    assert!(stats.labels.is_empty());
    assert!(stats.revenue.is_empty());
}
