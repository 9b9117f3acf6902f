use farmledger::database::migrations::Migrator;
use farmledger::services::{
    CostRecordInput, CostRecordService, CropInput, CropService, FieldInput, FieldService,
    LabourInput, LabourRecordInput, LabourRecordService, LabourService,
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

struct Services {
    fields: FieldService,
    crops: CropService,
    labours: LabourService,
    labour_records: LabourRecordService,
    cost_records: CostRecordService,
}

fn services(db: DatabaseConnection) -> Services {
    Services {
        fields: FieldService::new(db.clone()),
        crops: CropService::new(db.clone()),
        labours: LabourService::new(db.clone()),
        labour_records: LabourRecordService::new(db.clone()),
        cost_records: CostRecordService::new(db),
    }
}

/// One field with one crop carrying a labour record and a cost record.
async fn seed_farm(svc: &Services) -> (i32, i32, i32) {
    let field = svc
        .fields
        .create(FieldInput {
            name: "North".to_string(),
            area: "10".to_string(),
            location: None,
        })
        .await
        .unwrap();

    let crop = svc
        .crops
        .create(CropInput {
            field_id: field.id,
            crop_type: "Rice".to_string(),
            seeding_date: "2024-01-01".to_string(),
            quantity_seeded: "50".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    let labour = svc
        .labours
        .create(LabourInput {
            name: "Asha".to_string(),
            daily_wage: "100".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    svc.labour_records
        .create(LabourRecordInput {
            crop_id: crop.id,
            labour_id: labour.id,
            work_date: "2024-01-02".to_string(),
            hours_worked: "8".to_string(),
            work_type: Some("Seeding".to_string()),
            notes: None,
        })
        .await
        .unwrap();

    svc.cost_records
        .create(CostRecordInput {
            crop_id: crop.id,
            category: "Seeds".to_string(),
            amount: "200".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    (field.id, crop.id, labour.id)
}

#[tokio::test]
async fn deleting_a_field_removes_crops_and_their_records() {
    let db = setup_test_db().await;
    let svc = services(db);
    let (field_id, _, _) = seed_farm(&svc).await;

    svc.fields.delete(field_id).await.unwrap();

    assert!(svc.fields.list().await.unwrap().is_empty());
    assert!(svc.crops.list().await.unwrap().is_empty());
    assert!(svc.labour_records.list().await.unwrap().is_empty());
    assert!(svc.cost_records.list().await.unwrap().is_empty());

    // The labour itself is untouched
    assert_eq!(svc.labours.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn deleting_a_crop_removes_its_records_only() {
    let db = setup_test_db().await;
    let svc = services(db);
    let (field_id, crop_id, labour_id) = seed_farm(&svc).await;

    // A second crop on the same field with its own cost record
    let other = svc
        .crops
        .create(CropInput {
            field_id,
            crop_type: "Wheat".to_string(),
            seeding_date: "2024-02-01".to_string(),
            quantity_seeded: "30".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    svc.cost_records
        .create(CostRecordInput {
            crop_id: other.id,
            category: "Seeds".to_string(),
            amount: "90".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    svc.crops.delete(crop_id).await.unwrap();

    assert!(svc.labour_records.list().await.unwrap().is_empty());
    let remaining_costs = svc.cost_records.list().await.unwrap();
    assert_eq!(remaining_costs.len(), 1);
    assert_eq!(remaining_costs[0].crop_id, other.id);

    // Field and labour survive
    assert!(svc.fields.get(field_id).await.is_ok());
    assert!(svc.labours.get(labour_id).await.is_ok());
}

#[tokio::test]
async fn deleting_a_labour_removes_its_work_records() {
    let db = setup_test_db().await;
    let svc = services(db);
    let (_, crop_id, labour_id) = seed_farm(&svc).await;

    svc.labours.delete(labour_id).await.unwrap();

    assert!(svc.labour_records.list().await.unwrap().is_empty());
    // The crop and its cost record are untouched
    assert!(svc.crops.get(crop_id).await.is_ok());
    assert_eq!(svc.cost_records.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn labour_record_and_cost_record_deletes_do_not_cascade() {
    let db = setup_test_db().await;
    let svc = services(db);
    let (field_id, crop_id, labour_id) = seed_farm(&svc).await;

    let record = &svc.labour_records.list().await.unwrap()[0];
    svc.labour_records.delete(record.id).await.unwrap();
    let cost = &svc.cost_records.list().await.unwrap()[0];
    svc.cost_records.delete(cost.id).await.unwrap();

    assert!(svc.fields.get(field_id).await.is_ok());
    assert!(svc.crops.get(crop_id).await.is_ok());
    assert!(svc.labours.get(labour_id).await.is_ok());
}
