use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create fields table
        manager
            .create_table(
                Table::create()
                    .table(Fields::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Fields::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Fields::Name).string().not_null())
                    .col(ColumnDef::new(Fields::Area).double().not_null())
                    .col(ColumnDef::new(Fields::Location).string())
                    .col(ColumnDef::new(Fields::CreatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        // Create crops table
        manager
            .create_table(
                Table::create()
                    .table(Crops::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Crops::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Crops::FieldId).integer().not_null())
                    .col(ColumnDef::new(Crops::CropType).string().not_null())
                    .col(ColumnDef::new(Crops::Variety).string())
                    .col(ColumnDef::new(Crops::SeedingDate).date().not_null())
                    .col(ColumnDef::new(Crops::ExpectedHarvestDate).date())
                    .col(ColumnDef::new(Crops::ActualHarvestDate).date())
                    .col(ColumnDef::new(Crops::QuantitySeeded).double().not_null())
                    .col(ColumnDef::new(Crops::ExpectedYield).double())
                    .col(ColumnDef::new(Crops::ActualYield).double())
                    .col(
                        ColumnDef::new(Crops::Status)
                            .string()
                            .not_null()
                            .default("Growing"),
                    )
                    .col(ColumnDef::new(Crops::Notes).text())
                    .col(ColumnDef::new(Crops::CreatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_crops_field_id")
                            .from(Crops::Table, Crops::FieldId)
                            .to(Fields::Table, Fields::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Create labours table
        manager
            .create_table(
                Table::create()
                    .table(Labours::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Labours::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Labours::Name).string().not_null())
                    .col(ColumnDef::new(Labours::Designation).string())
                    .col(ColumnDef::new(Labours::Contact).string())
                    .col(ColumnDef::new(Labours::DailyWage).double().not_null())
                    .col(
                        ColumnDef::new(Labours::Status)
                            .string()
                            .not_null()
                            .default("Active"),
                    )
                    .col(ColumnDef::new(Labours::CreatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        // Create labour_records table
        manager
            .create_table(
                Table::create()
                    .table(LabourRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LabourRecords::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LabourRecords::CropId).integer().not_null())
                    .col(ColumnDef::new(LabourRecords::LabourId).integer().not_null())
                    .col(ColumnDef::new(LabourRecords::WorkDate).date().not_null())
                    .col(ColumnDef::new(LabourRecords::HoursWorked).double().not_null())
                    .col(ColumnDef::new(LabourRecords::WorkType).string())
                    .col(ColumnDef::new(LabourRecords::Notes).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_labour_records_crop_id")
                            .from(LabourRecords::Table, LabourRecords::CropId)
                            .to(Crops::Table, Crops::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_labour_records_labour_id")
                            .from(LabourRecords::Table, LabourRecords::LabourId)
                            .to(Labours::Table, Labours::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Create cost_records table
        manager
            .create_table(
                Table::create()
                    .table(CostRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CostRecords::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CostRecords::CropId).integer().not_null())
                    .col(ColumnDef::new(CostRecords::Category).string().not_null())
                    .col(ColumnDef::new(CostRecords::Description).string())
                    .col(ColumnDef::new(CostRecords::Amount).double().not_null())
                    .col(
                        ColumnDef::new(CostRecords::TransactionDate)
                            .timestamp()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CostRecords::Notes).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cost_records_crop_id")
                            .from(CostRecords::Table, CostRecords::CropId)
                            .to(Crops::Table, Crops::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop in dependency order
        manager
            .drop_table(Table::drop().table(CostRecords::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(LabourRecords::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Labours::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Crops::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Fields::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Fields {
    Table,
    Id,
    Name,
    Area,
    Location,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Crops {
    Table,
    Id,
    FieldId,
    CropType,
    Variety,
    SeedingDate,
    ExpectedHarvestDate,
    ActualHarvestDate,
    QuantitySeeded,
    ExpectedYield,
    ActualYield,
    Status,
    Notes,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Labours {
    Table,
    Id,
    Name,
    Designation,
    Contact,
    DailyWage,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
enum LabourRecords {
    Table,
    Id,
    CropId,
    LabourId,
    WorkDate,
    HoursWorked,
    WorkType,
    Notes,
}

#[derive(DeriveIden)]
enum CostRecords {
    Table,
    Id,
    CropId,
    Category,
    Description,
    Amount,
    TransactionDate,
    Notes,
}
