use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PredictionLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PredictionLogs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PredictionLogs::SepalLength).double().not_null())
                    .col(ColumnDef::new(PredictionLogs::SepalWidth).double().not_null())
                    .col(ColumnDef::new(PredictionLogs::PetalLength).double().not_null())
                    .col(ColumnDef::new(PredictionLogs::PetalWidth).double().not_null())
                    .col(
                        ColumnDef::new(PredictionLogs::PredictedClass)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PredictionLogs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PredictionLogs::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum PredictionLogs {
    Table,
    Id,
    SepalLength,
    SepalWidth,
    PetalLength,
    PetalWidth,
    PredictedClass,
    CreatedAt,
}
