use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Cities {
    Table,
    Id,
    Name,
    State,
    Country,
    TouristRating,
    DateEstablished,
    EstimatedPopulation,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cities::Table)
                    .if_not_exists()
                    // ULID text keys; string order is creation order
                    .col(
                        ColumnDef::new(Cities::Id)
                            .string_len(26)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Cities::Name).string().not_null())
                    .col(ColumnDef::new(Cities::State).string().not_null())
                    .col(ColumnDef::new(Cities::Country).string().not_null())
                    .col(
                        ColumnDef::new(Cities::TouristRating)
                            .integer()
                            .not_null()
                            .check(
                                Expr::col(Cities::TouristRating)
                                    .gte(1)
                                    .and(Expr::col(Cities::TouristRating).lte(5)),
                            ),
                    )
                    .col(ColumnDef::new(Cities::DateEstablished).string().not_null())
                    .col(
                        ColumnDef::new(Cities::EstimatedPopulation)
                            .big_integer()
                            .not_null()
                            .check(Expr::col(Cities::EstimatedPopulation).gt(0)),
                    )
                    .col(
                        ColumnDef::new(Cities::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Cities::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Search is a substring LIKE, but exact-name lookups (seeding) use this
        manager
            .create_index(
                Index::create()
                    .name("idx_cities_name")
                    .table(Cities::Table)
                    .col(Cities::Name)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cities::Table).if_exists().to_owned())
            .await
    }
}
