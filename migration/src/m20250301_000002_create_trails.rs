use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Tags and comments are JSON arrays embedded in the trail row
        manager
            .create_table(
                Table::create()
                    .table(Trails::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Trails::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Trails::Name).string().not_null())
                    .col(ColumnDef::new(Trails::Location).string().not_null())
                    .col(ColumnDef::new(Trails::Coordinates).string().not_null())
                    .col(ColumnDef::new(Trails::Difficulty).string().not_null())
                    .col(ColumnDef::new(Trails::Length).string().not_null())
                    .col(ColumnDef::new(Trails::ElevationGain).string().not_null())
                    .col(ColumnDef::new(Trails::ImageLink).string().not_null())
                    .col(ColumnDef::new(Trails::Description).text().not_null())
                    .col(ColumnDef::new(Trails::Tags).text().not_null().default("[]"))
                    .col(ColumnDef::new(Trails::Comments).text().not_null().default("[]"))
                    .col(ColumnDef::new(Trails::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // Catalog listing is ordered by name
        manager
            .create_index(
                Index::create()
                    .name("idx_trails_name")
                    .table(Trails::Table)
                    .col(Trails::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Trails::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Trails {
    Table,
    Id,
    Name,
    Location,
    Coordinates,
    Difficulty,
    Length,
    ElevationGain,
    ImageLink,
    Description,
    Tags,
    Comments,
    CreatedAt,
}
