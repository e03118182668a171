use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(text(Event::Name))
                    .col(text_null(Event::Type))
                    .col(text_null(Event::Description))
                    .col(date_time(Event::StartDate))
                    .col(date_time(Event::EndDate))
                    .col(integer(Event::LocationId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_event_location_id")
                    .table(Event::Table)
                    .col(Event::LocationId)
                    .to_owned(),
            )
            .await?;

        logging::log_migration!("up", "EVENT");
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await?;

        logging::log_migration!("down", "EVENT");
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Event {
    #[sea_orm(iden = "EVENT")]
    Table,
    #[sea_orm(iden = "ID")]
    Id,
    #[sea_orm(iden = "NAME")]
    Name,
    #[sea_orm(iden = "TYPE")]
    Type,
    #[sea_orm(iden = "DESCRIPTION")]
    Description,
    #[sea_orm(iden = "START_DATE")]
    StartDate,
    #[sea_orm(iden = "END_DATE")]
    EndDate,
    #[sea_orm(iden = "LOCATION_ID")]
    LocationId,
}
