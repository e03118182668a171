use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Location::Table)
                    .if_not_exists()
                    .col(pk_auto(Location::Id))
                    .col(text(Location::Name))
                    .col(boolean(Location::Playable).default(true))
                    .col(decimal(Location::Latitude))
                    .col(decimal(Location::Longitude))
                    .to_owned(),
            )
            .await?;

        logging::log_migration!("up", "LOCATION");
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Location::Table).to_owned())
            .await?;

        logging::log_migration!("down", "LOCATION");
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Location {
    #[sea_orm(iden = "LOCATION")]
    Table,
    #[sea_orm(iden = "ID")]
    Id,
    #[sea_orm(iden = "NAME")]
    Name,
    #[sea_orm(iden = "PLAYABLE")]
    Playable,
    #[sea_orm(iden = "LATITUDE")]
    Latitude,
    #[sea_orm(iden = "LONGITUDE")]
    Longitude,
}
