use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Age limits stay textual to match the rows already in production.
        manager
            .create_table(
                Table::create()
                    .table(Division::Table)
                    .if_not_exists()
                    .col(pk_auto(Division::Id))
                    .col(text(Division::Name))
                    .col(text_null(Division::Description))
                    .col(integer(Division::ProgramId))
                    .col(text(Division::AgeMin))
                    .col(text(Division::AgeMax))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_division_program_id")
                    .table(Division::Table)
                    .col(Division::ProgramId)
                    .to_owned(),
            )
            .await?;

        logging::log_migration!("up", "DIVISION");
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Division::Table).to_owned())
            .await?;

        logging::log_migration!("down", "DIVISION");
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Division {
    #[sea_orm(iden = "DIVISION")]
    Table,
    #[sea_orm(iden = "ID")]
    Id,
    #[sea_orm(iden = "NAME")]
    Name,
    #[sea_orm(iden = "DESCRIPTION")]
    Description,
    #[sea_orm(iden = "PROGRAM_ID")]
    ProgramId,
    #[sea_orm(iden = "AGE_MIN")]
    AgeMin,
    #[sea_orm(iden = "AGE_MAX")]
    AgeMax,
}
