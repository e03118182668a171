use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Program::Table)
                    .if_not_exists()
                    .col(pk_auto(Program::Id))
                    .col(text(Program::Name))
                    .col(text_null(Program::Description))
                    .to_owned(),
            )
            .await?;

        logging::log_migration!("up", "PROGRAM");
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Program::Table).to_owned())
            .await?;

        logging::log_migration!("down", "PROGRAM");
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Program {
    #[sea_orm(iden = "PROGRAM")]
    Table,
    #[sea_orm(iden = "ID")]
    Id,
    #[sea_orm(iden = "NAME")]
    Name,
    #[sea_orm(iden = "DESCRIPTION")]
    Description,
}
