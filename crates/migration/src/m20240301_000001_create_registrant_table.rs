use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Registrant::Table)
                    .if_not_exists()
                    .col(pk_auto(Registrant::Id))
                    .col(text(Registrant::GuardianId))
                    .col(text(Registrant::FirstName))
                    .col(text(Registrant::LastName))
                    .col(date_time(Registrant::BirthDate))
                    .col(text(Registrant::Sex))
                    .col(text_null(Registrant::NickName))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_registrant_guardian_id")
                    .table(Registrant::Table)
                    .col(Registrant::GuardianId)
                    .to_owned(),
            )
            .await?;

        logging::log_migration!("up", "REGISTRANT");
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Registrant::Table).to_owned())
            .await?;

        logging::log_migration!("down", "REGISTRANT");
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Registrant {
    #[sea_orm(iden = "REGISTRANT")]
    Table,
    #[sea_orm(iden = "ID")]
    Id,
    #[sea_orm(iden = "GUARDIAN_ID")]
    GuardianId,
    #[sea_orm(iden = "FIRST_NAME")]
    FirstName,
    #[sea_orm(iden = "LAST_NAME")]
    LastName,
    #[sea_orm(iden = "BIRTH_DATE")]
    BirthDate,
    #[sea_orm(iden = "SEX")]
    Sex,
    #[sea_orm(iden = "NICK_NAME")]
    NickName,
}
