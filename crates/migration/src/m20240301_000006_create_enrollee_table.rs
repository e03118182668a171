use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Enrollee::Table)
                    .if_not_exists()
                    .col(pk_auto(Enrollee::Id))
                    .col(integer(Enrollee::RegistrantId))
                    .col(integer(Enrollee::ProgramId))
                    .col(date_time(Enrollee::EnrollmentDate))
                    .col(text_null(Enrollee::Preference))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_enrollee_registrant_id")
                    .table(Enrollee::Table)
                    .col(Enrollee::RegistrantId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_enrollee_program_id")
                    .table(Enrollee::Table)
                    .col(Enrollee::ProgramId)
                    .to_owned(),
            )
            .await?;

        logging::log_migration!("up", "ENROLLEE");
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Enrollee::Table).to_owned())
            .await?;

        logging::log_migration!("down", "ENROLLEE");
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Enrollee {
    #[sea_orm(iden = "ENROLLEE")]
    Table,
    #[sea_orm(iden = "ID")]
    Id,
    #[sea_orm(iden = "REGISTRANT_ID")]
    RegistrantId,
    #[sea_orm(iden = "PROGRAM_ID")]
    ProgramId,
    #[sea_orm(iden = "ENROLLMENT_DATE")]
    EnrollmentDate,
    #[sea_orm(iden = "PREFERENCE")]
    Preference,
}
