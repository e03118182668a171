use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Nullable so existing events stay valid.
        manager
            .alter_table(
                Table::alter()
                    .table(Event::Table)
                    .add_column(integer_null(Event::ProgramId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_event_program_id")
                    .table(Event::Table)
                    .col(Event::ProgramId)
                    .to_owned(),
            )
            .await?;

        logging::log_migration!("up", "EVENT");
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite refuses to drop an indexed column, so the index goes first.
        manager
            .drop_index(
                Index::drop()
                    .name("idx_event_program_id")
                    .table(Event::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Event::Table)
                    .drop_column(Event::ProgramId)
                    .to_owned(),
            )
            .await?;

        logging::log_migration!("down", "EVENT");
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Event {
    #[sea_orm(iden = "EVENT")]
    Table,
    #[sea_orm(iden = "PROGRAM_ID")]
    ProgramId,
}
