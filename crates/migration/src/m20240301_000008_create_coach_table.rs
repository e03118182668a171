use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No synthetic identity: one coaching row per (registrant, team).
        manager
            .create_table(
                Table::create()
                    .table(Coach::Table)
                    .if_not_exists()
                    .col(integer(Coach::RegistrantId))
                    .col(integer(Coach::TeamId))
                    .col(text_null(Coach::Position))
                    .primary_key(
                        Index::create()
                            .name("pk_coach")
                            .col(Coach::RegistrantId)
                            .col(Coach::TeamId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_coach_team_id")
                    .table(Coach::Table)
                    .col(Coach::TeamId)
                    .to_owned(),
            )
            .await?;

        logging::log_migration!("up", "COACH");
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Coach::Table).to_owned())
            .await?;

        logging::log_migration!("down", "COACH");
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Coach {
    #[sea_orm(iden = "COACH")]
    Table,
    #[sea_orm(iden = "REGISTRANT_ID")]
    RegistrantId,
    #[sea_orm(iden = "TEAM_ID")]
    TeamId,
    #[sea_orm(iden = "POSITION")]
    Position,
}
