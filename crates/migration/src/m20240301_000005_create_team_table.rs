use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // MANAGER_ID and DIVISION_ID are not constrained; orphaned references are accepted.
        manager
            .create_table(
                Table::create()
                    .table(Team::Table)
                    .if_not_exists()
                    .col(pk_auto(Team::Id))
                    .col(text(Team::Name))
                    .col(integer(Team::ManagerId))
                    .col(integer(Team::DivisionId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_team_manager_id")
                    .table(Team::Table)
                    .col(Team::ManagerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_team_division_id")
                    .table(Team::Table)
                    .col(Team::DivisionId)
                    .to_owned(),
            )
            .await?;

        logging::log_migration!("up", "TEAM");
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Team::Table).to_owned())
            .await?;

        logging::log_migration!("down", "TEAM");
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Team {
    #[sea_orm(iden = "TEAM")]
    Table,
    #[sea_orm(iden = "ID")]
    Id,
    #[sea_orm(iden = "NAME")]
    Name,
    #[sea_orm(iden = "MANAGER_ID")]
    ManagerId,
    #[sea_orm(iden = "DIVISION_ID")]
    DivisionId,
}
