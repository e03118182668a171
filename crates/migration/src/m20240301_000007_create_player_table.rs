use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(pk_auto(Player::Id))
                    .col(integer(Player::RegistrantId))
                    .col(integer(Player::DivisionId))
                    .col(integer(Player::TeamId))
                    .col(text_null(Player::JerseyNumber))
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            ("idx_player_registrant_id", Player::RegistrantId),
            ("idx_player_division_id", Player::DivisionId),
            ("idx_player_team_id", Player::TeamId),
        ] {
            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name(name)
                        .table(Player::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        logging::log_migration!("up", "PLAYER");
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await?;

        logging::log_migration!("down", "PLAYER");
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Player {
    #[sea_orm(iden = "PLAYER")]
    Table,
    #[sea_orm(iden = "ID")]
    Id,
    #[sea_orm(iden = "REGISTRANT_ID")]
    RegistrantId,
    #[sea_orm(iden = "DIVISION_ID")]
    DivisionId,
    #[sea_orm(iden = "TEAM_ID")]
    TeamId,
    #[sea_orm(iden = "JERSEY_NUMBER")]
    JerseyNumber,
}
