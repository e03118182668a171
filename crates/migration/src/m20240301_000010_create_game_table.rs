use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Game::Table)
                    .if_not_exists()
                    .col(pk_auto(Game::Id))
                    .col(integer(Game::EventId))
                    .col(integer(Game::HomeTeamId))
                    .col(integer(Game::AwayTeamId))
                    .col(decimal_null(Game::HomeTeamScore))
                    .col(decimal_null(Game::AwayTeamScore))
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            ("idx_game_event_id", Game::EventId),
            ("idx_game_home_team_id", Game::HomeTeamId),
            ("idx_game_away_team_id", Game::AwayTeamId),
        ] {
            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name(name)
                        .table(Game::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        logging::log_migration!("up", "GAME");
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Game::Table).to_owned())
            .await?;

        logging::log_migration!("down", "GAME");
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Game {
    #[sea_orm(iden = "GAME")]
    Table,
    #[sea_orm(iden = "ID")]
    Id,
    #[sea_orm(iden = "EVENT_ID")]
    EventId,
    #[sea_orm(iden = "HOME_TEAM_ID")]
    HomeTeamId,
    #[sea_orm(iden = "AWAY_TEAM_ID")]
    AwayTeamId,
    #[sea_orm(iden = "HOME_TEAM_SCORE")]
    HomeTeamScore,
    #[sea_orm(iden = "AWAY_TEAM_SCORE")]
    AwayTeamScore,
}
