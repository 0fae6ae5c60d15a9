use std::{io::Error, sync::Arc};

use tokio::main;

use outcome::{
    application::{
        ApplicationError, ApplicationResult,
        usecases::{
            UseCase, Validated,
            rename_player::{RenamePlayerProtocol, RenamePlayerUseCase},
        },
    },
    config::Config,
    domain::{
        models::Player,
        value_objects::{PlayerCreateAt, PlayerId, PlayerName},
    },
    infrastructure::repositories::InMemoryPlayerRepository,
    logging::init_logging,
};

#[main]
async fn main() -> Result<(), Error> {
    let config = Config::try_parse().map_err(Error::other)?;
    init_logging(&config.log_level);

    let repo = Arc::new(InMemoryPlayerRepository::new());
    let player = Player::create(
        PlayerId::new(config.player_id).map_err(Error::other)?,
        PlayerName::new(config.player_name.as_str()).map_err(Error::other)?,
        PlayerCreateAt::now(),
    );
    repo.seed(&player).await;

    let use_case = RenamePlayerUseCase::new(repo);
    let protocol = Validated::new(
        RenamePlayerProtocol::new(config.player_id, config.renamed_name),
        config.validation_severity,
    );

    match use_case.execute(&protocol).await {
        ApplicationResult::Success(player) => {
            let json = serde_json::to_string_pretty(&player.to_record()).map_err(Error::other)?;
            println!("{json}");
            Ok(())
        }
        ApplicationResult::Failure(error) => {
            error.log();
            match error {
                ApplicationError::Ignorable(_) => Ok(()),
                error => Err(Error::other(error)),
            }
        }
    }
}
