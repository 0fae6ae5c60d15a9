use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::{
    application::{
        result::ApplicationResult,
        usecases::{CheckedProtocol, UseCase},
    },
    domain::{
        models::{Entity, Player},
        repositories::PlayerRepository,
        value_objects::{PlayerId, PlayerName, ValidationError},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct RenamePlayerParameters {
    pub player_id: PlayerId,
    pub renamed_name: PlayerName,
}

/// Raw rename request as it arrives from outside.
#[derive(Debug, Clone)]
pub struct RenamePlayerProtocol {
    player_id: i64,
    renamed_name: String,
}

impl RenamePlayerProtocol {
    pub fn new(player_id: i64, renamed_name: impl Into<String>) -> Self {
        Self {
            player_id,
            renamed_name: renamed_name.into(),
        }
    }
}

impl CheckedProtocol<RenamePlayerParameters> for RenamePlayerProtocol {
    fn check(&self) -> Result<RenamePlayerParameters, ValidationError> {
        Ok(RenamePlayerParameters {
            player_id: PlayerId::new(self.player_id)?,
            renamed_name: PlayerName::new(self.renamed_name.as_str())?,
        })
    }
}

pub struct RenamePlayerUseCase {
    repo: Arc<dyn PlayerRepository>,
}

impl RenamePlayerUseCase {
    pub fn new(repo: Arc<dyn PlayerRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UseCase for RenamePlayerUseCase {
    type Parameters = RenamePlayerParameters;
    type Output = Player;

    async fn execute_impl(&self, parameters: RenamePlayerParameters) -> ApplicationResult<Player> {
        let RenamePlayerParameters {
            player_id,
            renamed_name,
        } = parameters;

        self.repo
            .find_by_id(player_id)
            .await
            .flat_map(|player| player.rename(renamed_name))
            .flat_map_async(|player| self.repo.save(player))
            .await
            .map(|player| {
                info!(player_id = %player.id(), name = %player.name(), "player renamed");
                player
            })
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_checks_every_field() {
        let parameters = RenamePlayerProtocol::new(1, " renamed name ").check().unwrap();
        assert_eq!(parameters.player_id.value(), 1);
        assert_eq!(parameters.renamed_name.as_str(), "renamed name");

        assert!(matches!(
            RenamePlayerProtocol::new(0, "name").check(),
            Err(ValidationError::Range { .. })
        ));
        assert_eq!(
            RenamePlayerProtocol::new(1, "").check(),
            Err(ValidationError::Empty { field: "player name" })
        );
    }
}
