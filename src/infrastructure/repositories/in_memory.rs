use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{
    DomainError, DomainResult,
    models::{Entity, Player, PlayerRecord},
    repositories::PlayerRepository,
    value_objects::PlayerId,
};

pub const PLAYER_NOT_FOUND: &str = "player not found";

#[derive(Default)]
pub struct InMemoryPlayerRepository {
    players: Arc<RwLock<HashMap<i64, PlayerRecord>>>,
}

impl InMemoryPlayerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn seed(&self, player: &Player) {
        let mut players = self.players.write().await;
        players.insert(player.id().value(), player.to_record());
    }

    /// Stores a record as-is, without going through the value objects.
    pub async fn seed_record(&self, record: PlayerRecord) {
        let mut players = self.players.write().await;
        players.insert(record.id, record);
    }

    pub async fn len(&self) -> usize {
        self.players.read().await.len()
    }
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepository {
    async fn find_by_id(&self, id: PlayerId) -> DomainResult<Player> {
        let players = self.players.read().await;
        match players.get(&id.value()) {
            Some(record) => Player::restore(record.clone())
                .map_err(DomainError::value_construction_failed)
                .into(),
            None => DomainResult::Failure(DomainError::not_found(PLAYER_NOT_FOUND)),
        }
    }

    async fn save(&self, player: Player) -> DomainResult<Player> {
        let mut players = self.players.write().await;
        players.insert(player.id().value(), player.to_record());
        DomainResult::Success(player)
    }
}
