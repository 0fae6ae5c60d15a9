use async_trait::async_trait;

use crate::domain::{models::Player, result::DomainResult, value_objects::PlayerId};

/// Implementations return failures as values; they never panic on a missing
/// or unwritable player.
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Fails with `DomainError::NotFound` when no player has this id.
    async fn find_by_id(&self, id: PlayerId) -> DomainResult<Player>;

    /// Returns the persisted player, unchanged in identity.
    async fn save(&self, player: Player) -> DomainResult<Player>;
}
