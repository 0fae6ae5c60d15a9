use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    errors::DomainError,
    models::Entity,
    result::DomainResult,
    value_objects::{PlayerCreateAt, PlayerId, PlayerName, PlayerUpdateAt, ValidationError},
};

#[derive(Debug, Clone)]
pub struct Player {
    id: PlayerId,
    name: PlayerName,
    create_at: PlayerCreateAt,
    update_at: PlayerUpdateAt,
}

/// Raw snapshot of a player as it is kept in a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: i64,
    pub name: String,
    pub create_at: DateTime<Utc>,
    pub update_at: DateTime<Utc>,
}

impl Player {
    pub fn create(id: PlayerId, name: PlayerName, create_at: PlayerCreateAt) -> Self {
        Self {
            id,
            name,
            create_at,
            update_at: create_at.into(),
        }
    }

    /// Rebuilds a player from stored fields, re-checking every value object.
    pub fn restore(record: PlayerRecord) -> Result<Self, ValidationError> {
        let create_at = PlayerCreateAt::new(record.create_at);
        Ok(Self {
            id: PlayerId::new(record.id)?,
            name: PlayerName::new(record.name)?,
            create_at,
            update_at: PlayerUpdateAt::new(record.update_at, create_at)?,
        })
    }

    pub fn name(&self) -> &PlayerName {
        &self.name
    }

    pub fn create_at(&self) -> PlayerCreateAt {
        self.create_at
    }

    pub fn update_at(&self) -> PlayerUpdateAt {
        self.update_at
    }

    /// Returns the same player (same id and create_at) with the mutable fields
    /// replaced. Changing the name without an explicit `update_at` advances it;
    /// an explicit `update_at` is checked against this player's `create_at`.
    pub fn copy(
        &self,
        name: Option<PlayerName>,
        update_at: Option<DateTime<Utc>>,
    ) -> Result<Self, ValidationError> {
        let update_at = match (&name, update_at) {
            (_, Some(update_at)) => PlayerUpdateAt::new(update_at, self.create_at)?,
            (Some(_), None) => self.update_at.advance()?,
            (None, None) => self.update_at,
        };
        Ok(Self {
            id: self.id,
            name: name.unwrap_or_else(|| self.name.clone()),
            create_at: self.create_at,
            update_at,
        })
    }

    pub fn rename(&self, name: PlayerName) -> DomainResult<Player> {
        self.copy(Some(name), None)
            .map_err(DomainError::value_construction_failed)
            .into()
    }

    pub fn to_record(&self) -> PlayerRecord {
        PlayerRecord {
            id: self.id.value(),
            name: self.name.as_str().to_string(),
            create_at: self.create_at.value(),
            update_at: self.update_at.value(),
        }
    }
}

impl Entity for Player {
    type Id = PlayerId;

    fn id(&self) -> &PlayerId {
        &self.id
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity(other)
    }
}

impl Eq for Player {}

impl Hash for Player {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
