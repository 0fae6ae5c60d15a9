use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ValidationError, require_length, require_range};

pub const PLAYER_NAME_MAX_LENGTH: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(i64);

impl PlayerId {
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        require_range("player id", value, 1, i64::MAX)?;
        Ok(Self(value))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerName(String);

impl PlayerName {
    /// Surrounding whitespace is not part of a name.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let value = raw.into().trim().to_string();
        require_length("player name", &value, 1, PLAYER_NAME_MAX_LENGTH)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerCreateAt(DateTime<Utc>);

impl PlayerCreateAt {
    pub fn new(value: DateTime<Utc>) -> Self {
        Self(value)
    }

    pub fn now() -> Self {
        Self(Utc::now())
    }

    pub fn value(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerUpdateAt(DateTime<Utc>);

impl PlayerUpdateAt {
    pub fn new(value: DateTime<Utc>, create_at: PlayerCreateAt) -> Result<Self, ValidationError> {
        if value < create_at.value() {
            return Err(ValidationError::Chronology {
                field: "update_at",
                earlier: "create_at",
            });
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> DateTime<Utc> {
        self.0
    }

    /// The next update time: now, or one microsecond past `self` when the
    /// clock has not moved on.
    pub fn advance(&self) -> Result<Self, ValidationError> {
        let floor = self
            .0
            .checked_add_signed(Duration::microseconds(1))
            .ok_or(ValidationError::Overflow { field: "update_at" })?;
        Ok(Self(Utc::now().max(floor)))
    }
}

impl From<PlayerCreateAt> for PlayerUpdateAt {
    fn from(create_at: PlayerCreateAt) -> Self {
        Self(create_at.value())
    }
}

impl PartialEq<PlayerCreateAt> for PlayerUpdateAt {
    fn eq(&self, other: &PlayerCreateAt) -> bool {
        self.0 == other.0
    }
}

impl PartialOrd<PlayerCreateAt> for PlayerUpdateAt {
    fn partial_cmp(&self, other: &PlayerCreateAt) -> Option<std::cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}
