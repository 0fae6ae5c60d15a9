pub mod player;
pub mod require;

use thiserror::Error;

pub use player::{PlayerCreateAt, PlayerId, PlayerName, PlayerUpdateAt};
pub use require::{require_length, require_range};

/// Raised by value-object factories when their invariant does not hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("{field} must be between {min} and {max} characters long, got {actual}")]
    Length {
        field: &'static str,
        min: usize,
        max: usize,
        actual: usize,
    },
    #[error("{field} must be between {min} and {max}, got {actual}")]
    Range {
        field: &'static str,
        min: i64,
        max: i64,
        actual: i64,
    },
    #[error("{field} cannot move past the last representable instant")]
    Overflow { field: &'static str },
    #[error("{field} must not precede {earlier}")]
    Chronology {
        field: &'static str,
        earlier: &'static str,
    },
}
