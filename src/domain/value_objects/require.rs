//! Explicit invariant checks that value objects run inside their factories.

use crate::domain::value_objects::ValidationError;

/// Checks that `value` holds between `min` and `max` characters (inclusive).
pub fn require_length(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual == 0 && min > 0 {
        return Err(ValidationError::Empty { field });
    }
    if actual < min || actual > max {
        return Err(ValidationError::Length {
            field,
            min,
            max,
            actual,
        });
    }
    Ok(())
}

/// Checks that `min <= value <= max`.
pub fn require_range(
    field: &'static str,
    value: i64,
    min: i64,
    max: i64,
) -> Result<(), ValidationError> {
    if value < min || value > max {
        return Err(ValidationError::Range {
            field,
            min,
            max,
            actual: value,
        });
    }
    Ok(())
}
