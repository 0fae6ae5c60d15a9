use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// How loudly a failure is surfaced to the caller.
///
/// Ordered from quietest to loudest, so `Severity::Fatal > Severity::Silent`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Silent,
    #[default]
    Recoverable,
    Fatal,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Fatal => "fatal",
            Severity::Recoverable => "recoverable",
            Severity::Silent => "silent",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    // Accepts the legacy level names as well.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "fatal" | "error" => Ok(Severity::Fatal),
            "recoverable" | "warning" => Ok(Severity::Recoverable),
            "silent" | "ignorable" | "ignore" => Ok(Severity::Silent),
            other => Err(format!("unknown severity: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_naming_schemes() {
        assert_eq!("fatal".parse::<Severity>(), Ok(Severity::Fatal));
        assert_eq!("ERROR".parse::<Severity>(), Ok(Severity::Fatal));
        assert_eq!("Warning".parse::<Severity>(), Ok(Severity::Recoverable));
        assert_eq!(" ignorable ".parse::<Severity>(), Ok(Severity::Silent));
        assert!("loud".parse::<Severity>().is_err());
    }

    #[test]
    fn fatal_is_the_loudest() {
        assert!(Severity::Fatal > Severity::Recoverable);
        assert!(Severity::Recoverable > Severity::Silent);
    }

    #[test]
    fn recoverable_is_the_default() {
        assert_eq!(Severity::default(), Severity::Recoverable);
    }
}
