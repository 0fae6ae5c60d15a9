use thiserror::Error;
use tracing::{debug, error, field::display, warn};

use crate::domain::{DomainError, Fault, Severity};

/// A domain failure as callers see it, classified by severity.
///
/// `Error` blocks, `Warning` asks the user to correct input, `Ignorable` is
/// only logged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Error(DomainError),
    #[error(transparent)]
    Warning(DomainError),
    #[error(transparent)]
    Ignorable(DomainError),
}

/// Lifts a domain error into the application variant its severity selects.
///
/// `Severity` is closed, so there is no fallback arm here; unrecognized levels
/// are rejected when a severity is parsed.
pub fn classify(error: DomainError) -> ApplicationError {
    match error.severity() {
        Severity::Fatal => ApplicationError::Error(error),
        Severity::Recoverable => ApplicationError::Warning(error),
        Severity::Silent => ApplicationError::Ignorable(error),
    }
}

impl ApplicationError {
    /// `Error(Unexpected)`, used for faults nothing anticipated.
    pub fn unexpected(fault: Option<Fault>) -> Self {
        ApplicationError::Error(DomainError::unexpected(fault))
    }

    pub fn domain_error(&self) -> &DomainError {
        match self {
            ApplicationError::Error(error)
            | ApplicationError::Warning(error)
            | ApplicationError::Ignorable(error) => error,
        }
    }

    pub fn into_domain_error(self) -> DomainError {
        match self {
            ApplicationError::Error(error)
            | ApplicationError::Warning(error)
            | ApplicationError::Ignorable(error) => error,
        }
    }

    pub fn message(&self) -> &str {
        self.domain_error().message()
    }

    pub fn fault(&self) -> Option<&Fault> {
        self.domain_error().fault()
    }

    pub fn is_blocking(&self) -> bool {
        matches!(self, ApplicationError::Error(_))
    }

    pub fn log(&self) {
        let message = self.message();
        let fault = self.fault().map(display);
        match self {
            ApplicationError::Error(_) => error!(fault, "{message}"),
            ApplicationError::Warning(_) => warn!(fault, "{message}"),
            ApplicationError::Ignorable(_) => debug!(fault, "{message}"),
        }
    }
}

impl From<DomainError> for ApplicationError {
    fn from(error: DomainError) -> Self {
        classify(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatal_becomes_error_with_the_same_message() {
        let classified = classify(DomainError::not_found("not found"));

        assert!(matches!(classified, ApplicationError::Error(_)));
        assert_eq!(classified.message(), "not found");
        assert!(classified.is_blocking());
    }

    #[test]
    fn recoverable_becomes_warning() {
        let classified = classify(DomainError::validation("too long", Severity::Recoverable));

        assert!(matches!(classified, ApplicationError::Warning(_)));
        assert_eq!(classified.message(), "too long");
        assert!(!classified.is_blocking());
    }

    #[test]
    fn silent_becomes_ignorable() {
        let classified = classify(DomainError::validation("cosmetic", Severity::Silent));

        assert!(matches!(classified, ApplicationError::Ignorable(_)));
        assert_eq!(classified.to_string(), "cosmetic");
    }

    #[test]
    fn classification_keeps_the_original_domain_error() {
        let error = DomainError::value_construction_failed(anyhow::anyhow!("bad record"));

        let classified = ApplicationError::from(error.clone());

        assert_eq!(classified.domain_error(), &error);
        assert_eq!(classified.into_domain_error(), error);
    }

    #[test]
    fn unexpected_is_a_blocking_error() {
        let error = ApplicationError::unexpected(Some(Fault::msg("disk on fire")));

        assert!(matches!(
            error,
            ApplicationError::Error(DomainError::Unexpected { .. })
        ));
        assert_eq!(error.fault().map(ToString::to_string).as_deref(), Some("disk on fire"));
    }
}
