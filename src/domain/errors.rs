use std::{any::Any, error::Error as StdError, fmt, sync::Arc};

use thiserror::Error;

use crate::domain::{severity::Severity, value_objects::ValidationError};

pub const UNEXPECTED_MESSAGE: &str = "an unexpected error occurred";
pub const VALUE_CONSTRUCTION_MESSAGE: &str = "failed to construct a value object";
const INTERNAL_FAULT_MESSAGE: &str = "internal fault";

/// The fault a domain error originated from, kept for diagnostics.
///
/// Clones share the underlying `anyhow::Error`. Two faults compare equal when
/// they render the same message.
#[derive(Clone)]
pub struct Fault(Arc<anyhow::Error>);

impl Fault {
    pub fn new(error: impl Into<anyhow::Error>) -> Self {
        Self(Arc::new(error.into()))
    }

    pub fn msg<M>(message: M) -> Self
    where
        M: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        Self(Arc::new(anyhow::Error::msg(message)))
    }

    /// Used when an unexpected failure has nothing more specific to carry.
    pub fn internal() -> Self {
        Self::msg(INTERNAL_FAULT_MESSAGE)
    }

    /// Turns a caught panic payload into a fault.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(message) => (*message).to_string(),
                Err(_) => "panic with a non-string payload".to_string(),
            },
        };
        Self::msg(message)
    }

    pub fn error(&self) -> &anyhow::Error {
        &self.0
    }

    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        self.0.downcast_ref::<E>()
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl StdError for Fault {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl PartialEq for Fault {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0.to_string() == other.0.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Bad external input.
    #[error("{message}")]
    Validation {
        message: String,
        severity: Severity,
        #[source]
        fault: Option<Fault>,
    },
    #[error("{message}")]
    NotFound {
        message: String,
        #[source]
        fault: Option<Fault>,
    },
    /// A value object invariant was violated while rebuilding an entity.
    #[error("failed to construct a value object")]
    ValueConstructionFailed {
        #[source]
        fault: Fault,
    },
    #[error("an unexpected error occurred")]
    Unexpected {
        #[source]
        fault: Fault,
    },
}

impl DomainError {
    pub fn validation(message: impl Into<String>, severity: Severity) -> Self {
        DomainError::Validation {
            message: message.into(),
            severity,
            fault: None,
        }
    }

    pub fn invalid(error: ValidationError, severity: Severity) -> Self {
        DomainError::Validation {
            message: error.to_string(),
            severity,
            fault: Some(Fault::new(error)),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        DomainError::NotFound {
            message: message.into(),
            fault: None,
        }
    }

    pub fn value_construction_failed(fault: impl Into<anyhow::Error>) -> Self {
        DomainError::ValueConstructionFailed {
            fault: Fault::new(fault),
        }
    }

    pub fn unexpected(fault: Option<Fault>) -> Self {
        DomainError::Unexpected {
            fault: fault.unwrap_or_else(Fault::internal),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            DomainError::Validation { message, .. } | DomainError::NotFound { message, .. } => {
                message
            }
            DomainError::ValueConstructionFailed { .. } => VALUE_CONSTRUCTION_MESSAGE,
            DomainError::Unexpected { .. } => UNEXPECTED_MESSAGE,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            DomainError::Validation { severity, .. } => *severity,
            DomainError::NotFound { .. }
            | DomainError::ValueConstructionFailed { .. }
            | DomainError::Unexpected { .. } => Severity::Fatal,
        }
    }

    pub fn fault(&self) -> Option<&Fault> {
        match self {
            DomainError::Validation { fault, .. } | DomainError::NotFound { fault, .. } => {
                fault.as_ref()
            }
            DomainError::ValueConstructionFailed { fault } | DomainError::Unexpected { fault } => {
                Some(fault)
            }
        }
    }
}
