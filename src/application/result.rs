use crate::{
    application::errors::{ApplicationError, classify},
    domain::{DomainResult, Fault},
};

/// Outcome handed to callers once domain failures have been classified.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum ApplicationResult<T> {
    Success(T),
    Failure(ApplicationError),
}

impl<T> ApplicationResult<T> {
    pub fn unexpected(fault: Option<Fault>) -> Self {
        ApplicationResult::Failure(ApplicationError::unexpected(fault))
    }

    pub fn map<U, F>(self, selector: F) -> ApplicationResult<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            ApplicationResult::Success(value) => ApplicationResult::Success(selector(value)),
            ApplicationResult::Failure(error) => ApplicationResult::Failure(error),
        }
    }

    pub fn flat_map<U, F>(self, selector: F) -> ApplicationResult<U>
    where
        F: FnOnce(T) -> ApplicationResult<U>,
    {
        match self {
            ApplicationResult::Success(value) => selector(value),
            ApplicationResult::Failure(error) => ApplicationResult::Failure(error),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApplicationResult::Success(_))
    }

    pub fn success(self) -> Option<T> {
        match self {
            ApplicationResult::Success(value) => Some(value),
            ApplicationResult::Failure(_) => None,
        }
    }

    pub fn failure(self) -> Option<ApplicationError> {
        match self {
            ApplicationResult::Success(_) => None,
            ApplicationResult::Failure(error) => Some(error),
        }
    }

    /// The failure message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            ApplicationResult::Success(_) => None,
            ApplicationResult::Failure(error) => Some(error.message()),
        }
    }
}

impl<T> From<DomainResult<T>> for ApplicationResult<T> {
    fn from(result: DomainResult<T>) -> Self {
        match result {
            DomainResult::Success(value) => ApplicationResult::Success(value),
            DomainResult::Failure(error) => ApplicationResult::Failure(classify(error)),
        }
    }
}
