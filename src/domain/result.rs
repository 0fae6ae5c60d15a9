use crate::domain::errors::DomainError;

/// Outcome of a business-rule operation.
///
/// Composition goes through [`DomainResult::map`] and [`DomainResult::flat_map`],
/// which stop at the first failure without calling the selector. A panic inside
/// a selector is not caught here.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum DomainResult<T> {
    Success(T),
    Failure(DomainError),
}

impl<T> DomainResult<T> {
    pub fn map<U, F>(self, selector: F) -> DomainResult<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            DomainResult::Success(value) => DomainResult::Success(selector(value)),
            DomainResult::Failure(error) => DomainResult::Failure(error),
        }
    }

    pub fn flat_map<U, F>(self, selector: F) -> DomainResult<U>
    where
        F: FnOnce(T) -> DomainResult<U>,
    {
        match self {
            DomainResult::Success(value) => selector(value),
            DomainResult::Failure(error) => DomainResult::Failure(error),
        }
    }

    /// [`DomainResult::flat_map`] for selectors that await a repository.
    pub async fn flat_map_async<U, F, Fut>(self, selector: F) -> DomainResult<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = DomainResult<U>>,
    {
        match self {
            DomainResult::Success(value) => selector(value).await,
            DomainResult::Failure(error) => DomainResult::Failure(error),
        }
    }

    pub fn map_failure<F>(self, selector: F) -> DomainResult<T>
    where
        F: FnOnce(DomainError) -> DomainError,
    {
        match self {
            DomainResult::Success(value) => DomainResult::Success(value),
            DomainResult::Failure(error) => DomainResult::Failure(selector(error)),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, DomainResult::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, DomainResult::Failure(_))
    }

    pub fn success(self) -> Option<T> {
        match self {
            DomainResult::Success(value) => Some(value),
            DomainResult::Failure(_) => None,
        }
    }

    pub fn failure(self) -> Option<DomainError> {
        match self {
            DomainResult::Success(_) => None,
            DomainResult::Failure(error) => Some(error),
        }
    }

    pub fn into_result(self) -> Result<T, DomainError> {
        match self {
            DomainResult::Success(value) => Ok(value),
            DomainResult::Failure(error) => Err(error),
        }
    }
}

impl<T> From<Result<T, DomainError>> for DomainResult<T> {
    fn from(result: Result<T, DomainError>) -> Self {
        match result {
            Ok(value) => DomainResult::Success(value),
            Err(error) => DomainResult::Failure(error),
        }
    }
}

impl<T> From<DomainResult<T>> for Result<T, DomainError> {
    fn from(result: DomainResult<T>) -> Self {
        result.into_result()
    }
}
