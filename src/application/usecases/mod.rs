pub mod rename_player;

use std::{
    any::{Any, type_name},
    fmt,
    panic::{self, AssertUnwindSafe},
};

use async_trait::async_trait;
use futures::FutureExt;
use tracing::{debug, error, warn};

use crate::{
    application::{errors::classify, result::ApplicationResult},
    domain::{DomainError, DomainResult, Fault, Severity, value_objects::ValidationError},
};

/// External input that converts itself into the parameters of a use case.
pub trait Protocol<P>: Send + Sync {
    fn to_parameters(&self) -> DomainResult<P>;
}

/// External input whose conversion reports a bare [`ValidationError`].
///
/// Wrap it in [`Validated`] to hand it to a use case.
pub trait CheckedProtocol<P>: Send + Sync {
    fn check(&self) -> Result<P, ValidationError>;
}

/// Adapts a [`CheckedProtocol`], tagging its validation errors with `severity`.
pub struct Validated<Q> {
    protocol: Q,
    severity: Severity,
}

impl<Q> Validated<Q> {
    pub fn new(protocol: Q, severity: Severity) -> Self {
        Self { protocol, severity }
    }
}

impl<P, Q> Protocol<P> for Validated<Q>
where
    Q: CheckedProtocol<P>,
{
    fn to_parameters(&self) -> DomainResult<P> {
        self.protocol
            .check()
            .map_err(|error| DomainError::invalid(error, self.severity))
            .into()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Validating,
    Executing,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Validating => f.write_str("validating"),
            Phase::Executing => f.write_str("executing"),
        }
    }
}

/// Validate-then-execute template.
///
/// Implementors supply [`UseCase::execute_impl`]; callers go through
/// [`UseCase::execute`], which never panics and always returns a classified
/// outcome:
///
/// - a failed conversion is classified and `execute_impl` is skipped,
/// - a panic while validating or executing becomes `Error(Unexpected)` carrying
///   the panic message as its fault.
#[async_trait]
pub trait UseCase: Send + Sync {
    type Parameters: Send + 'static;
    type Output: Send + 'static;

    /// The business step. Domain failures are expected to come back already
    /// classified.
    async fn execute_impl(&self, parameters: Self::Parameters) -> ApplicationResult<Self::Output>;

    async fn execute(
        &self,
        protocol: &dyn Protocol<Self::Parameters>,
    ) -> ApplicationResult<Self::Output> {
        let use_case = type_name::<Self>();

        let validated = match panic::catch_unwind(AssertUnwindSafe(|| protocol.to_parameters())) {
            Ok(validated) => validated,
            Err(payload) => return unhandled(use_case, Phase::Validating, payload),
        };

        let parameters = match validated {
            DomainResult::Success(parameters) => parameters,
            DomainResult::Failure(error) => {
                warn!(use_case, severity = %error.severity(), "validation failed: {error}");
                return ApplicationResult::Failure(classify(error));
            }
        };

        match AssertUnwindSafe(self.execute_impl(parameters))
            .catch_unwind()
            .await
        {
            Ok(result) => {
                debug!(use_case, success = result.is_success(), "use case finished");
                result
            }
            Err(payload) => unhandled(use_case, Phase::Executing, payload),
        }
    }
}

fn unhandled<R>(
    use_case: &str,
    phase: Phase,
    payload: Box<dyn Any + Send>,
) -> ApplicationResult<R> {
    let fault = Fault::from_panic(payload);
    error!(use_case, %phase, %fault, "unhandled fault");
    ApplicationResult::unexpected(Some(fault))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::{
        application::errors::ApplicationError,
        domain::errors::UNEXPECTED_MESSAGE,
    };

    const VALIDATION_ERROR_MESSAGE: &str = "validation error!!";

    #[derive(Default)]
    struct FailingUseCase {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl UseCase for FailingUseCase {
        type Parameters = i32;
        type Output = i32;

        async fn execute_impl(&self, _parameters: i32) -> ApplicationResult<i32> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            unimplemented!("business step not written yet")
        }
    }

    struct DoublingUseCase;

    #[async_trait]
    impl UseCase for DoublingUseCase {
        type Parameters = i32;
        type Output = i32;

        async fn execute_impl(&self, parameters: i32) -> ApplicationResult<i32> {
            tokio::task::yield_now().await;
            ApplicationResult::Success(parameters * 2)
        }
    }

    struct ValidationErrorProtocol;

    impl Protocol<i32> for ValidationErrorProtocol {
        fn to_parameters(&self) -> DomainResult<i32> {
            DomainResult::Failure(DomainError::validation(
                VALIDATION_ERROR_MESSAGE,
                Severity::Recoverable,
            ))
        }
    }

    struct ValidProtocol;

    impl Protocol<i32> for ValidProtocol {
        fn to_parameters(&self) -> DomainResult<i32> {
            DomainResult::Success(1)
        }
    }

    struct PanickingProtocol;

    impl Protocol<i32> for PanickingProtocol {
        fn to_parameters(&self) -> DomainResult<i32> {
            panic!("conversion blew up")
        }
    }

    struct DigitProtocol(&'static str);

    impl CheckedProtocol<i32> for DigitProtocol {
        fn check(&self) -> Result<i32, ValidationError> {
            crate::domain::value_objects::require_length("digit", self.0, 1, 1)?;
            Ok(self.0.len() as i32)
        }
    }

    #[tokio::test]
    async fn validation_failure_is_returned_without_executing() {
        let use_case = FailingUseCase::default();

        let result = use_case.execute(&ValidationErrorProtocol).await;

        match result {
            ApplicationResult::Failure(ApplicationError::Warning(error)) => {
                assert_eq!(error.message(), VALIDATION_ERROR_MESSAGE)
            }
            other => panic!("expected a warning, got {other:?}"),
        }
        assert_eq!(use_case.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn panicking_business_step_becomes_unexpected_error() {
        let use_case = FailingUseCase::default();

        let result = use_case.execute(&ValidProtocol).await;

        let error = result.failure().unwrap();
        assert!(matches!(
            error,
            ApplicationError::Error(DomainError::Unexpected { .. })
        ));
        assert_eq!(error.message(), UNEXPECTED_MESSAGE);
        let fault = error.fault().unwrap().to_string();
        assert!(fault.contains("business step not written yet"), "{fault}");
        assert_eq!(use_case.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn panicking_conversion_becomes_unexpected_error() {
        let result = DoublingUseCase.execute(&PanickingProtocol).await;

        let error = result.failure().unwrap();
        assert!(matches!(
            error,
            ApplicationError::Error(DomainError::Unexpected { .. })
        ));
        assert_eq!(error.fault().unwrap().to_string(), "conversion blew up");
    }

    #[tokio::test]
    async fn valid_protocol_runs_the_business_step() {
        let result = DoublingUseCase.execute(&ValidProtocol).await;
        assert_eq!(result, ApplicationResult::Success(2));
    }

    #[tokio::test]
    async fn checked_protocol_failures_use_the_configured_severity() {
        let silent = Validated::new(DigitProtocol("12"), Severity::Silent);
        let result = DoublingUseCase.execute(&silent).await;
        assert!(matches!(
            result,
            ApplicationResult::Failure(ApplicationError::Ignorable(_))
        ));

        let fatal = Validated::new(DigitProtocol("12"), Severity::Fatal);
        let result = DoublingUseCase.execute(&fatal).await;
        assert_eq!(
            result.message(),
            Some("digit must be between 1 and 1 characters long, got 2")
        );
        assert!(matches!(
            result,
            ApplicationResult::Failure(ApplicationError::Error(DomainError::Validation { .. }))
        ));

        let valid = Validated::new(DigitProtocol("7"), Severity::Fatal);
        assert_eq!(DoublingUseCase.execute(&valid).await, ApplicationResult::Success(2));
    }
}
