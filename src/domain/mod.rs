pub mod errors;
pub mod models;
pub mod repositories;
pub mod result;
pub mod severity;
pub mod value_objects;

pub use errors::{DomainError, Fault};
pub use result::DomainResult;
pub use severity::Severity;
